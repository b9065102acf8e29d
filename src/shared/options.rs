//! Zentrale Konfiguration für den B-Spline-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Breite der Zeichenfläche.
pub const CANVAS_WIDTH: f64 = 800.0;
/// Höhe der Zeichenfläche.
pub const CANVAS_HEIGHT: f64 = 600.0;

// ── Start-Szene ─────────────────────────────────────────────────────

/// Anzahl der Kontrollpunkte beim Start.
pub const INITIAL_POINT_COUNT: usize = 7;
/// Radius des Kreises, auf dem die Start-Kontrollpunkte liegen.
pub const INITIAL_LAYOUT_RADIUS: f64 = 150.0;

// ── Spline ──────────────────────────────────────────────────────────

/// Kleinster wählbarer Grad.
pub const MIN_DEGREE: usize = 1;
/// Größter wählbarer Grad.
pub const MAX_DEGREE: usize = 6;
/// Grad beim Start (kubisch).
pub const DEFAULT_DEGREE: usize = 3;

// ── Editieren ───────────────────────────────────────────────────────

/// Pick-Radius: Klick innerhalb dieses Abstands greift einen Kontrollpunkt.
pub const PICK_RADIUS: f64 = 10.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius der Kontrollpunkt-Marker.
pub const MARKER_RADIUS: f64 = 5.0;
/// Versatz der Beschriftung `P{i}` relativ zum Marker.
pub const LABEL_OFFSET: [f64; 2] = [10.0, -10.0];
/// Kurvenfarbe (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe normaler Marker (RGBA: Schwarz).
pub const MARKER_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe des gerade gezogenen Markers (RGBA: Rot).
pub const MARKER_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe für Kontrollpolygon und Beschriftungen (RGBA: Grau).
pub const HELPER_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bspline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Zeichenfläche ───────────────────────────────────────────
    /// Breite der Zeichenfläche
    pub canvas_width: f64,
    /// Höhe der Zeichenfläche
    pub canvas_height: f64,

    // ── Start-Szene ─────────────────────────────────────────────
    /// Anzahl der Kontrollpunkte beim Start
    pub initial_point_count: usize,
    /// Kreisradius der Start-Anordnung
    pub initial_layout_radius: f64,

    // ── Spline ──────────────────────────────────────────────────
    /// Grad beim Start (wird auf MIN_DEGREE..=MAX_DEGREE geklemmt)
    pub default_degree: usize,
    /// Anzahl der Abtast-Intervalle pro Kurve
    pub sample_count: usize,

    // ── Editieren ───────────────────────────────────────────────
    /// Pick-Radius für Kontrollpunkte
    pub pick_radius: f64,

    // ── Kurve ───────────────────────────────────────────────────
    /// Kurvenfarbe (RGBA)
    pub curve_color: [f32; 4],
    /// Linienstärke der Kurve
    pub curve_width: f64,

    // ── Kontrollpolygon ─────────────────────────────────────────
    /// Farbe des gestrichelten Kontrollpolygons
    pub polygon_color: [f32; 4],
    /// Linienstärke des Kontrollpolygons
    pub polygon_width: f64,
    /// Strich-/Lückenlänge der Strichelung
    pub polygon_dash: [f64; 2],

    // ── Marker ──────────────────────────────────────────────────
    /// Radius der Kontrollpunkt-Marker
    pub marker_radius: f64,
    /// Füllfarbe normaler Marker
    pub marker_color: [f32; 4],
    /// Füllfarbe des gezogenen Markers
    pub marker_color_selected: [f32; 4],
    /// Outline-Farbe aller Marker
    pub marker_outline_color: [f32; 4],

    // ── Beschriftung ────────────────────────────────────────────
    /// Versatz der Punkt-Beschriftung
    pub label_offset: [f64; 2],
    /// Farbe der Punkt-Beschriftung
    pub label_color: [f32; 4],
    /// Schriftgröße der Punkt-Beschriftung
    pub label_font_size: f64,
    /// Position der Grad-Anzeige
    pub caption_position: [f64; 2],
    /// Farbe der Grad-Anzeige
    pub caption_color: [f32; 4],
    /// Schriftgröße der Grad-Anzeige
    pub caption_font_size: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            initial_point_count: INITIAL_POINT_COUNT,
            initial_layout_radius: INITIAL_LAYOUT_RADIUS,

            default_degree: DEFAULT_DEGREE,
            sample_count: crate::core::DEFAULT_SAMPLE_COUNT,

            pick_radius: PICK_RADIUS,

            curve_color: CURVE_COLOR,
            curve_width: 2.0,

            polygon_color: HELPER_COLOR,
            polygon_width: 1.0,
            polygon_dash: [3.0, 3.0],

            marker_radius: MARKER_RADIUS,
            marker_color: MARKER_COLOR,
            marker_color_selected: MARKER_COLOR_SELECTED,
            marker_outline_color: MARKER_COLOR,

            label_offset: LABEL_OFFSET,
            label_color: HELPER_COLOR,
            label_font_size: 8.0,
            caption_position: [50.0, 20.0],
            caption_color: MARKER_COLOR,
            caption_font_size: 12.0,
        }
    }
}

/// Klemmt einen Grad auf den wählbaren Bereich `MIN_DEGREE..=MAX_DEGREE`.
pub fn clamp_degree(degree: usize) -> usize {
    degree.clamp(MIN_DEGREE, MAX_DEGREE)
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bspline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bspline_editor.toml")
    }

    /// Mittelpunkt der Zeichenfläche.
    pub fn canvas_center(&self) -> glam::DVec2 {
        glam::DVec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// Korrigiert Werte außerhalb ihres gültigen Bereichs.
    pub fn sanitized(mut self) -> Self {
        let degree = clamp_degree(self.default_degree);
        if degree != self.default_degree {
            log::warn!(
                "Start-Grad {} außerhalb von {}..={}, verwende {}",
                self.default_degree,
                MIN_DEGREE,
                MAX_DEGREE,
                degree
            );
            self.default_degree = degree;
        }
        if self.sample_count == 0 {
            log::warn!("sample_count = 0, verwende {}", crate::core::DEFAULT_SAMPLE_COUNT);
            self.sample_count = crate::core::DEFAULT_SAMPLE_COUNT;
        }
        if self.pick_radius.is_nan() || self.pick_radius < 0.0 {
            log::warn!("Ungültiger Pick-Radius {}, verwende {}", self.pick_radius, PICK_RADIUS);
            self.pick_radius = PICK_RADIUS;
        }
        self
    }
}
