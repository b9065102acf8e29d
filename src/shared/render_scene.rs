//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use glam::DVec2;

/// Darstellungszustand eines Kontrollpunkt-Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerState {
    #[default]
    Normal,
    /// Punkt wird gerade gezogen
    Selected,
}

/// Beschrifteter Kontrollpunkt-Marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMarker {
    /// Index im Kontrollpunkt-Store (Beschriftung `P{index}`)
    pub index: usize,
    pub position: DVec2,
    pub state: MarkerState,
}

impl PointMarker {
    /// Beschriftungstext des Markers.
    pub fn label(&self) -> String {
        format!("P{}", self.index)
    }
}

/// Read-only Daten für einen kompletten Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Abgetastete Kurve (leer bei degeneriertem Parameterbereich)
    pub curve: Vec<DVec2>,
    /// Ein Marker pro Kontrollpunkt, in Index-Reihenfolge
    pub markers: Vec<PointMarker>,
    /// Gestrichelte Verbindung der Kontrollpunkte in Reihenfolge
    pub control_polygon: Vec<DVec2>,
    /// Vom Benutzer gewählter Grad (Anzeige)
    pub selected_degree: usize,
    /// Tatsächlich ausgewerteter Grad nach Klemmung auf `n`
    pub effective_degree: usize,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine zeichenbare Kurve vorhanden ist.
    pub fn has_curve(&self) -> bool {
        self.curve.len() > 1
    }

    /// Gibt zurück, ob das Kontrollpolygon gezeichnet werden soll.
    pub fn has_control_polygon(&self) -> bool {
        self.control_polygon.len() > 1
    }

    /// Text der Grad-Anzeige.
    pub fn caption(&self) -> String {
        format!("Degree: {}", self.selected_degree)
    }

    /// Größe der Zeichenfläche `[Breite, Höhe]`.
    pub fn canvas_size(&self) -> [f64; 2] {
        [self.options.canvas_width, self.options.canvas_height]
    }
}
