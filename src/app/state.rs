//! Application State: zentrale Datenhaltung einer Editier-Session.

use super::CommandLog;
use crate::core::geometry::{points_on_circle, polyline_length};
use crate::core::{effective_degree, sample_curve, ControlPointStore};
use crate::shared::{clamp_degree, EditorOptions};
use glam::DVec2;

/// Drag-Zustand des Zeigers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Kontrollpunkt gegriffen
    #[default]
    Idle,
    /// Kontrollpunkt `index` folgt dem Zeiger
    Dragging { index: usize },
}

impl DragState {
    /// Index des gezogenen Punkts, falls ein Drag läuft.
    pub fn dragged_index(self) -> Option<usize> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { index } => Some(index),
        }
    }

    /// Gibt `true` zurück, solange ein Drag läuft.
    pub fn is_dragging(self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Zustand des Spline-Editors (Grad-Auswahl und Drag).
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Gewählter Grad (1..=6); die Auswertung klemmt ihn zusätzlich auf `n`
    pub degree: usize,
    /// Aktueller Drag-Zustand
    pub drag: DragState,
}

impl EditorState {
    /// Erstellt den Editor-Zustand mit dem gegebenen Start-Grad.
    pub fn new(degree: usize) -> Self {
        Self {
            degree: clamp_degree(degree),
            drag: DragState::Idle,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte der Session
    pub control_points: ControlPointStore,
    /// Grad-Auswahl und Drag-Zustand
    pub editor: EditorState,
    /// Ergebnis des letzten Abtast-Durchlaufs
    pub curve: Vec<DVec2>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Abtastung)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt die Start-Session mit Standard-Optionen.
    pub fn new() -> Self {
        Self::from_options(EditorOptions::default())
    }

    /// Erstellt die Start-Session: Kontrollpunkte gleichmäßig auf einem Kreis
    /// um die Mitte der Zeichenfläche.
    pub fn from_options(options: EditorOptions) -> Self {
        let points = points_on_circle(
            options.canvas_center(),
            options.initial_layout_radius,
            options.initial_point_count,
        );
        Self::with_control_points(points, options)
    }

    /// Erstellt eine Session mit vorgegebenen Kontrollpunkten.
    pub fn with_control_points(points: Vec<DVec2>, options: EditorOptions) -> Self {
        let mut state = Self {
            control_points: ControlPointStore::new(points),
            editor: EditorState::new(options.default_degree),
            curve: Vec::new(),
            command_log: CommandLog::new(),
            options,
        };
        state.resample();
        state
    }

    /// Tastet die Kurve mit den aktuellen Kontrollpunkten und dem Grad neu ab.
    pub fn resample(&mut self) {
        self.curve = sample_curve(
            self.control_points.all(),
            self.editor.degree,
            self.options.sample_count,
        );
        log::debug!(
            "Kurve neu abgetastet: {} Punkte, Grad {} (effektiv {}), Länge {:.1}",
            self.curve.len(),
            self.editor.degree,
            self.effective_degree(),
            polyline_length(&self.curve)
        );
    }

    /// Grad, mit dem die Kurve tatsächlich ausgewertet wird.
    pub fn effective_degree(&self) -> usize {
        let n = self.control_points.count().saturating_sub(1);
        effective_degree(self.editor.degree, n)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
