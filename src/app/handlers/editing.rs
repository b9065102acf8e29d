//! Handler für Kontrollpunkt-Drag und Grad-Auswahl.

use crate::app::state::DragState;
use crate::app::AppState;
use crate::shared::{clamp_degree, MAX_DEGREE, MIN_DEGREE};
use glam::DVec2;

/// Greift den ersten Kontrollpunkt im Pick-Radius.
///
/// Ohne Treffer bleibt der Drag-Zustand unverändert.
pub fn pick_control_point(state: &mut AppState, pos: DVec2, pick_radius: f64) {
    match state.control_points.hit_test(pos, pick_radius) {
        Some(index) => {
            state.editor.drag = DragState::Dragging { index };
            log::info!("Drag gestartet: P{} bei ({:.1}, {:.1})", index, pos.x, pos.y);
        }
        None => {
            log::debug!("Kein Kontrollpunkt bei ({:.1}, {:.1})", pos.x, pos.y);
        }
    }
}

/// Setzt den Kontrollpunkt `index` auf die Zeigerposition.
///
/// `index` stammt aus dem Hit-Test; ein ungültiger Index ist ein Invariantenbruch
/// und bricht im Store per Assertion ab.
pub fn move_control_point(state: &mut AppState, index: usize, pos: DVec2) {
    state.control_points.set(index, pos);
}

/// Beendet einen laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    if let Some(index) = state.editor.drag.dragged_index() {
        let pos = state.control_points.get(index);
        log::info!("Drag beendet: P{} bei ({:.1}, {:.1})", index, pos.x, pos.y);
    }
    state.editor.drag = DragState::Idle;
}

/// Setzt den gewählten Grad. Werte außerhalb von 1..=6 werden geklemmt.
pub fn set_degree(state: &mut AppState, degree: usize) {
    let clamped = clamp_degree(degree);
    if clamped != degree {
        log::warn!(
            "Grad {} außerhalb von {}..={}, verwende {}",
            degree,
            MIN_DEGREE,
            MAX_DEGREE,
            clamped
        );
    }
    state.editor.degree = clamped;
    log::info!(
        "Grad: {} (effektiv {})",
        state.editor.degree,
        state.effective_degree()
    );
}

/// Tastet die Kurve neu ab.
pub fn resample(state: &mut AppState) {
    state.resample();
}
