//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{MarkerState, PointMarker, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let dragged = state.editor.drag.dragged_index();
    let markers = state
        .control_points
        .all()
        .iter()
        .enumerate()
        .map(|(index, &position)| PointMarker {
            index,
            position,
            state: if dragged == Some(index) {
                MarkerState::Selected
            } else {
                MarkerState::Normal
            },
        })
        .collect();

    RenderScene {
        curve: state.curve.clone(),
        markers,
        control_polygon: state.control_points.all().to_vec(),
        selected_degree: state.editor.degree,
        effective_degree: state.effective_degree(),
        options: state.options.clone(),
    }
}
