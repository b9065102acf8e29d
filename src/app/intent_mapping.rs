//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => vec![AppCommand::PickControlPoint {
            pos,
            pick_radius: state.options.pick_radius,
        }],
        AppIntent::PointerMoved { pos } => match state.editor.drag.dragged_index() {
            Some(index) => vec![
                AppCommand::MoveControlPoint { index, pos },
                AppCommand::Resample,
            ],
            None => vec![],
        },
        AppIntent::PointerReleased { .. } => vec![AppCommand::EndDrag],
        AppIntent::DegreeSelected { degree } => {
            vec![AppCommand::SetDegree { degree }, AppCommand::Resample]
        }
    }
}
