//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::render::{draw_scene, DrawSink};
use crate::shared::RenderScene;

/// Orchestriert Zeiger-Events und Grad-Auswahl auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            AppCommand::PickControlPoint { pos, pick_radius } => {
                handlers::editing::pick_control_point(state, pos, pick_radius)
            }
            AppCommand::MoveControlPoint { index, pos } => {
                handlers::editing::move_control_point(state, index, pos)
            }
            AppCommand::EndDrag => handlers::editing::end_drag(state),
            AppCommand::SetDegree { degree } => handlers::editing::set_degree(state, degree),
            AppCommand::Resample => handlers::editing::resample(state),
        }

        Ok(())
    }

    /// Baut die RenderScene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }

    /// Zeichnet den aktuellen Frame in eine Zeichen-Senke.
    pub fn render(&self, state: &AppState, sink: &mut dyn DrawSink) {
        let scene = self.build_render_scene(state);
        draw_scene(&scene, sink);
    }
}
