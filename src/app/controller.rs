//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent→Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command);
        use super::handlers;

        match command {
            // === Marker ===
            AppCommand::ToggleRegion { region } => handlers::markers::toggle_region(state, region),
            AppCommand::ShowWine { wine } => handlers::markers::show_wine(state, wine),
            AppCommand::ShowAll => handlers::markers::show_all(state),
            AppCommand::HideAll => handlers::markers::hide_all(state),

            // === Session ===
            AppCommand::RequestExit => handlers::session::request_exit(state),
        }

        Ok(())
    }
}
