//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::RegionToggleRequested { region } => vec![AppCommand::ToggleRegion { region }],
        AppIntent::WineFilterRequested { wine } => vec![AppCommand::ShowWine { wine }],
        AppIntent::ShowAllRequested => vec![AppCommand::ShowAll],
        AppIntent::HideAllRequested => vec![AppCommand::HideAll],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
