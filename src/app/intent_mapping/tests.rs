use crate::app::{AppCommand, AppIntent};
use crate::core::WineColor;

use super::map_intent_to_commands;

#[test]
fn region_toggle_requested_maps_to_toggle_region() {
    let commands = map_intent_to_commands(AppIntent::RegionToggleRequested { region: "Rioja" });

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::ToggleRegion { region: "Rioja" }
    ));
}

#[test]
fn wine_filter_requested_maps_to_show_wine() {
    let commands = map_intent_to_commands(AppIntent::WineFilterRequested {
        wine: WineColor::Blanco,
    });

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::ShowWine {
            wine: WineColor::Blanco
        }
    ));
}

#[test]
fn bulk_intents_map_to_single_commands() {
    assert_eq!(
        map_intent_to_commands(AppIntent::ShowAllRequested),
        vec![AppCommand::ShowAll]
    );
    assert_eq!(
        map_intent_to_commands(AppIntent::HideAllRequested),
        vec![AppCommand::HideAll]
    );
    assert_eq!(
        map_intent_to_commands(AppIntent::ExitRequested),
        vec![AppCommand::RequestExit]
    );
}
