//! Handler für Marker-Operationen auf dem Board.

use crate::app::AppState;
use crate::core::WineColor;

/// Schaltet den Marker einer Region um.
pub fn toggle_region(state: &mut AppState, region: &'static str) {
    let Some(entry) = state.catalog.get(region) else {
        // Kommt im regulären Betrieb nicht vor: alle Buttons stammen aus dem Katalog
        log::warn!("Unbekannte Region ignoriert: '{}'", region);
        return;
    };
    let shown = state.board.toggle(entry);
    log::info!(
        "Region '{}' {}",
        region,
        if shown { "eingeblendet" } else { "ausgeblendet" }
    );
}

/// Zeigt ausschließlich die Regionen einer Weinfarbe.
pub fn show_wine(state: &mut AppState, wine: WineColor) {
    state.board.show_wine(&state.catalog, wine);
    let count = state.board.shown_count();
    log::info!("Filter aktiv: nur {}-Regionen ({} Marker)", wine.label(), count);
    state.status_message = Some(format!("Nur {}: {} Regionen", wine.label(), count));
}

/// Zeigt alle Katalog-Regionen.
pub fn show_all(state: &mut AppState) {
    state.board.show_all(&state.catalog);
    log::info!("Alle {} Regionen eingeblendet", state.board.shown_count());
    state.status_message = Some(format!("Alle {} Regionen sichtbar", state.board.shown_count()));
}

/// Entfernt alle Marker.
pub fn hide_all(state: &mut AppState) {
    state.board.hide_all();
    log::info!("Alle Marker ausgeblendet");
    state.status_message = None;
}
