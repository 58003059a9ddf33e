//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::WineColor;

/// Intents: Eingaben aus der UI ohne direkte Mutationslogik.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppIntent {
    /// Marker einer Region umschalten (Regions-Button)
    RegionToggleRequested { region: &'static str },
    /// Nur Regionen einer Weinfarbe zeigen (Filter-Button)
    WineFilterRequested { wine: WineColor },
    /// Alle Marker zeigen
    ShowAllRequested,
    /// Alle Marker ausblenden
    HideAllRequested,
    /// Anwendung beenden
    ExitRequested,
}

/// Commands: mutierende Operationen auf dem AppState.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Marker einer Region umschalten
    ToggleRegion { region: &'static str },
    /// Ausschließlich Regionen einer Weinfarbe zeigen
    ShowWine { wine: WineColor },
    /// Alle Katalog-Regionen zeigen
    ShowAll,
    /// Alle Marker entfernen
    HideAll,
    /// Anwendung beenden
    RequestExit,
}
