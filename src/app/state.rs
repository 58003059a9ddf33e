//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{MarkerBoard, WineCatalog};
use crate::shared::AppOptions;

/// Zentraler Anwendungszustand.
///
/// Der Katalog ist unveränderlich; das Marker-Board ist der einzige
/// mutierbare Domänen-Zustand. Alles läuft synchron auf dem UI-Thread.
pub struct AppState {
    /// Statischer DO-Katalog
    pub catalog: WineCatalog,
    /// Sichtbare Marker (Region-Name → Handle)
    pub board: MarkerBoard,
    /// Laufzeit-Optionen
    pub options: AppOptions,
    /// Log aller ausgeführten Commands
    pub command_log: CommandLog,
    /// Statusnachricht für die Status-Bar
    pub status_message: Option<String>,
    /// Beenden angefordert
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppOptions::default())
    }
}

impl AppState {
    /// Erstellt den Startzustand mit leerem Marker-Board.
    pub fn new(options: AppOptions) -> Self {
        Self {
            catalog: WineCatalog::spain(),
            board: MarkerBoard::new(),
            options,
            command_log: CommandLog::new(),
            status_message: None,
            should_exit: false,
        }
    }
}
