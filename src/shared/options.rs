//! Zentrale Konfiguration für VINOS IBERICOS.
//!
//! `AppOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Fensterbreite beim Start in Pixeln.
pub const WINDOW_WIDTH: f32 = 1280.0;
/// Fensterhöhe beim Start in Pixeln.
pub const WINDOW_HEIGHT: f32 = 800.0;

// ── Assets ──────────────────────────────────────────────────────────

/// Pfad zum Spanien-Kartenraster.
pub const MAP_IMAGE_PATH: &str = "assets/mapa_espana.png";
/// Pfad zum Tinto-Flaschen-Icon.
pub const TINTO_ICON_PATH: &str = "assets/botella_tinto.png";
/// Pfad zum Blanco-Flaschen-Icon.
pub const BLANCO_ICON_PATH: &str = "assets/botella_blanco.png";

// ── Marker ──────────────────────────────────────────────────────────

/// Marker-Breite auf dem Bildschirm in Pixeln.
/// Die Höhe folgt dem Seitenverhältnis des Flaschen-Icons.
pub const MARKER_WIDTH_PX: f32 = 22.0;

// ── Panels ──────────────────────────────────────────────────────────

/// Breite des Regions-Panels in Pixeln.
pub const REGION_PANEL_WIDTH: f32 = 190.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `vinos_ibericos.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppOptions {
    // ── Fenster ─────────────────────────────────────────────────
    /// Fensterbreite beim Start in Pixeln
    pub window_width: f32,
    /// Fensterhöhe beim Start in Pixeln
    pub window_height: f32,

    // ── Assets ──────────────────────────────────────────────────
    /// Pfad zum Kartenraster
    pub map_image_path: String,
    /// Pfad zum Tinto-Flaschen-Icon
    pub tinto_icon_path: String,
    /// Pfad zum Blanco-Flaschen-Icon
    pub blanco_icon_path: String,

    // ── Darstellung ─────────────────────────────────────────────
    /// Marker-Breite auf dem Bildschirm in Pixeln
    pub marker_width_px: f32,
    /// Breite des Regions-Panels in Pixeln
    #[serde(default = "default_region_panel_width")]
    pub region_panel_width: f32,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            map_image_path: MAP_IMAGE_PATH.to_string(),
            tinto_icon_path: TINTO_ICON_PATH.to_string(),
            blanco_icon_path: BLANCO_ICON_PATH.to_string(),
            marker_width_px: MARKER_WIDTH_PX,
            region_panel_width: REGION_PANEL_WIDTH,
        }
    }
}

/// Serde-Default für `region_panel_width` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_region_panel_width() -> f32 {
    REGION_PANEL_WIDTH
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("vinos_ibericos"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("vinos_ibericos.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let opts = AppOptions::default();
        assert_eq!(opts.marker_width_px, MARKER_WIDTH_PX);
        assert_eq!(opts.map_image_path, MAP_IMAGE_PATH);
    }

    #[test]
    fn test_toml_roundtrip() {
        let opts = AppOptions::default();
        let toml_str = toml::to_string_pretty(&opts).expect("Serialisierung darf nicht fehlschlagen");
        let restored: AppOptions = toml::from_str(&toml_str).expect("Deserialisierung darf nicht fehlschlagen");
        assert_eq!(restored.window_width, opts.window_width);
        assert_eq!(restored.tinto_icon_path, opts.tinto_icon_path);
    }

    #[test]
    fn test_missing_panel_width_falls_back_to_default() {
        // Alte TOML-Dateien ohne region_panel_width bleiben ladbar
        let toml_str = r#"
            window_width = 800.0
            window_height = 600.0
            map_image_path = "assets/mapa_espana.png"
            tinto_icon_path = "assets/botella_tinto.png"
            blanco_icon_path = "assets/botella_blanco.png"
            marker_width_px = 30.0
        "#;
        let opts: AppOptions = toml::from_str(toml_str).expect("TOML muss ladbar sein");
        assert_eq!(opts.region_panel_width, REGION_PANEL_WIDTH);
        assert_eq!(opts.marker_width_px, 30.0);
    }

    #[test]
    fn test_unreadable_file_yields_defaults() {
        let opts = AppOptions::load_from_file(std::path::Path::new("/gibt/es/nicht.toml"));
        assert_eq!(opts.window_width, WINDOW_WIDTH);
    }
}
