//! VINOS IBERICOS.
//!
//! Karte spanischer Weinregionen (Denominaciones de Origen) mit
//! umschaltbaren Flaschen-Markern, gefiltert nach Weinfarbe.

use eframe::egui;
use vinos_ibericos::{ui, AppAssets, AppController, AppIntent, AppOptions, AppState};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("VINOS IBERICOS v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AppOptions::config_path();
        let options = AppOptions::load_from_file(&config_path);

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([options.window_width, options.window_height])
                .with_title("VINOS IBERICOS"),
            ..Default::default()
        };

        eframe::run_native(
            "VINOS IBERICOS",
            native_options,
            Box::new(move |cc| {
                // Asset-Fehler brechen den Start ab (fail-fast)
                let app = VinosApp::new(cc, options)?;
                Ok(Box::new(app))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct VinosApp {
    state: AppState,
    controller: AppController,
    textures: ui::AppTextures,
}

impl VinosApp {
    /// Lädt die Bild-Assets und baut den Anwendungszustand auf.
    fn new(cc: &eframe::CreationContext<'_>, options: AppOptions) -> anyhow::Result<Self> {
        let assets = AppAssets::load(&options)?;
        let textures = ui::AppTextures::upload(&cc.egui_ctx, &assets);

        Ok(Self {
            state: AppState::new(options),
            controller: AppController::new(),
            textures,
        })
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_filter_bar(ctx, &self.state));
        events.extend(ui::render_region_panel(ctx, &self.state));
        ui::render_map_canvas(ctx, &self.state, &self.textures);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(AppIntent::ExitRequested);
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }
}

impl eframe::App for VinosApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let config_path = AppOptions::config_path();
        if let Err(e) = self.state.options.save_to_file(&config_path) {
            log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
        }
    }
}
