//! UI-Schicht: egui-Panels, die Intents erzeugen, und Textur-Upload.

pub mod filter_bar;
pub mod map_canvas;
pub mod region_panel;
pub mod status;
pub mod textures;

pub use filter_bar::render_filter_bar;
pub use map_canvas::render_map_canvas;
pub use region_panel::render_region_panel;
pub use status::render_status_bar;
pub use textures::AppTextures;
