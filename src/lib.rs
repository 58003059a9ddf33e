//! VINOS IBERICOS Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CommandLog};
pub use core::{
    AppAssets, BottleMarker, DoRegion, GeoPoint, MarkerBoard, RasterBounds, WineCatalog, WineColor,
};
pub use shared::AppOptions;
