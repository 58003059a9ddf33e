//! Domänen-Kern: Katalog, Geo-Umrechnung, Marker-Board und Assets.

pub mod assets;
pub mod catalog;
pub mod geo;
pub mod marker_board;

pub use assets::AppAssets;
pub use catalog::{DoRegion, WineCatalog, WineColor};
pub use geo::{GeoPoint, RasterBounds};
pub use marker_board::{BottleMarker, MarkerBoard};
