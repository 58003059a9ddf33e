//! Geo→Pixel-Umrechnung für das statische Kartenraster.

use glam::Vec2;

/// Geografische Koordinate in Dezimalgrad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Breitengrad (Nord positiv)
    pub lat: f64,
    /// Längengrad (Ost positiv)
    pub lon: f64,
}

impl GeoPoint {
    /// Erstellt eine neue Koordinate.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Geografische Bounding-Box eines Kartenrasters.
///
/// Flache äquirektangulare Näherung über einer kleinen Bounding-Box,
/// keine Projektions-Korrektur.
#[derive(Debug, Clone, Copy)]
pub struct RasterBounds {
    /// Nördlicher Breitengrad (obere Rasterkante)
    pub north: f64,
    /// Südlicher Breitengrad (untere Rasterkante)
    pub south: f64,
    /// Westlicher Längengrad (linke Rasterkante)
    pub west: f64,
    /// Östlicher Längengrad (rechte Rasterkante)
    pub east: f64,
}

impl RasterBounds {
    /// Bounding-Box des mitgelieferten Spanien-Rasters (`assets/mapa_espana.png`).
    pub const SPAIN: RasterBounds = RasterBounds {
        north: 43.9,
        south: 35.9,
        west: -9.4,
        east: 3.4,
    };

    /// Rechnet eine Geo-Koordinate in Pixel-Koordinaten eines Rasters um.
    ///
    /// Affine Transformation: Nordwest-Ecke → (0, 0), Südost-Ecke →
    /// (raster_size.x, raster_size.y). Koordinaten außerhalb der Bounding-Box
    /// werden nicht geklemmt und landen stillschweigend außerhalb des Rasters.
    pub fn to_pixel(&self, point: GeoPoint, raster_size: Vec2) -> Vec2 {
        let fx = (point.lon - self.west) / (self.east - self.west);
        let fy = (self.north - point.lat) / (self.north - self.south);
        Vec2::new(fx as f32 * raster_size.x, fy as f32 * raster_size.y)
    }

    /// Prüft ob eine Koordinate innerhalb der Bounding-Box liegt.
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat <= self.north
            && point.lat >= self.south
            && point.lon >= self.west
            && point.lon <= self.east
    }
}
