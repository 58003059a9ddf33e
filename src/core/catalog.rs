//! Katalog der spanischen Weinregionen (Denominaciones de Origen).

use super::geo::GeoPoint;

/// Weinfarbe einer DO-Region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WineColor {
    /// Rotwein
    Tinto,
    /// Weißwein
    Blanco,
}

impl WineColor {
    /// Anzeigename (spanisch, wie im Katalog).
    pub fn label(&self) -> &'static str {
        match self {
            WineColor::Tinto => "Tinto",
            WineColor::Blanco => "Blanco",
        }
    }
}

/// Eintrag einer DO-Region im Katalog.
#[derive(Debug, Clone, Copy)]
pub struct DoRegion {
    /// Name der Region (Katalog-Schlüssel)
    pub name: &'static str,
    /// Geografische Position (ungefährer Mittelpunkt der Region)
    pub position: GeoPoint,
    /// Weinfarbe, für die die Region steht
    pub wine: WineColor,
}

const fn region(name: &'static str, lat: f64, lon: f64, wine: WineColor) -> DoRegion {
    DoRegion {
        name,
        position: GeoPoint::new(lat, lon),
        wine,
    }
}

/// Statische Katalog-Tabelle. Wird zur Compile-Zeit definiert, nie mutiert.
const DO_VINOS: &[DoRegion] = &[
    region("Rioja", 42.3, -2.5, WineColor::Tinto),
    region("Ribera del Duero", 41.6, -3.7, WineColor::Tinto),
    region("Toro", 41.5, -5.4, WineColor::Tinto),
    region("Bierzo", 42.6, -6.6, WineColor::Tinto),
    region("Rueda", 41.4, -4.9, WineColor::Blanco),
    region("Rías Baixas", 42.5, -8.7, WineColor::Blanco),
    region("Txakoli de Getaria", 43.2, -2.2, WineColor::Blanco),
    region("Navarra", 42.5, -1.7, WineColor::Tinto),
    region("Somontano", 42.0, 0.1, WineColor::Tinto),
    region("Priorat", 41.2, 0.8, WineColor::Tinto),
    region("Penedès", 41.4, 1.7, WineColor::Blanco),
    region("Utiel-Requena", 39.5, -1.2, WineColor::Tinto),
    region("Valencia", 39.4, -0.6, WineColor::Blanco),
    region("Jumilla", 38.5, -1.3, WineColor::Tinto),
    region("La Mancha", 39.2, -3.0, WineColor::Tinto),
    region("Valdepeñas", 38.8, -3.4, WineColor::Tinto),
    region("Montilla-Moriles", 37.6, -4.6, WineColor::Blanco),
    region("Jerez", 36.7, -6.1, WineColor::Blanco),
];

/// Katalog der Weinregionen: Name → (Position, Weinfarbe).
///
/// Alle Regions-Namen der UI stammen aus diesem Katalog, Lookups können
/// daher konstruktionsbedingt nicht fehlschlagen.
pub struct WineCatalog {
    regions: &'static [DoRegion],
}

impl Default for WineCatalog {
    fn default() -> Self {
        Self::spain()
    }
}

impl WineCatalog {
    /// Erstellt den Spanien-Katalog.
    pub fn spain() -> Self {
        Self { regions: DO_VINOS }
    }

    /// Schlägt eine Region per Name nach.
    pub fn get(&self, name: &str) -> Option<&DoRegion> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Iteriert über alle Regionen in Katalog-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &DoRegion> {
        self.regions.iter()
    }

    /// Iteriert über alle Regionen einer Weinfarbe.
    pub fn by_wine(&self, wine: WineColor) -> impl Iterator<Item = &DoRegion> {
        self.regions.iter().filter(move |r| r.wine == wine)
    }

    /// Anzahl der Regionen im Katalog.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Gibt `true` zurück, wenn der Katalog leer ist.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
