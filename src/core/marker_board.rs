//! Marker-Verwaltung: Region-Name → sichtbarer Flaschen-Marker.

use indexmap::IndexMap;

use super::catalog::{DoRegion, WineCatalog, WineColor};
use super::geo::GeoPoint;

/// Handle eines sichtbaren Flaschen-Markers auf der Karte.
#[derive(Debug, Clone, Copy)]
pub struct BottleMarker {
    /// Geografische Position des Markers
    pub position: GeoPoint,
    /// Weinfarbe (bestimmt das Flaschen-Icon)
    pub wine: WineColor,
}

/// Verwaltet die aktuell sichtbaren Marker.
///
/// Einziger mutierbarer Domänen-Zustand: Region-Name → Marker-Handle,
/// fehlender Schlüssel = Marker ausgeblendet. Pro Region existiert höchstens
/// ein Handle. IndexMap hält die Einfüge-Reihenfolge für deterministische
/// Zeichen-Reihenfolge.
#[derive(Default)]
pub struct MarkerBoard {
    markers: IndexMap<&'static str, BottleMarker>,
}

impl MarkerBoard {
    /// Erstellt ein leeres Marker-Board.
    pub fn new() -> Self {
        Self {
            markers: IndexMap::new(),
        }
    }

    /// Blendet den Marker einer Region ein (idempotent).
    pub fn show(&mut self, region: &DoRegion) {
        if self.markers.contains_key(region.name) {
            return;
        }
        self.markers.insert(
            region.name,
            BottleMarker {
                position: region.position,
                wine: region.wine,
            },
        );
    }

    /// Blendet den Marker einer Region aus (idempotent).
    /// Gibt `true` zurück, wenn ein Marker entfernt wurde.
    pub fn hide(&mut self, name: &str) -> bool {
        self.markers.shift_remove(name).is_some()
    }

    /// Schaltet den Marker einer Region um.
    /// Gibt die neue Sichtbarkeit zurück.
    pub fn toggle(&mut self, region: &DoRegion) -> bool {
        if self.hide(region.name) {
            false
        } else {
            self.show(region);
            true
        }
    }

    /// Zeigt ausschließlich die Regionen einer Weinfarbe.
    pub fn show_wine(&mut self, catalog: &WineCatalog, wine: WineColor) {
        self.hide_all();
        for region in catalog.by_wine(wine) {
            self.show(region);
        }
    }

    /// Zeigt alle Katalog-Regionen.
    pub fn show_all(&mut self, catalog: &WineCatalog) {
        for region in catalog.iter() {
            self.show(region);
        }
    }

    /// Entfernt alle Marker.
    pub fn hide_all(&mut self) {
        self.markers.clear();
    }

    /// Prüft ob der Marker einer Region aktuell sichtbar ist.
    pub fn is_shown(&self, name: &str) -> bool {
        self.markers.contains_key(name)
    }

    /// Anzahl sichtbarer Marker.
    pub fn shown_count(&self) -> usize {
        self.markers.len()
    }

    /// Anzahl sichtbarer Marker einer Weinfarbe.
    pub fn shown_count_of(&self, wine: WineColor) -> usize {
        self.markers.values().filter(|m| m.wine == wine).count()
    }

    /// Gibt `true` zurück, wenn kein Marker sichtbar ist.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iteriert über sichtbare Marker in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &BottleMarker)> {
        self.markers.iter().map(|(name, marker)| (*name, marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rioja(catalog: &WineCatalog) -> &DoRegion {
        catalog.get("Rioja").expect("Rioja muss im Katalog stehen")
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let catalog = WineCatalog::spain();
        let mut board = MarkerBoard::new();

        for region in catalog.iter() {
            let before = board.is_shown(region.name);
            board.toggle(region);
            board.toggle(region);
            assert_eq!(board.is_shown(region.name), before);
        }
        assert!(board.is_empty());
    }

    #[test]
    fn test_show_is_idempotent() {
        let catalog = WineCatalog::spain();
        let mut board = MarkerBoard::new();
        let region = rioja(&catalog);

        board.show(region);
        let count_once = board.shown_count();
        board.show(region);

        assert_eq!(board.shown_count(), count_once);
        assert_eq!(count_once, 1);
    }

    #[test]
    fn test_hide_is_idempotent() {
        let catalog = WineCatalog::spain();
        let mut board = MarkerBoard::new();
        let region = rioja(&catalog);

        assert!(!board.hide(region.name));
        board.show(region);
        assert!(board.hide(region.name));
        assert!(!board.hide(region.name));
    }

    #[test]
    fn test_show_wine_shows_exactly_that_color() {
        let catalog = WineCatalog::spain();
        let mut board = MarkerBoard::new();

        board.show_wine(&catalog, WineColor::Blanco);

        for region in catalog.iter() {
            assert_eq!(
                board.is_shown(region.name),
                region.wine == WineColor::Blanco,
                "Sichtbarkeit von '{}' passt nicht zum Blanco-Filter",
                region.name
            );
        }
    }

    #[test]
    fn test_show_wine_hides_previous_markers() {
        // Filter ersetzt die Sichtbarkeit komplett, statt sie zu ergänzen
        let catalog = WineCatalog::spain();
        let mut board = MarkerBoard::new();

        board.show(rioja(&catalog));
        assert!(board.is_shown("Rioja"));

        board.show_wine(&catalog, WineColor::Blanco);

        assert!(!board.is_shown("Rioja"));
        assert_eq!(
            board.shown_count(),
            catalog.by_wine(WineColor::Blanco).count()
        );
    }

    #[test]
    fn test_hide_all_after_show_all_leaves_board_empty() {
        let catalog = WineCatalog::spain();
        let mut board = MarkerBoard::new();

        board.show_all(&catalog);
        assert_eq!(board.shown_count(), catalog.len());

        board.hide_all();
        assert!(board.is_empty());
    }

    #[test]
    fn test_marker_carries_catalog_position_and_wine() {
        let catalog = WineCatalog::spain();
        let mut board = MarkerBoard::new();
        let region = rioja(&catalog);

        board.show(region);
        let (_, marker) = board.iter().next().expect("Marker muss existieren");
        assert_eq!(marker.position, region.position);
        assert_eq!(marker.wine, WineColor::Tinto);
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let catalog = WineCatalog::spain();
        let mut board = MarkerBoard::new();

        board.show(catalog.get("Jerez").unwrap());
        board.show(catalog.get("Rioja").unwrap());
        board.show(catalog.get("Rueda").unwrap());

        let names: Vec<&str> = board.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Jerez", "Rioja", "Rueda"]);
    }
}
