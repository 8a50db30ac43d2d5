//! Karten-Oberfläche als Capability-Schnittstelle.
//!
//! Die Picker-Logik kennt den konkreten Kartenanbieter nicht; sie arbeitet
//! ausschließlich gegen [`MapSurface`]. Der Standardanbieter ist
//! [`MercatorMap`] (Web-Mercator ohne Tile-Download).

pub mod mercator;

pub use mercator::MercatorMap;

use glam::DVec2;

use crate::core::{haversine_m, Coordinates};

/// Fähigkeiten einer Kartenansicht: View setzen, Bounds einpassen,
/// Distanz berechnen, zwischen Geo- und Bildschirmkoordinaten umrechnen.
pub trait MapSurface {
    /// Zentriert die Ansicht auf einen Punkt mit gegebenem Zoom.
    fn set_view(&mut self, center: Coordinates, zoom: f64);

    /// Aktuelles Ansichtszentrum.
    fn center(&self) -> Coordinates;

    /// Aktueller Zoom-Level.
    fn zoom(&self) -> f64;

    /// Verschiebt die Ansicht um ein Bildschirm-Delta in Pixeln.
    fn pan_pixels(&mut self, delta_px: DVec2);

    /// Zoomt um einen Faktor, optional auf einen Fokuspunkt, der dabei
    /// an seiner Bildschirmposition bleibt.
    fn zoom_by(&mut self, factor: f64, focus: Option<Coordinates>, zoom_min: f64, zoom_max: f64);

    /// Passt die Ansicht so an, dass beide Punkte mit Pixel-Rand sichtbar sind.
    fn fit_bounds(
        &mut self,
        a: Coordinates,
        b: Coordinates,
        viewport: DVec2,
        padding_px: f64,
        zoom_min: f64,
        zoom_max: f64,
    );

    /// Rechnet eine Geo-Koordinate in lokale Viewport-Pixel um.
    fn project(&self, point: Coordinates, viewport: DVec2) -> DVec2;

    /// Rechnet lokale Viewport-Pixel in eine Geo-Koordinate um.
    fn unproject(&self, screen: DVec2, viewport: DVec2) -> Coordinates;

    /// Großkreis-Distanz zwischen zwei Punkten in Metern.
    fn distance_between(&self, a: Coordinates, b: Coordinates) -> f64 {
        haversine_m(a, b)
    }
}
