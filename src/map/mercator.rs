//! Web-Mercator-Kartenansicht mit Pan und Zoom.
//!
//! Weltkoordinaten sind auf [0, 1]² normiert (Mercator-Quadrat); der Zoom
//! folgt der Slippy-Map-Konvention: Maßstab = TILE_SIZE · 2^zoom Pixel pro
//! Welteinheit.

use glam::DVec2;

use super::MapSurface;
use crate::core::Coordinates;

/// Kantenlänge einer Mercator-Kachel in Pixeln (Slippy-Map-Konvention).
pub const TILE_SIZE: f64 = 256.0;
/// Maximal darstellbarer Breitengrad der Mercator-Projektion.
pub const MAX_LATITUDE: f64 = 85.051_128;

/// Standard-Ansichtszentrum: Deutschland.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 51.1657,
    lng: 10.4515,
};
/// Standard-Zoomlevel der Startansicht.
pub const DEFAULT_ZOOM: f64 = 6.0;

/// Web-Mercator-Implementierung von [`MapSurface`].
#[derive(Debug, Clone)]
pub struct MercatorMap {
    /// Ansichtszentrum in normierten Weltkoordinaten
    center_world: DVec2,
    /// Zoom-Level (Slippy-Konvention)
    zoom: f64,
}

impl MercatorMap {
    /// Erstellt die Standardansicht (Deutschland, Zoom 6).
    pub fn new() -> Self {
        Self {
            center_world: geo_to_world(DEFAULT_CENTER),
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Pixel pro Welteinheit beim aktuellen Zoom.
    fn scale(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }
}

impl Default for MercatorMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MapSurface for MercatorMap {
    fn set_view(&mut self, center: Coordinates, zoom: f64) {
        self.center_world = geo_to_world(center);
        self.zoom = zoom;
    }

    fn center(&self) -> Coordinates {
        world_to_geo(self.center_world)
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn pan_pixels(&mut self, delta_px: DVec2) {
        self.center_world =
            (self.center_world + delta_px / self.scale()).clamp(DVec2::ZERO, DVec2::ONE);
    }

    fn zoom_by(&mut self, factor: f64, focus: Option<Coordinates>, zoom_min: f64, zoom_max: f64) {
        let old_scale = self.scale();
        self.zoom = (self.zoom + factor.log2()).clamp(zoom_min, zoom_max);
        let new_scale = self.scale();

        if let Some(focus) = focus {
            // Fokuspunkt bleibt an derselben Bildschirmposition
            let focus_world = geo_to_world(focus);
            self.center_world =
                focus_world + (self.center_world - focus_world) * old_scale / new_scale;
            self.center_world = self.center_world.clamp(DVec2::ZERO, DVec2::ONE);
        }
    }

    fn fit_bounds(
        &mut self,
        a: Coordinates,
        b: Coordinates,
        viewport: DVec2,
        padding_px: f64,
        zoom_min: f64,
        zoom_max: f64,
    ) {
        let wa = geo_to_world(a);
        let wb = geo_to_world(b);

        self.center_world = (wa + wb) / 2.0;

        // Verfügbarer Platz nach Abzug des Rands; Degenerate-Fälle abfangen
        let avail = (viewport - DVec2::splat(2.0 * padding_px)).max(DVec2::splat(1.0));
        let extent = (wa - wb).abs().max(DVec2::splat(1e-9));

        let needed_scale = (avail.x / extent.x).min(avail.y / extent.y);
        self.zoom = (needed_scale / TILE_SIZE).log2().clamp(zoom_min, zoom_max);
    }

    fn project(&self, point: Coordinates, viewport: DVec2) -> DVec2 {
        (geo_to_world(point) - self.center_world) * self.scale() + viewport / 2.0
    }

    fn unproject(&self, screen: DVec2, viewport: DVec2) -> Coordinates {
        let world =
            (self.center_world + (screen - viewport / 2.0) / self.scale()).clamp(DVec2::ZERO, DVec2::ONE);
        world_to_geo(world)
    }
}

/// Geo-Koordinate → normierte Mercator-Weltkoordinate [0, 1]².
fn geo_to_world(coords: Coordinates) -> DVec2 {
    let lat = coords.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = (coords.lng + 180.0) / 360.0;
    let y = (1.0 - lat.to_radians().tan().asinh() / std::f64::consts::PI) / 2.0;
    DVec2::new(x, y)
}

/// Normierte Mercator-Weltkoordinate → Geo-Koordinate.
fn world_to_geo(world: DVec2) -> Coordinates {
    let lng = world.x * 360.0 - 180.0;
    let lat = (std::f64::consts::PI * (1.0 - 2.0 * world.y)).sinh().atan().to_degrees();
    Coordinates { lat, lng }
}
