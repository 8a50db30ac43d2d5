//! Geo-Grundtypen: Koordinaten, Großkreis-Distanz, Rundung.

use serde::{Deserialize, Serialize};

/// Erdradius in Metern (Mittelwert, wie bei OSM-Distanzberechnungen üblich).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographische Koordinate in Grad (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Breitengrad, -90 bis +90
    pub lat: f64,
    /// Längengrad, -180 bis +180
    pub lng: f64,
}

impl Coordinates {
    /// Erstellt validierte Koordinaten.
    ///
    /// Werte außerhalb von lat ∈ [-90, 90] bzw. lng ∈ [-180, 180]
    /// werden abgelehnt (nicht geklemmt).
    pub fn checked(lat: f64, lng: f64) -> anyhow::Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            anyhow::bail!("Breitengrad außerhalb des gültigen Bereichs: {}", lat);
        }
        if !(-180.0..=180.0).contains(&lng) {
            anyhow::bail!("Längengrad außerhalb des gültigen Bereichs: {}", lng);
        }
        Ok(Self { lat, lng })
    }

    /// Lineare Interpolation zwischen zwei Koordinaten (t ∈ [0, 1]).
    ///
    /// Bewusst linear in lat/lng — für die Tracking-Demo ausreichend,
    /// kein Großkreis-Pfad.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            lat: self.lat + (other.lat - self.lat) * t,
            lng: self.lng + (other.lng - self.lng) * t,
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.lat, self.lng)
    }
}

/// Vom Nutzer gewählter Ortspunkt: Koordinate plus optionale Adresse.
///
/// Unveränderlich nach Erstellung; beim erneuten Setzen derselben Rolle
/// wird der Punkt als Ganzes ersetzt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Koordinate des Punkts
    pub coords: Coordinates,
    /// Optionale Adresse (Freitext, nicht geocodiert)
    pub address: Option<String>,
}

impl GeoPoint {
    /// Erstellt einen Punkt aus validierten Koordinaten.
    pub fn new(coords: Coordinates, address: Option<String>) -> Self {
        Self { coords, address }
    }

    /// Anzeigetext für Popups: Adresse falls vorhanden, sonst Koordinaten.
    pub fn label(&self) -> String {
        match &self.address {
            Some(addr) => addr.clone(),
            None => format!("{:.5}, {:.5}", self.coords.lat, self.coords.lng),
        }
    }
}

/// Großkreis-Distanz zwischen zwei Koordinaten in Metern (Haversine).
pub fn haversine_m(a: Coordinates, b: Coordinates) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lng - a.lng).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Rundet auf 2 Nachkommastellen (kaufmännisch).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn checked_accepts_valid_range() {
        assert!(Coordinates::checked(52.52, 13.405).is_ok());
        assert!(Coordinates::checked(-90.0, 180.0).is_ok());
        assert!(Coordinates::checked(90.0, -180.0).is_ok());
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert!(Coordinates::checked(91.0, 0.0).is_err());
        assert!(Coordinates::checked(-90.1, 0.0).is_err());
        assert!(Coordinates::checked(0.0, 180.5).is_err());
        assert!(Coordinates::checked(0.0, -181.0).is_err());
    }

    #[test]
    fn haversine_berlin_munich() {
        let berlin = Coordinates {
            lat: 52.5200,
            lng: 13.4050,
        };
        let munich = Coordinates {
            lat: 48.1351,
            lng: 11.5820,
        };

        let d = haversine_m(berlin, munich);
        // Referenzwert für R = 6371 km
        assert_relative_eq!(d, 504_415.3, max_relative = 1e-4);
    }

    #[test]
    fn haversine_zero_for_identical_points() {
        let p = Coordinates {
            lat: 48.0,
            lng: 11.0,
        };
        assert_relative_eq!(haversine_m(p, p), 0.0);
    }

    #[test]
    fn lerp_hits_endpoints_exactly() {
        let a = Coordinates {
            lat: 52.0,
            lng: 13.0,
        };
        let b = Coordinates {
            lat: 48.0,
            lng: 11.0,
        };

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);

        let mid = a.lerp(b, 0.5);
        assert_relative_eq!(mid.lat, 50.0);
        assert_relative_eq!(mid.lng, 12.0);
    }

    #[test]
    fn round2_rounds_half_up() {
        assert_relative_eq!(round2(504.415), 504.42);
        assert_relative_eq!(round2(1311.0383), 1311.04);
        assert_relative_eq!(round2(50.0), 50.0);
    }

    #[test]
    fn label_prefers_address() {
        let coords = Coordinates {
            lat: 52.52,
            lng: 13.405,
        };
        let with_addr = GeoPoint::new(coords, Some("Hauptstraße 1, Berlin".into()));
        assert_eq!(with_addr.label(), "Hauptstraße 1, Berlin");

        let without = GeoPoint::new(coords, None);
        assert_eq!(without.label(), "52.52000, 13.40500");
    }
}
