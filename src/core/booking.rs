//! Buchungsentwurf: Abhol-/Lieferpunkt, abgeleitete Distanz und Preis.

use serde::{Deserialize, Serialize};

use super::geo::{round2, GeoPoint};

/// Rolle eines Ortspunkts im Buchungsentwurf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointRole {
    /// Abholort
    Pickup,
    /// Lieferort
    Delivery,
}

impl PointRole {
    /// Deutscher Anzeigename für UI und Logs.
    pub fn display_name(self) -> &'static str {
        match self {
            PointRole::Pickup => "Abholort",
            PointRole::Delivery => "Lieferort",
        }
    }
}

/// Expliziter Zustandsautomat für die Rollenauswahl.
///
/// Ein Kartenklick wird nur dann einer Rolle fest zugeordnet, wenn der
/// Automat in `AwaitingPickup` oder `AwaitingDelivery` steht. In `Idle`
/// greift die dokumentierte Fallback-Reihenfolge (siehe Intent-Mapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleSelection {
    /// Keine Rolle scharfgeschaltet
    #[default]
    Idle,
    /// Nächster Kartenklick setzt den Abholort
    AwaitingPickup,
    /// Nächster Kartenklick setzt den Lieferort
    AwaitingDelivery,
}

impl RoleSelection {
    /// Schaltet eine Rolle scharf bzw. wieder aus (Toggle).
    pub fn toggle(self, role: PointRole) -> Self {
        let armed = match role {
            PointRole::Pickup => RoleSelection::AwaitingPickup,
            PointRole::Delivery => RoleSelection::AwaitingDelivery,
        };
        if self == armed {
            RoleSelection::Idle
        } else {
            armed
        }
    }

    /// Gibt die wartende Rolle zurück, falls eine scharfgeschaltet ist.
    pub fn awaiting(self) -> Option<PointRole> {
        match self {
            RoleSelection::Idle => None,
            RoleSelection::AwaitingPickup => Some(PointRole::Pickup),
            RoleSelection::AwaitingDelivery => Some(PointRole::Delivery),
        }
    }
}

/// Preistabelle: Grundpreis plus Kilometersatz.
#[derive(Debug, Clone, Copy)]
pub struct PricingSchedule {
    /// Grundpreis in Euro
    pub base_price: f64,
    /// Preis pro Kilometer in Euro
    pub price_per_km: f64,
}

impl PricingSchedule {
    /// Berechnet den Preis aus der (ungerundeten) Distanz in Kilometern.
    ///
    /// Gerundet wird nur das Ergebnis, nicht die Eingangsdistanz.
    pub fn quote(&self, distance_km: f64) -> f64 {
        round2(self.base_price + distance_km * self.price_per_km)
    }
}

/// Benachrichtigung an den übergeordneten Buchungsablauf:
/// das aktuell committete Punktepaar nach jeder Änderung.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationChange {
    /// Abholort nach der Änderung (None = entfernt)
    pub pickup: Option<GeoPoint>,
    /// Lieferort nach der Änderung (None = entfernt)
    pub delivery: Option<GeoPoint>,
}

/// Buchungsentwurf mit beiden Ortspunkten und den abgeleiteten Feldern.
///
/// Invariante: `distance_km` und `price_estimate` sind genau dann gesetzt,
/// wenn beide Punkte gesetzt sind. Die Felder sind privat, damit die
/// Invariante nur über die Methoden verändert werden kann.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pickup: Option<GeoPoint>,
    delivery: Option<GeoPoint>,
    distance_km: Option<f64>,
    price_estimate: Option<f64>,
}

impl BookingDraft {
    /// Erstellt einen leeren Entwurf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Abholort.
    pub fn pickup(&self) -> Option<&GeoPoint> {
        self.pickup.as_ref()
    }

    /// Aktueller Lieferort.
    pub fn delivery(&self) -> Option<&GeoPoint> {
        self.delivery.as_ref()
    }

    /// Punkt für eine Rolle.
    pub fn point(&self, role: PointRole) -> Option<&GeoPoint> {
        match role {
            PointRole::Pickup => self.pickup(),
            PointRole::Delivery => self.delivery(),
        }
    }

    /// Abgeleitete Distanz in Kilometern (2 Nachkommastellen).
    pub fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    /// Abgeleiteter Preisvorschlag in Euro (2 Nachkommastellen).
    pub fn price_estimate(&self) -> Option<f64> {
        self.price_estimate
    }

    /// Beide Punkte, falls vollständig.
    pub fn both_points(&self) -> Option<(&GeoPoint, &GeoPoint)> {
        match (&self.pickup, &self.delivery) {
            (Some(p), Some(d)) => Some((p, d)),
            _ => None,
        }
    }

    /// Gibt zurück, ob Distanz und Preis vorliegen (buchbar).
    pub fn is_quotable(&self) -> bool {
        self.distance_km.is_some() && self.price_estimate.is_some()
    }

    /// Ersetzt den Punkt einer Rolle (last-write-wins).
    ///
    /// Die abgeleiteten Felder werden verworfen; der Aufrufer berechnet
    /// sie über [`BookingDraft::apply_quote`] neu, sobald beide Punkte
    /// vorliegen.
    pub fn place(&mut self, role: PointRole, point: GeoPoint) {
        match role {
            PointRole::Pickup => self.pickup = Some(point),
            PointRole::Delivery => self.delivery = Some(point),
        }
        self.distance_km = None;
        self.price_estimate = None;
    }

    /// Setzt die abgeleiteten Felder. Nur gültig, wenn beide Punkte gesetzt sind.
    pub fn apply_quote(&mut self, distance_km: f64, price_estimate: f64) {
        debug_assert!(self.both_points().is_some());
        self.distance_km = Some(distance_km);
        self.price_estimate = Some(price_estimate);
    }

    /// Entfernt beide Punkte und die abgeleiteten Felder.
    pub fn clear(&mut self) {
        self.pickup = None;
        self.delivery = None;
        self.distance_km = None;
        self.price_estimate = None;
    }

    /// Momentaufnahme des Punktepaars für eine Benachrichtigung.
    pub fn location_change(&self) -> LocationChange {
        LocationChange {
            pickup: self.pickup.clone(),
            delivery: self.delivery.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::Coordinates;
    use approx::assert_relative_eq;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(Coordinates { lat, lng }, None)
    }

    #[test]
    fn place_replaces_point_and_clears_derived() {
        let mut draft = BookingDraft::new();
        draft.place(PointRole::Pickup, point(52.0, 13.0));
        draft.place(PointRole::Delivery, point(48.0, 11.0));
        draft.apply_quote(500.0, 1300.0);
        assert!(draft.is_quotable());

        draft.place(PointRole::Pickup, point(53.0, 10.0));

        assert_eq!(draft.pickup().unwrap().coords.lat, 53.0);
        // Lieferort bleibt unberührt, abgeleitete Felder sind verworfen
        assert_eq!(draft.delivery().unwrap().coords.lat, 48.0);
        assert!(draft.distance_km().is_none());
        assert!(draft.price_estimate().is_none());
    }

    #[test]
    fn clear_removes_everything() {
        let mut draft = BookingDraft::new();
        draft.place(PointRole::Pickup, point(52.0, 13.0));
        draft.place(PointRole::Delivery, point(48.0, 11.0));
        draft.apply_quote(500.0, 1300.0);

        draft.clear();

        assert!(draft.pickup().is_none());
        assert!(draft.delivery().is_none());
        assert!(draft.distance_km().is_none());
        assert!(draft.price_estimate().is_none());
    }

    #[test]
    fn quote_uses_unrounded_distance() {
        let pricing = PricingSchedule {
            base_price: 50.0,
            price_per_km: 2.5,
        };
        // Berlin→München: 504.4153... km
        assert_relative_eq!(pricing.quote(504.415_331), 1311.04);
        assert_relative_eq!(pricing.quote(0.0), 50.0);
    }

    #[test]
    fn role_selection_toggles() {
        let s = RoleSelection::Idle;
        let s = s.toggle(PointRole::Pickup);
        assert_eq!(s, RoleSelection::AwaitingPickup);

        // Gleiche Rolle erneut → wieder Idle
        let s = s.toggle(PointRole::Pickup);
        assert_eq!(s, RoleSelection::Idle);

        // Wechsel von Pickup auf Delivery direkt
        let s = RoleSelection::AwaitingPickup.toggle(PointRole::Delivery);
        assert_eq!(s, RoleSelection::AwaitingDelivery);
        assert_eq!(s.awaiting(), Some(PointRole::Delivery));
    }
}
