//! Simulierte Live-Verfolgung eines Fahrzeugs zwischen zwei Festpunkten.
//!
//! Reine Demo ohne echte Telemetrie: ein Fortschrittsskalar wird in festen
//! Schritten erhöht, alles Weitere (Position, Restdistanz, Geschwindigkeit,
//! ETA) ist daraus abgeleitet.

use std::time::Duration;

use super::geo::{haversine_m, Coordinates};

/// Tick-Periode der Simulation.
pub const TICK_PERIOD: Duration = Duration::from_secs(2);
/// Fortschrittsschritt pro Tick in Prozentpunkten.
pub const PROGRESS_STEP: f64 = 0.5;
/// Basisgeschwindigkeit der Anzeige in km/h.
pub const SPEED_BASE_KMH: f64 = 65.0;
/// Amplitude der sinusförmigen Geschwindigkeitsvariation in km/h.
pub const SPEED_AMPLITUDE_KMH: f64 = 15.0;
/// Angenommene Gesamtfahrzeit in Minuten (für die ETA-Anzeige).
pub const ETA_BASE_MIN: u64 = 135;

/// Startpunkt der Demo-Route (Berlin).
pub const ROUTE_START: Coordinates = Coordinates {
    lat: 52.5200,
    lng: 13.4050,
};
/// Zielpunkt der Demo-Route (München).
pub const ROUTE_END: Coordinates = Coordinates {
    lat: 48.1351,
    lng: 11.5820,
};

/// Phase der simulierten Fahrt, abgeleitet aus dem Fortschritt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingPhase {
    /// Unterwegs zum Abholort (< 50 %)
    ToPickup,
    /// In Transit (< 100 %)
    InTransit,
    /// Kommt gleich an (100 %)
    Arriving,
}

impl TrackingPhase {
    /// Deutscher Anzeigetext.
    pub fn display_name(self) -> &'static str {
        match self {
            TrackingPhase::ToPickup => "Unterwegs zum Abholort",
            TrackingPhase::InTransit => "In Transit",
            TrackingPhase::Arriving => "Kommt gleich an",
        }
    }
}

/// Zustand der Tracking-Simulation.
///
/// Einziger veränderlicher Kern ist `progress` (0–100) plus die
/// mitgezählten Minuten; alle Anzeigwerte sind Funktionen davon.
#[derive(Debug, Clone)]
pub struct TrackingSim {
    progress: f64,
    elapsed_min: u64,
    running: bool,
    total_km: f64,
}

impl TrackingSim {
    /// Erstellt eine frische Simulation am Routenstart.
    ///
    /// Die Gesamtdistanz wird aus den Endpunkten abgeleitet statt
    /// hartkodiert, damit Restdistanz und Endpunkte zusammenpassen.
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            elapsed_min: 0,
            running: false,
            total_km: haversine_m(ROUTE_START, ROUTE_END) / 1000.0,
        }
    }

    /// Startet die Simulation (idempotent).
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Hält die Simulation an (idempotent).
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Gibt zurück, ob die Simulation läuft.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Führt einen Tick aus: Fortschritt +0,5 %, gedeckelt bei 100.
    ///
    /// No-op wenn die Simulation nicht läuft oder bereits fertig ist.
    pub fn tick(&mut self) {
        if !self.running || self.is_complete() {
            return;
        }
        self.progress = (self.progress + PROGRESS_STEP).min(100.0);
        self.elapsed_min += 1;
    }

    /// Fortschritt in Prozent (0–100).
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Fortschritt als Bruchteil (0–1).
    fn t(&self) -> f64 {
        self.progress / 100.0
    }

    /// Gibt zurück, ob das Ziel erreicht ist.
    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }

    /// Interpolierte Fahrzeugposition zwischen den Endpunkten.
    pub fn vehicle_position(&self) -> Coordinates {
        ROUTE_START.lerp(ROUTE_END, self.t())
    }

    /// Verbleibende Distanz in Kilometern.
    pub fn remaining_km(&self) -> f64 {
        (self.total_km * (1.0 - self.t())).max(0.0)
    }

    /// Gesamtlänge der Demo-Route in Kilometern.
    pub fn total_km(&self) -> f64 {
        self.total_km
    }

    /// Angezeigte Geschwindigkeit in km/h (sinusförmig variiert).
    pub fn speed_kmh(&self) -> i64 {
        let t = self.t();
        (SPEED_BASE_KMH + SPEED_AMPLITUDE_KMH * (t * std::f64::consts::TAU).sin()).round() as i64
    }

    /// Abgelaufene Zeit in Minuten.
    pub fn elapsed_min(&self) -> u64 {
        self.elapsed_min
    }

    /// Verbleibende Minuten bis zur Ankunft (Anzeige).
    pub fn eta_min(&self) -> u64 {
        ETA_BASE_MIN.saturating_sub(self.elapsed_min)
    }

    /// Aktuelle Fahrtphase.
    pub fn phase(&self) -> TrackingPhase {
        if self.progress < 50.0 {
            TrackingPhase::ToPickup
        } else if self.progress < 100.0 {
            TrackingPhase::InTransit
        } else {
            TrackingPhase::Arriving
        }
    }
}

impl Default for TrackingSim {
    fn default() -> Self {
        Self::new()
    }
}

/// Formatiert Minuten als "Xh Ym".
pub fn format_minutes(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tick_is_noop_while_stopped() {
        let mut sim = TrackingSim::new();
        sim.tick();
        assert_relative_eq!(sim.progress(), 0.0);
        assert_eq!(sim.elapsed_min(), 0);
    }

    #[test]
    fn tick_advances_in_half_percent_steps() {
        let mut sim = TrackingSim::new();
        sim.start();
        sim.tick();
        sim.tick();
        assert_relative_eq!(sim.progress(), 1.0);
        assert_eq!(sim.elapsed_min(), 2);
    }

    #[test]
    fn progress_caps_at_hundred() {
        let mut sim = TrackingSim::new();
        sim.start();
        // 200 Ticks erreichen 100 %, danach keine Änderung mehr
        for _ in 0..250 {
            sim.tick();
        }
        assert_relative_eq!(sim.progress(), 100.0);
        assert!(sim.is_complete());
        assert_eq!(sim.elapsed_min(), 200);
        assert_eq!(sim.phase(), TrackingPhase::Arriving);
    }

    #[test]
    fn vehicle_position_matches_endpoints() {
        let mut sim = TrackingSim::new();
        assert_eq!(sim.vehicle_position(), ROUTE_START);

        sim.start();
        for _ in 0..200 {
            sim.tick();
        }
        assert_eq!(sim.vehicle_position(), ROUTE_END);
    }

    #[test]
    fn remaining_distance_derives_from_endpoints() {
        let mut sim = TrackingSim::new();
        assert_relative_eq!(sim.remaining_km(), sim.total_km());

        sim.start();
        for _ in 0..100 {
            sim.tick();
        }
        // 50 % Fortschritt → halbe Strecke
        assert_relative_eq!(sim.remaining_km(), sim.total_km() / 2.0, max_relative = 1e-9);
        assert_eq!(sim.phase(), TrackingPhase::InTransit);
    }

    #[test]
    fn speed_starts_at_base_value() {
        let sim = TrackingSim::new();
        assert_eq!(sim.speed_kmh(), 65);
    }

    #[test]
    fn eta_counts_down_and_saturates() {
        let mut sim = TrackingSim::new();
        assert_eq!(sim.eta_min(), 135);

        sim.start();
        for _ in 0..200 {
            sim.tick();
        }
        assert_eq!(sim.eta_min(), 0);
    }

    #[test]
    fn format_minutes_splits_hours() {
        assert_eq!(format_minutes(135), "2h 15m");
        assert_eq!(format_minutes(59), "0h 59m");
    }
}
