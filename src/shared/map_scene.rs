//! Karten-Szene als expliziter Übergabevertrag zwischen App und Karten-Canvas.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::PlannerOptions;
use crate::core::{Coordinates, PointRole};

/// Ein zu zeichnender Orts-Marker.
#[derive(Debug, Clone)]
pub struct SceneMarker {
    /// Geografische Position des Markers
    pub coords: Coordinates,
    /// Rolle des Ortes (bestimmt die Farbe)
    pub role: PointRole,
    /// Beschriftung neben dem Marker
    pub label: String,
}

/// Read-only Daten für einen Karten-Frame.
#[derive(Debug, Clone)]
pub struct MapScene {
    /// Zu zeichnende Orts-Marker (0 bis 2)
    pub markers: Vec<SceneMarker>,
    /// Gestrichelte Luftlinien-Route zwischen Abhol- und Lieferort
    pub route: Option<(Coordinates, Coordinates)>,
    /// Fahrzeugposition auf der Tracking-Seite
    pub vehicle: Option<Coordinates>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: PlannerOptions,
}
