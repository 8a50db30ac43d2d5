//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{BookingDraft, LocationChange, RoleSelection, TrackingSim};
use crate::map::{MapSurface, MercatorMap};
use crate::shared::PlannerOptions;
use std::time::Instant;

/// Aktive Seite der Anwendung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Buchungsassistent mit Kartenauswahl
    #[default]
    Booking,
    /// Live-Sendungsverfolgung
    Tracking,
}

/// Buchbare Dienstleistung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// Kompletter Umzug inklusive Transport
    Moving,
    /// End- und Zwischenreinigung
    Cleaning,
    /// Professionelles Ein- und Auspacken
    Packing,
}

impl ServiceKind {
    /// Anzeigename für UI und Zusammenfassung.
    pub fn display_name(self) -> &'static str {
        match self {
            ServiceKind::Moving => "Umzugsdienst",
            ServiceKind::Cleaning => "Reinigungsdienst",
            ServiceKind::Packing => "Verpackungsdienst",
        }
    }
}

/// Zustand der Ortsauswahl auf der Karte
pub struct BookingState {
    /// Buchungsentwurf (Orte + abgeleitete Werte)
    pub draft: BookingDraft,
    /// Scharfgeschaltete Rolle für den nächsten Kartenklick
    pub role_selection: RoleSelection,
    /// Marker-Sperre: Kartenklicks setzen keine Orte
    pub lock_markers: bool,
    /// Freitext-Adressfeld für den Abholort
    pub pickup_address_input: String,
    /// Freitext-Adressfeld für den Lieferort
    pub delivery_address_input: String,
    /// Noch nicht abgeholte Orts-Änderungsmeldungen (in Commit-Reihenfolge)
    pub notifications: Vec<LocationChange>,
}

impl BookingState {
    /// Erstellt einen leeren Ortsauswahl-Zustand.
    pub fn new() -> Self {
        Self {
            draft: BookingDraft::new(),
            role_selection: RoleSelection::default(),
            lock_markers: false,
            pickup_address_input: String::new(),
            delivery_address_input: String::new(),
            notifications: Vec::new(),
        }
    }

    /// Holt alle aufgelaufenen Änderungsmeldungen ab und leert die Queue.
    pub fn take_notifications(&mut self) -> Vec<LocationChange> {
        std::mem::take(&mut self.notifications)
    }
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new()
    }
}

/// View-bezogener Anwendungszustand
pub struct ViewState {
    /// Kartenprojektion für die Ansicht
    pub map: Box<dyn MapSurface>,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (Deutschland-Übersicht).
    pub fn new() -> Self {
        Self {
            map: Box::new(MercatorMap::new()),
            viewport_size: [0.0, 0.0],
        }
    }

    /// Viewport-Größe als f64-Vektor für die Kartenprojektion.
    pub fn viewport_dvec2(&self) -> glam::DVec2 {
        glam::DVec2::new(self.viewport_size[0] as f64, self.viewport_size[1] as f64)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Zustand des vierstufigen Buchungsassistenten
pub struct WizardState {
    /// Aktueller Schritt (1 = Kontaktdaten, 2 = Dienstleistung, 3 = Orte & Zeit, 4 = Bestätigung)
    pub step: u8,
    /// Name des Kunden
    pub name: String,
    /// E-Mail-Adresse
    pub email: String,
    /// Telefonnummer
    pub phone: String,
    /// Ausgewählte Dienstleistung
    pub service: Option<ServiceKind>,
    /// Wunschdatum (Freitext)
    pub date: String,
    /// Wunschuhrzeit (Freitext)
    pub time: String,
    /// Zusammenfassung des Abholorts (aus Änderungsmeldungen übernommen)
    pub summary_pickup: Option<String>,
    /// Zusammenfassung des Lieferorts (aus Änderungsmeldungen übernommen)
    pub summary_delivery: Option<String>,
    /// Buchung wurde verbindlich abgeschlossen
    pub confirmed: bool,
}

/// Erster Schritt des Assistenten.
pub const WIZARD_FIRST_STEP: u8 = 1;
/// Letzter Schritt des Assistenten.
pub const WIZARD_LAST_STEP: u8 = 4;

impl WizardState {
    /// Erstellt den Assistenten-Zustand auf Schritt 1.
    pub fn new() -> Self {
        Self {
            step: WIZARD_FIRST_STEP,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            service: None,
            date: String::new(),
            time: String::new(),
            summary_pickup: None,
            summary_delivery: None,
            confirmed: false,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Zustand der Sendungsverfolgung
pub struct TrackingState {
    /// Simulation der laufenden Lieferung
    pub sim: TrackingSim,
    /// Zeitpunkt des letzten Ticks (None = Timer nicht aktiv)
    pub last_tick: Option<Instant>,
}

impl TrackingState {
    /// Erstellt den Tracking-Zustand mit angehaltener Simulation.
    pub fn new() -> Self {
        Self {
            sim: TrackingSim::new(),
            last_tick: None,
        }
    }
}

impl Default for TrackingState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Aktive Seite
    pub page: Page,
    /// Temporäre Statusnachricht (z.B. nach Buchungsabschluss)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (Buchungsseite aktiv).
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Ortsauswahl und Buchungsentwurf
    pub booking: BookingState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Buchungsassistent
    pub wizard: WizardState,
    /// Sendungsverfolgung
    pub tracking: TrackingState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Preise, Kamera, Farben)
    pub options: PlannerOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(PlannerOptions::default())
    }

    /// Erstellt einen neuen App-State mit bereits geladenen Optionen.
    pub fn with_options(options: PlannerOptions) -> Self {
        Self {
            booking: BookingState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            wizard: WizardState::new(),
            tracking: TrackingState::new(),
            command_log: CommandLog::new(),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
