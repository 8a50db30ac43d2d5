use super::super::state::{Page, ServiceKind};
use crate::core::{Coordinates, PointRole};
use crate::shared::PlannerOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Seite wechseln
    SetPage { page: Page },

    /// Rollenauswahl scharf schalten bzw. wieder lösen
    SelectRole { role: PointRole },
    /// Ort mit einer Rolle setzen und abgeleitete Werte neu berechnen
    PlacePoint {
        role: PointRole,
        lat: f64,
        lng: f64,
        address: Option<String>,
    },
    /// Beide Orte und alle abgeleiteten Werte löschen
    ClearPoints,
    /// Marker-Sperre umschalten
    ToggleLockMarkers,

    /// Kamera auf Standardansicht zurücksetzen
    ResetView,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Karte um Delta verschieben (Screen-Pixel)
    PanCamera { delta_px: glam::DVec2 },
    /// Karte zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f64,
        focus: Option<Coordinates>,
    },

    /// Zum nächsten Assistenten-Schritt wechseln
    WizardNext,
    /// Zum vorigen Assistenten-Schritt wechseln
    WizardBack,
    /// Dienstleistung setzen
    SetService { service: ServiceKind },
    /// Buchung verbindlich abschließen
    ConfirmBooking,

    /// Sendungsverfolgung starten
    StartTracking,
    /// Sendungsverfolgung anhalten
    StopTracking,
    /// Sendungsverfolgung um einen Tick fortschreiben
    AdvanceTracking,

    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: PlannerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
