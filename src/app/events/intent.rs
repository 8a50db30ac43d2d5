use super::super::state::{Page, ServiceKind};
use crate::core::{Coordinates, PointRole};
use crate::shared::PlannerOptions;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Seite wechseln (Buchung / Sendungsverfolgung)
    PageSelected { page: Page },

    /// Rollen-Button angeklickt (Abholort / Lieferort scharf schalten)
    RoleSelected { role: PointRole },
    /// Klick auf die Karte an einer geografischen Position
    MapClicked { position: Coordinates },
    /// Ort explizit setzen (z.B. aus den Adressfeldern übernommen)
    PlacePointRequested {
        role: PointRole,
        lat: f64,
        lng: f64,
        address: Option<String>,
    },
    /// Beide Orte und alle abgeleiteten Werte löschen
    ClearPointsRequested,
    /// Marker-Sperre umschalten (Klicks auf die Karte ignorieren)
    LockMarkersToggled,

    /// Kamera auf Standardansicht zurücksetzen
    ResetViewRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Karte um Delta verschieben (Screen-Pixel)
    CameraPan { delta_px: glam::DVec2 },
    /// Karte zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus: Option<Coordinates>,
    },

    /// Zum nächsten Schritt des Buchungsassistenten wechseln
    WizardNextRequested,
    /// Zum vorigen Schritt des Buchungsassistenten wechseln
    WizardBackRequested,
    /// Dienstleistung im Assistenten auswählen
    ServiceSelected { service: ServiceKind },
    /// Buchung verbindlich abschließen
    BookingSubmitted,

    /// Zwei-Sekunden-Tick der Sendungsverfolgung
    TrackingTicked,

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Geänderte Optionen übernehmen und speichern
    OptionsChanged { options: PlannerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
