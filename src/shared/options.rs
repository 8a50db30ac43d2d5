//! Zentrale Konfiguration für den Umzug-Buchungsplaner.
//!
//! `PlannerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Preiskalkulation ───────────────────────────────────────────────

/// Grundpreis eines Umzugs in Euro.
pub const BASE_PRICE_EUR: f64 = 50.0;
/// Preis pro Kilometer Luftlinie in Euro.
pub const PRICE_PER_KM_EUR: f64 = 2.5;

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimale Zoom-Stufe (Weltübersicht).
pub const CAMERA_ZOOM_MIN: f64 = 2.0;
/// Maximale Zoom-Stufe (Straßenebene).
pub const CAMERA_ZOOM_MAX: f64 = 19.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f64 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;
/// Rand in Screen-Pixeln beim automatischen Einpassen beider Orte.
pub const FIT_PADDING_PX: f64 = 50.0;

// ── Marker-Rendering ───────────────────────────────────────────────

/// Marker-Radius in Screen-Pixeln.
pub const MARKER_RADIUS_PX: f32 = 9.0;
/// Füllfarbe des Abholort-Markers (RGBA: Grün).
pub const MARKER_COLOR_PICKUP: [f32; 4] = [0.15, 0.65, 0.25, 1.0];
/// Füllfarbe des Lieferort-Markers (RGBA: Rot).
pub const MARKER_COLOR_DELIVERY: [f32; 4] = [0.85, 0.15, 0.15, 1.0];
/// Farbe der gestrichelten Routenlinie (RGBA: Blau).
pub const ROUTE_COLOR: [f32; 4] = [0.26, 0.52, 0.96, 1.0];
/// Füllfarbe des Fahrzeug-Markers auf der Tracking-Seite (RGBA: Orange).
pub const VEHICLE_COLOR: [f32; 4] = [1.0, 0.55, 0.1, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Planer-Optionen.
/// Wird als `umzug_buchungsplaner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannerOptions {
    // ── Preiskalkulation ───────────────────────────────────────
    /// Grundpreis in Euro
    pub base_price_eur: f64,
    /// Preis pro Kilometer in Euro
    pub price_per_km_eur: f64,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimale Zoom-Stufe (konfigurierbar)
    pub camera_zoom_min: f64,
    /// Maximale Zoom-Stufe (konfigurierbar)
    pub camera_zoom_max: f64,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f64,
    /// Rand beim automatischen Einpassen beider Orte (Screen-Pixel)
    #[serde(default = "default_fit_padding_px")]
    pub fit_padding_px: f64,

    // ── Darstellung ─────────────────────────────────────────────
    /// Marker-Radius in Screen-Pixeln
    pub marker_radius_px: f32,
    /// Füllfarbe des Abholort-Markers
    pub marker_color_pickup: [f32; 4],
    /// Füllfarbe des Lieferort-Markers
    pub marker_color_delivery: [f32; 4],
    /// Farbe der Routenlinie
    pub route_color: [f32; 4],
    /// Füllfarbe des Fahrzeug-Markers
    pub vehicle_color: [f32; 4],
    /// Gradnetz über der Karte einzeichnen
    #[serde(default)]
    pub show_grid: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            base_price_eur: BASE_PRICE_EUR,
            price_per_km_eur: PRICE_PER_KM_EUR,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            fit_padding_px: FIT_PADDING_PX,

            marker_radius_px: MARKER_RADIUS_PX,
            marker_color_pickup: MARKER_COLOR_PICKUP,
            marker_color_delivery: MARKER_COLOR_DELIVERY,
            route_color: ROUTE_COLOR,
            vehicle_color: VEHICLE_COLOR,
            show_grid: false,
        }
    }
}

/// Serde-Default für `fit_padding_px` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_fit_padding_px() -> f64 {
    FIT_PADDING_PX
}

impl PlannerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("umzug_buchungsplaner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("umzug_buchungsplaner.toml")
    }

    /// Liefert den Preisplan aus den aktuellen Optionen.
    pub fn pricing(&self) -> crate::core::PricingSchedule {
        crate::core::PricingSchedule {
            base_price: self.base_price_eur,
            price_per_km: self.price_per_km_eur,
        }
    }
}
