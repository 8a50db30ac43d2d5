//! Umzug-Buchungsplaner Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod map;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, Page, ServiceKind};
pub use core::{
    haversine_m, BookingDraft, Coordinates, GeoPoint, LocationChange, PointRole, PricingSchedule,
    RoleSelection, TrackingPhase, TrackingSim,
};
pub use map::{MapSurface, MercatorMap};
pub use shared::{MapScene, PlannerOptions};
