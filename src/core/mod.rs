//! Core-Domänentypen: Koordinaten, Buchungsentwurf, Tracking-Simulation.

pub mod booking;
pub mod geo;
pub mod tracking;

pub use booking::{BookingDraft, LocationChange, PointRole, PricingSchedule, RoleSelection};
pub use geo::{haversine_m, round2, Coordinates, GeoPoint, EARTH_RADIUS_M};
pub use tracking::{TrackingPhase, TrackingSim, ROUTE_END, ROUTE_START};
