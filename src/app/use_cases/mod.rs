//! Use-Cases der Application-Layer-Orchestrierung.

pub mod booking;
pub mod camera;
pub mod tracking;
pub mod viewport;
pub mod wizard;
