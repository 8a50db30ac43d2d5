//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod map_scene;
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use map_scene::build as build_map_scene;
pub use state::{AppState, BookingState, Page, ServiceKind, TrackingState, UiState, ViewState, WizardState};
