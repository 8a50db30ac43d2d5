//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod map_scene;

pub use map_scene::{MapScene, SceneMarker};
pub use options::PlannerOptions;
