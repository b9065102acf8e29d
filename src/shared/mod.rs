//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{clamp_degree, MAX_DEGREE, MIN_DEGREE};
pub use render_scene::{MarkerState, PointMarker, RenderScene};
