//! B-Spline Editor Library.
//! Kurven-Kern, Editier-Logik und Zeichen-Senken als Library exportiert
//! für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, DragState};
pub use core::{
    basis_row, basis_value, effective_degree, evaluate_curve, sample_curve, ControlPointStore,
    KnotVector,
};
pub use render::{draw_scene, DrawSink, SvgSink};
pub use shared::{EditorOptions, RenderScene};
