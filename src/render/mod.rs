//! Renderer-Grenze: Zeichen-Senken und Frame-Aufbau.

mod draw_sink;
mod svg_sink;

pub use crate::shared::RenderScene;
pub use draw_sink::{draw_scene, DrawSink};
pub use svg_sink::SvgSink;
