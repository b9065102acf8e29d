//! Core-Domäne: Knotenvektor, Basisfunktionen, Kurven-Abtastung, Kontrollpunkte.

pub mod basis;
pub mod control_points;
pub mod geometry;
/// Clamped Knotenvektoren
pub mod knot_vector;
pub mod sampler;

pub use basis::{basis_row, basis_value, SINGULAR_DENOMINATOR_EPS};
pub use control_points::ControlPointStore;
pub use knot_vector::KnotVector;
pub use sampler::{
    effective_degree, evaluate_curve, sample_curve, DEFAULT_SAMPLE_COUNT, DEGENERATE_DOMAIN_EPS,
};
