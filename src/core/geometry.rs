//! Reine Geometrie-Funktionen: Rotation, Kreis-Anordnung, Polyline-Länge.
//!
//! Layer-neutral und zustandslos: kann von `app`, `render` und Tests
//! importiert werden ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::DVec2;
use std::f64::consts::TAU;

/// Dreht `point` um `center` um den Winkel `angle_rad` (Radiant).
///
/// Verschiebt in den Ursprung, wendet die Standard-Rotationsmatrix an und
/// verschiebt zurück.
pub fn rotate_about(point: DVec2, center: DVec2, angle_rad: f64) -> DVec2 {
    center + DVec2::from_angle(angle_rad).rotate(point - center)
}

/// Verteilt `count` Punkte gleichmäßig auf einem Kreis um `center`.
///
/// Punkt `i` liegt bei Winkel `2π·i/count`, der erste Punkt also rechts vom Zentrum.
pub fn points_on_circle(center: DVec2, radius: f64, count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            center + radius * DVec2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
