//! Abtastung einer B-Spline-Kurve zu einer Polyline.

use super::basis::basis_row;
use super::KnotVector;
use glam::DVec2;

/// Standard-Anzahl der Intervalle pro Abtastung (ergibt 301 Kurvenpunkte).
pub const DEFAULT_SAMPLE_COUNT: usize = 300;
/// Parameterbereiche schmaler als dieser Wert gelten als degeneriert.
pub const DEGENERATE_DOMAIN_EPS: f64 = 1e-10;

/// Klemmt den gewünschten Grad auf den höchsten Kontrollpunkt-Index `n`.
///
/// Ein zu hoher Grad ist kein Fehler: die Kurve wird mit dem größten möglichen
/// Grad ausgewertet, damit immer eine gültige Kurve angezeigt werden kann.
pub fn effective_degree(requested: usize, n: usize) -> usize {
    requested.min(n)
}

/// Berechnet den Kurvenpunkt `Σ N_{i,p}(t) · P_i` für einen Parameter `t`.
///
/// `knots` muss zu `control_points` passen (`n + p + 2` Knoten).
pub fn evaluate_curve(control_points: &[DVec2], knots: &KnotVector, t: f64) -> DVec2 {
    basis_row(knots.knots(), knots.degree(), t, control_points.len())
        .into_iter()
        .zip(control_points)
        .fold(DVec2::ZERO, |acc, (weight, point)| acc + weight * *point)
}

/// Tastet die Kurve über ihren gesamten Parameterbereich ab.
///
/// Liefert `samples + 1` Punkte von `t_start = knot[p]` bis `t_end = knot[n + 1]`.
/// Der letzte Parameter wird exakt auf `t_end` gesetzt, damit der Endpunkt auf
/// dem letzten Kontrollpunkt liegt.
///
/// Leeres Ergebnis bei weniger als zwei Kontrollpunkten oder degeneriertem
/// Parameterbereich. `samples == 0` wird wie `1` behandelt.
pub fn sample_curve(control_points: &[DVec2], degree: usize, samples: usize) -> Vec<DVec2> {
    if control_points.len() < 2 {
        return Vec::new();
    }

    let n = control_points.len() - 1;
    let degree = effective_degree(degree, n);
    let knots = KnotVector::clamped(n, degree);
    let (t_start, t_end) = knots.domain();
    if (t_end - t_start).abs() < DEGENERATE_DOMAIN_EPS {
        return Vec::new();
    }

    let samples = samples.max(1);
    (0..=samples)
        .map(|i| {
            let t = if i == samples {
                t_end
            } else {
                t_start + (t_end - t_start) * i as f64 / samples as f64
            };
            evaluate_curve(control_points, &knots, t)
        })
        .collect()
}
