//! Clamped Knotenvektor für offene (nicht-periodische) B-Splines.

/// Nicht-fallende Knotenfolge eines clamped B-Splines vom Grad `degree`.
///
/// Die ersten `degree + 1` Einträge sind `0.0`, die letzten `degree + 1` Einträge
/// `1.0`, dazwischen liegen gleichmäßig verteilte innere Knoten. Dadurch läuft die
/// Kurve durch den ersten und den letzten Kontrollpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotVector {
    knots: Vec<f64>,
    degree: usize,
}

impl KnotVector {
    /// Baut den clamped Knotenvektor für `n + 1` Kontrollpunkte und Grad `p`.
    ///
    /// Länge `m + 1 = n + p + 2`. Anzahl innerer Knoten: `m - 2(p + 1) + 1 = n - p`,
    /// Schrittweite `1 / (inner + 1)`. Bei `p == n` entsteht die reine Bézier-Form
    /// ohne innere Knoten.
    ///
    /// Voraussetzung: `p <= n`. Der Sampler klemmt den Grad vor dem Aufruf.
    pub fn clamped(n: usize, p: usize) -> Self {
        debug_assert!(p <= n, "Grad {p} größer als höchster Kontrollpunkt-Index {n}");

        let inner = n.saturating_sub(p);
        let step = 1.0 / (inner + 1) as f64;

        let mut knots = Vec::with_capacity(n + p + 2);
        knots.resize(p + 1, 0.0);
        knots.extend((1..=inner).map(|i| i as f64 * step));
        knots.resize(knots.len() + p + 1, 1.0);

        Self { knots, degree: p }
    }

    /// Alle Knoten in aufsteigender Reihenfolge.
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Grad, für den der Vektor gebaut wurde.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Anzahl der Knoten (`n + p + 2`).
    pub fn knot_count(&self) -> usize {
        self.knots.len()
    }

    /// Anzahl der Kontrollpunkte, die dieser Vektor trägt (`n + 1`).
    pub fn control_point_count(&self) -> usize {
        self.knots.len() - self.degree - 1
    }

    /// Anzahl der inneren Knoten zwischen den geklemmten Enden.
    pub fn interior_count(&self) -> usize {
        self.knots.len() - 2 * (self.degree + 1)
    }

    /// Gültiger Parameterbereich `(knot[p], knot[n + 1])`.
    pub fn domain(&self) -> (f64, f64) {
        let end_index = self.control_point_count();
        (self.knots[self.degree], self.knots[end_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_seven_points() {
        let kv = KnotVector::clamped(6, 3);
        assert_eq!(
            kv.knots(),
            &[0.0, 0.0, 0.0, 0.0, 0.25, 0.5, 0.75, 1.0, 1.0, 1.0, 1.0]
        );
        assert_eq!(kv.interior_count(), 3);
        assert_eq!(kv.control_point_count(), 7);
        assert_eq!(kv.domain(), (0.0, 1.0));
    }

    #[test]
    fn test_degree_equals_n_is_bezier_form() {
        let kv = KnotVector::clamped(3, 3);
        assert_eq!(kv.knots(), &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(kv.interior_count(), 0);
    }

    #[test]
    fn test_linear_two_points() {
        let kv = KnotVector::clamped(1, 1);
        assert_eq!(kv.knots(), &[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(kv.domain(), (0.0, 1.0));
    }

    #[test]
    fn test_single_point_degree_zero() {
        let kv = KnotVector::clamped(0, 0);
        assert_eq!(kv.knots(), &[0.0, 1.0]);
        assert_eq!(kv.control_point_count(), 1);
    }

    #[test]
    fn test_shape_invariants_for_all_valid_inputs() {
        for n in 0..12 {
            for p in 0..=n.min(6) {
                let kv = KnotVector::clamped(n, p);
                let knots = kv.knots();

                assert_eq!(knots.len(), n + p + 2, "Länge für n={n}, p={p}");
                assert!(
                    knots.windows(2).all(|w| w[0] <= w[1]),
                    "nicht monoton für n={n}, p={p}: {knots:?}"
                );
                assert!(knots[..=p].iter().all(|&k| k == 0.0));
                assert!(knots[knots.len() - p - 1..].iter().all(|&k| k == 1.0));
                assert!(knots[p + 1..knots.len() - p - 1]
                    .iter()
                    .all(|&k| k > 0.0 && k < 1.0));
            }
        }
    }
}
