use super::*;
use crate::core::KnotVector;
use approx::assert_abs_diff_eq;

/// Direkte rekursive Cox–de-Boor-Definition als Referenz für die Tabelle.
fn recursive_basis(knots: &[f64], i: usize, p: usize, t: f64, domain_end: f64) -> f64 {
    if p == 0 {
        return span_indicator(knots, i, t, domain_end);
    }
    let denom1 = knots[i + p] - knots[i];
    let c1 = if denom1.abs() < SINGULAR_DENOMINATOR_EPS {
        0.0
    } else {
        (t - knots[i]) / denom1 * recursive_basis(knots, i, p - 1, t, domain_end)
    };
    let denom2 = knots[i + p + 1] - knots[i + 1];
    let c2 = if denom2.abs() < SINGULAR_DENOMINATOR_EPS {
        0.0
    } else {
        (knots[i + p + 1] - t) / denom2 * recursive_basis(knots, i + 1, p - 1, t, domain_end)
    };
    c1 + c2
}

fn parameter_grid(kv: &KnotVector, steps: usize) -> Vec<f64> {
    let (start, end) = kv.domain();
    let mut grid: Vec<f64> = (0..steps)
        .map(|k| start + (end - start) * k as f64 / steps as f64)
        .collect();
    grid.push(end);
    grid
}

// ── Übereinstimmung mit der Rekursion ──

#[test]
fn test_table_matches_recursive_definition() {
    for n in 1..9 {
        for p in 1..=n.min(6) {
            let kv = KnotVector::clamped(n, p);
            let knots = kv.knots();
            let domain_end = kv.domain().1;

            for t in parameter_grid(&kv, 37) {
                let row = basis_row(knots, p, t, n + 1);
                for (i, &from_row) in row.iter().enumerate() {
                    let expected = recursive_basis(knots, i, p, t, domain_end);
                    assert_eq!(basis_value(knots, i, p, t), expected, "n={n} p={p} i={i} t={t}");
                    assert_eq!(from_row, expected, "n={n} p={p} i={i} t={t}");
                }
            }
        }
    }
}

// ── Partition der Eins ──

#[test]
fn test_partition_of_unity() {
    for n in 1..11 {
        for p in 1..=n.min(6) {
            let kv = KnotVector::clamped(n, p);
            for t in parameter_grid(&kv, 101) {
                let sum: f64 = basis_row(kv.knots(), p, t, n + 1).iter().sum();
                assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn test_basis_values_are_non_negative() {
    let kv = KnotVector::clamped(6, 3);
    for t in parameter_grid(&kv, 60) {
        assert!(basis_row(kv.knots(), 3, t, 7).iter().all(|&v| v >= 0.0));
    }
}

#[test]
fn test_local_support() {
    let kv = KnotVector::clamped(8, 2);
    let knots = kv.knots();
    for t in parameter_grid(&kv, 80) {
        for i in 0..=8 {
            if t < knots[i] || t > knots[i + 3] {
                assert_eq!(basis_value(knots, i, 2, t), 0.0, "i={i} t={t}");
            }
        }
    }
}

// ── Randfälle ──

#[test]
fn test_clamped_start_selects_first_basis() {
    let kv = KnotVector::clamped(5, 3);
    let row = basis_row(kv.knots(), 3, 0.0, 6);
    assert_eq!(row, vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_domain_end_selects_last_basis() {
    let kv = KnotVector::clamped(5, 3);
    let row = basis_row(kv.knots(), 3, 1.0, 6);
    assert_eq!(row, vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(basis_value(kv.knots(), 5, 3, 1.0), 1.0);
}

#[test]
fn test_outside_domain_is_zero() {
    let kv = KnotVector::clamped(4, 2);
    for t in [-0.5, 1.000_001, 2.0] {
        assert!(basis_row(kv.knots(), 2, t, 5).iter().all(|&v| v == 0.0), "t={t}");
    }
}

#[test]
fn test_linear_hat_function() {
    let knots = [0.0, 0.0, 0.5, 1.0, 1.0];
    assert_abs_diff_eq!(basis_value(&knots, 1, 1, 0.25), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(basis_value(&knots, 1, 1, 0.5), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(basis_value(&knots, 1, 1, 0.75), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(basis_value(&knots, 0, 1, 0.25), 0.5, epsilon = 1e-12);
}

#[test]
fn test_repeated_knots_do_not_divide_by_zero() {
    // Mehrfachknoten erzeugen Nenner 0 → Beitrag 0 statt NaN/inf
    let knots = [0.0, 0.0, 0.0, 0.5, 0.5, 1.0, 1.0, 1.0];
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let row = basis_row(&knots, 2, t, 5);
        assert!(row.iter().all(|v| v.is_finite()), "t={t}: {row:?}");
        assert_abs_diff_eq!(row.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }
}

#[test]
#[should_panic(expected = "Basisfunktion")]
fn test_basis_value_rejects_index_beyond_knots() {
    let kv = KnotVector::clamped(3, 3);
    basis_value(kv.knots(), 4, 3, 0.5);
}
