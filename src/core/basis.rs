//! B-Spline-Basisfunktionen nach Cox–de Boor.
//!
//! Statt der exponentiellen Rekursion wird eine Dreieckstabelle Stufe für Stufe
//! aufgebaut: Stufe 0 enthält die Indikatoren der Knotenspannen, Stufe `q` entsteht
//! aus je zwei Nachbarn der Stufe `q - 1`. Jeder Eintrag wird mit exakt denselben
//! Rechenschritten wie in der rekursiven Definition berechnet.
//!
//! Spannen-Indikatoren sind halb-offen (`knot[j] <= t < knot[j + 1]`). Nur am
//! rechten Rand des Parameterbereichs wird die letzte nicht-leere Spanne
//! geschlossen, damit `t = t_end` nicht auf lauter Nullen fällt.

/// Nenner mit kleinerem Betrag zählen als degenerierte Knotenspanne (Beitrag 0).
pub const SINGULAR_DENOMINATOR_EPS: f64 = 1e-10;

/// Wertet eine einzelne Basisfunktion `N_{i,p}(t)` aus.
///
/// `degree` ist der Grad der Kurve, für die `knots` gebaut wurde; daraus ergibt
/// sich das rechte Ende des Parameterbereichs `knots[len - degree - 1]`.
///
/// # Panics
///
/// Wenn `i + degree + 1` kein gültiger Knotenindex ist.
pub fn basis_value(knots: &[f64], i: usize, degree: usize, t: f64) -> f64 {
    assert!(
        i + degree + 1 < knots.len(),
        "Basisfunktion N_{{{i},{degree}}} braucht {} Knoten, vorhanden: {}",
        i + degree + 2,
        knots.len()
    );
    let domain_end = knots[knots.len() - degree - 1];

    let mut row: Vec<f64> = (i..=i + degree)
        .map(|j| span_indicator(knots, j, t, domain_end))
        .collect();

    for q in 1..=degree {
        for k in 0..=degree - q {
            row[k] = cox_de_boor_step(knots, i + k, q, t, row[k], row[k + 1]);
        }
    }

    row[0]
}

/// Wertet alle `count` Basisfunktionen `N_{0,p}(t) … N_{count-1,p}(t)` in einem Durchlauf aus.
///
/// Erwartet einen Knotenvektor der Länge `count + degree + 1`.
pub fn basis_row(knots: &[f64], degree: usize, t: f64, count: usize) -> Vec<f64> {
    let width = count + degree;
    debug_assert_eq!(
        knots.len(),
        width + 1,
        "Knotenvektor passt nicht zu {count} Kontrollpunkten vom Grad {degree}"
    );
    let domain_end = knots[count];

    let mut row: Vec<f64> = (0..width)
        .map(|j| span_indicator(knots, j, t, domain_end))
        .collect();

    // In-place: row[j + 1] ist beim Überschreiben von row[j] noch auf Stufe q - 1.
    for q in 1..=degree {
        for j in 0..width - q {
            row[j] = cox_de_boor_step(knots, j, q, t, row[j], row[j + 1]);
        }
    }

    row.truncate(count);
    row
}

/// Grad-0-Basisfunktion: 1 innerhalb der Spanne `j`, sonst 0.
fn span_indicator(knots: &[f64], j: usize, t: f64, domain_end: f64) -> f64 {
    let (lo, hi) = (knots[j], knots[j + 1]);
    let inside = lo <= t && t < hi;
    let closes_domain = t == domain_end && hi == domain_end && lo < hi;
    if inside || closes_domain {
        1.0
    } else {
        0.0
    }
}

/// Ein Rekursionsschritt: `N_{j,q} = c1·N_{j,q-1} + c2·N_{j+1,q-1}`.
fn cox_de_boor_step(
    knots: &[f64],
    j: usize,
    q: usize,
    t: f64,
    lower_left: f64,
    lower_right: f64,
) -> f64 {
    let left = ramp(t - knots[j], knots[j + q] - knots[j], lower_left);
    let right = ramp(
        knots[j + q + 1] - t,
        knots[j + q + 1] - knots[j + 1],
        lower_right,
    );
    left + right
}

fn ramp(numerator: f64, denominator: f64, lower: f64) -> f64 {
    if denominator.abs() < SINGULAR_DENOMINATOR_EPS {
        0.0
    } else {
        numerator / denominator * lower
    }
}

#[cfg(test)]
mod tests;
