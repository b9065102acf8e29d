//! Geordnete, veränderliche Menge von Kontrollpunkten mit stabilen Indizes.

use glam::DVec2;

/// Kontrollpunkte einer Editier-Session.
///
/// Die Anzahl bleibt während einer Session konstant; Punkte werden nur
/// verschoben. Ein Index außerhalb von `0..count()` ist ein Programmierfehler.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlPointStore {
    points: Vec<DVec2>,
}

impl ControlPointStore {
    /// Erstellt den Store aus einer geordneten Punktliste.
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Position des Punkts `index`.
    ///
    /// # Panics
    ///
    /// Wenn `index >= count()`.
    pub fn get(&self, index: usize) -> DVec2 {
        self.check_index(index);
        self.points[index]
    }

    /// Überschreibt die Position des Punkts `index`.
    ///
    /// # Panics
    ///
    /// Wenn `index >= count()`.
    pub fn set(&mut self, index: usize, position: DVec2) {
        self.check_index(index);
        self.points[index] = position;
    }

    /// Anzahl der Kontrollpunkte (`n + 1`).
    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// Alle Punkte in Index-Reihenfolge.
    pub fn all(&self) -> &[DVec2] {
        &self.points
    }

    /// Erster Punkt (in Index-Reihenfolge), der höchstens `pick_radius` von `pos` entfernt ist.
    ///
    /// Liegen mehrere Punkte im Radius, gewinnt der kleinste Index
    /// (first match, nicht nearest match).
    pub fn hit_test(&self, pos: DVec2, pick_radius: f64) -> Option<usize> {
        let radius_sq = pick_radius * pick_radius;
        self.points
            .iter()
            .position(|p| p.distance_squared(pos) <= radius_sq)
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.points.len(),
            "Kontrollpunkt-Index {index} außerhalb von 0..{}",
            self.points.len()
        );
    }
}
