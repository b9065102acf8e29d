use glam::DVec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Koordinaten liegen im selben 2D-Raum wie die Kontrollpunkte.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Zeiger gedrückt (Maustaste 1)
    PointerPressed { pos: DVec2 },
    /// Zeiger mit gedrückter Taste bewegt
    PointerMoved { pos: DVec2 },
    /// Zeiger losgelassen
    PointerReleased { pos: DVec2 },
    /// Grad im Auswahlfeld gewählt (1..=6)
    DegreeSelected { degree: usize },
}
