use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Kontrollpunkt unter dem Zeiger greifen (first match im Pick-Radius)
    PickControlPoint { pos: DVec2, pick_radius: f64 },
    /// Gegriffenen Kontrollpunkt an neue Position setzen
    MoveControlPoint { index: usize, pos: DVec2 },
    /// Drag beenden (unabhängig von der Zeigerposition)
    EndDrag,
    /// Grad setzen (wird auf 1..=6 geklemmt)
    SetDegree { degree: usize },
    /// Kurve neu abtasten
    Resample,
}
