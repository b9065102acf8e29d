//! Zeichen-Senke als Ausgabevertrag des Renderers.

use crate::shared::{PointMarker, RenderScene};
use glam::DVec2;

/// Ziel eines Frames. Jeder Frame beginnt mit `clear` und zeichnet danach
/// die komplette Szene neu.
pub trait DrawSink {
    /// Löscht die gesamte Zeichenfläche.
    fn clear(&mut self, canvas_size: [f64; 2]);
    /// Zeichnet die abgetastete Kurve als Polyline.
    fn curve(&mut self, points: &[DVec2]);
    /// Zeichnet das gestrichelte Kontrollpolygon.
    fn control_polygon(&mut self, points: &[DVec2]);
    /// Zeichnet einen beschrifteten Kontrollpunkt-Marker.
    fn marker(&mut self, marker: &PointMarker);
    /// Zeichnet die Grad-Anzeige.
    fn caption(&mut self, text: &str);
}

/// Zeichnet einen kompletten Frame in die Senke.
///
/// Kurve und Kontrollpolygon mit höchstens einem Punkt werden übersprungen.
pub fn draw_scene(scene: &RenderScene, sink: &mut dyn DrawSink) {
    sink.clear(scene.canvas_size());

    if scene.has_curve() {
        sink.curve(&scene.curve);
    }

    for marker in &scene.markers {
        sink.marker(marker);
    }

    if scene.has_control_polygon() {
        sink.control_polygon(&scene.control_polygon);
    }

    sink.caption(&scene.caption());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{EditorOptions, MarkerState};

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Curve(usize),
        Polygon(usize),
        Marker(usize),
        Caption(String),
    }

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<Call>,
    }

    impl DrawSink for RecordingSink {
        fn clear(&mut self, _canvas_size: [f64; 2]) {
            self.calls.push(Call::Clear);
        }
        fn curve(&mut self, points: &[DVec2]) {
            self.calls.push(Call::Curve(points.len()));
        }
        fn control_polygon(&mut self, points: &[DVec2]) {
            self.calls.push(Call::Polygon(points.len()));
        }
        fn marker(&mut self, marker: &PointMarker) {
            self.calls.push(Call::Marker(marker.index));
        }
        fn caption(&mut self, text: &str) {
            self.calls.push(Call::Caption(text.to_string()));
        }
    }

    fn scene(curve: Vec<DVec2>, points: Vec<DVec2>) -> RenderScene {
        RenderScene {
            curve,
            markers: points
                .iter()
                .enumerate()
                .map(|(index, &position)| PointMarker {
                    index,
                    position,
                    state: MarkerState::Normal,
                })
                .collect(),
            control_polygon: points,
            selected_degree: 4,
            effective_degree: 1,
            options: EditorOptions::default(),
        }
    }

    #[test]
    fn draw_scene_clears_first_and_draws_everything() {
        let points = vec![DVec2::ZERO, DVec2::X];
        let mut sink = RecordingSink::default();

        draw_scene(&scene(vec![DVec2::ZERO; 5], points), &mut sink);

        assert_eq!(
            sink.calls,
            vec![
                Call::Clear,
                Call::Curve(5),
                Call::Marker(0),
                Call::Marker(1),
                Call::Polygon(2),
                Call::Caption("Degree: 4".to_string()),
            ]
        );
    }

    #[test]
    fn draw_scene_skips_empty_curve_and_single_point_polygon() {
        let mut sink = RecordingSink::default();

        draw_scene(&scene(Vec::new(), vec![DVec2::ONE]), &mut sink);

        assert_eq!(
            sink.calls,
            vec![
                Call::Clear,
                Call::Marker(0),
                Call::Caption("Degree: 4".to_string()),
            ]
        );
    }

    #[test]
    fn draw_scene_redraws_full_frame_each_call() {
        let s = scene(vec![DVec2::ZERO, DVec2::ONE], vec![DVec2::ZERO, DVec2::ONE]);
        let mut sink = RecordingSink::default();

        draw_scene(&s, &mut sink);
        draw_scene(&s, &mut sink);

        let clears = sink.calls.iter().filter(|c| **c == Call::Clear).count();
        assert_eq!(clears, 2);
        assert_eq!(sink.calls.len(), 12);
    }
}
