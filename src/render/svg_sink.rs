//! SVG-Ausgabe eines Frames über das `svg`-Crate.

use super::DrawSink;
use crate::shared::{EditorOptions, MarkerState, PointMarker};
use anyhow::Context;
use glam::DVec2;
use svg::node::element::{Circle, Polyline, Rectangle, Text};
use svg::{Document, Node};

/// Zeichen-Senke, die jeden Frame als SVG-Dokument aufbaut.
pub struct SvgSink {
    options: EditorOptions,
    document: Document,
}

impl SvgSink {
    /// Erstellt eine leere Senke mit den Farben und Größen aus `options`.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            document: blank_document([options.canvas_width, options.canvas_height]),
            options: options.clone(),
        }
    }

    /// Aktueller Frame als SVG-Text.
    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    /// Schreibt den aktuellen Frame als SVG-Datei.
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        svg::save(path, &self.document)
            .with_context(|| format!("SVG nicht schreibbar: {}", path.display()))?;
        log::info!("Frame gespeichert nach: {}", path.display());
        Ok(())
    }
}

impl DrawSink for SvgSink {
    fn clear(&mut self, canvas_size: [f64; 2]) {
        self.document = blank_document(canvas_size);
    }

    fn curve(&mut self, points: &[DVec2]) {
        let line = Polyline::new()
            .set("points", points_attr(points))
            .set("fill", "none")
            .set("stroke", rgb(self.options.curve_color))
            .set("stroke-opacity", alpha(self.options.curve_color))
            .set("stroke-width", self.options.curve_width);
        self.document.append(line);
    }

    fn control_polygon(&mut self, points: &[DVec2]) {
        let [dash, gap] = self.options.polygon_dash;
        let line = Polyline::new()
            .set("points", points_attr(points))
            .set("fill", "none")
            .set("stroke", rgb(self.options.polygon_color))
            .set("stroke-opacity", alpha(self.options.polygon_color))
            .set("stroke-width", self.options.polygon_width)
            .set("stroke-dasharray", format!("{dash} {gap}"));
        self.document.append(line);
    }

    fn marker(&mut self, marker: &PointMarker) {
        let fill = match marker.state {
            MarkerState::Selected => self.options.marker_color_selected,
            MarkerState::Normal => self.options.marker_color,
        };
        let circle = Circle::new()
            .set("cx", marker.position.x)
            .set("cy", marker.position.y)
            .set("r", self.options.marker_radius)
            .set("fill", rgb(fill))
            .set("fill-opacity", alpha(fill))
            .set("stroke", rgb(self.options.marker_outline_color));
        self.document.append(circle);

        let [dx, dy] = self.options.label_offset;
        let label = Text::new(marker.label())
            .set("x", marker.position.x + dx)
            .set("y", marker.position.y + dy)
            .set("font-size", self.options.label_font_size)
            .set("fill", rgb(self.options.label_color));
        self.document.append(label);
    }

    fn caption(&mut self, text: &str) {
        let [x, y] = self.options.caption_position;
        let caption = Text::new(text)
            .set("x", x)
            .set("y", y)
            .set("font-size", self.options.caption_font_size)
            .set("fill", rgb(self.options.caption_color));
        self.document.append(caption);
    }
}

fn blank_document(canvas_size: [f64; 2]) -> Document {
    let [width, height] = canvas_size;
    Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height))
        .add(
            Rectangle::new()
                .set("width", width)
                .set("height", height)
                .set("fill", "white"),
        )
}

fn points_attr(points: &[DVec2]) -> String {
    points
        .iter()
        .map(|p| format!("{:.3},{:.3}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// RGBA (0..1) → `rgb(r,g,b)` für SVG-Attribute.
fn rgb(color: [f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgb({},{},{})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2])
    )
}

fn alpha(color: [f32; 4]) -> f32 {
    color[3].clamp(0.0, 1.0)
}
