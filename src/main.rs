//! B-Spline Editor (headless).
//!
//! Baut die Start-Szene auf, spielt eine kurze Interaktion über den Controller
//! ab und schreibt den resultierenden Frame als SVG.

use bspline_editor::{AppController, AppIntent, AppState, EditorOptions, SvgSink};
use std::path::Path;

/// Ausgabedatei im Arbeitsverzeichnis.
const OUTPUT_FILE: &str = "bspline_editor.svg";
/// Kontrollpunkt, der in der Demo-Interaktion gezogen wird.
const DEMO_POINT: usize = 3;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("B-Spline Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let mut state = AppState::from_options(options);
    let mut controller = AppController::new();

    for intent in demo_intents(&state) {
        controller.handle_intent(&mut state, intent)?;
    }

    let mut sink = SvgSink::new(&state.options);
    controller.render(&state, &mut sink);
    sink.save(Path::new(OUTPUT_FILE))?;

    log::info!(
        "{} Commands ausgeführt, Kurve mit {} Punkten",
        state.command_log.len(),
        state.curve.len()
    );
    Ok(())
}

/// Grad wählen, Kontrollpunkt greifen, in drei Schritten ziehen, loslassen.
fn demo_intents(state: &AppState) -> Vec<AppIntent> {
    let mut intents = vec![AppIntent::DegreeSelected { degree: 4 }];
    if state.control_points.count() <= DEMO_POINT {
        log::warn!("Zu wenige Kontrollpunkte für die Demo-Interaktion");
        return intents;
    }

    let start = state.control_points.get(DEMO_POINT);
    intents.push(AppIntent::PointerPressed { pos: start });
    for step in 1..=3 {
        let pos = start + glam::DVec2::new(20.0, -25.0) * step as f64;
        intents.push(AppIntent::PointerMoved { pos });
    }
    let end = start + glam::DVec2::new(60.0, -75.0);
    intents.push(AppIntent::PointerReleased { pos: end });
    intents
}
