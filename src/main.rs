//! Maze Chase entry point
//!
//! Runs a headless demo: loads settings, lets the autopilot play for a while
//! and logs how the round went. Device glue and drawing live with the host
//! that embeds the library.

use std::error::Error;
use std::path::PathBuf;

use maze_chase::sim::Autopilot;
use maze_chase::{Game, Settings};

const DEFAULT_SETTINGS: &str = "maze-chase.json";

/// Frame time fed to the driver, as if by a 60 Hz display
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Maze Chase (headless) starting...");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS));
    let settings = Settings::load(&path);

    let mut game = Game::new(&settings)?;
    let _audio_hook = game
        .audio_mut()
        .subscribe(|cue| log::debug!("[audio hook] {}", cue.as_str()));

    let mut autopilot = Autopilot::new(settings.autopilot_seed);
    game.input_mut().key_down("Enter");

    let frames = (settings.demo_seconds.max(0.0) / FRAME_DT).round() as u64;
    for _ in 0..frames {
        let steer = autopilot.steer(game.state());
        game.frame(FRAME_DT, steer);
    }

    let state = game.state();
    log::info!(
        "After {} ticks: phase {:?}, score {}, max combo {}, {} pellets left",
        game.ticks(),
        state.phase,
        state.score.score,
        state.score.max_combo,
        state.pellets.len()
    );
    if !state.message.is_empty() {
        log::info!("{}", state.message);
    }
    Ok(())
}
