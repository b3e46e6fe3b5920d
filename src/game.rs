//! Host frame driver
//!
//! Owns the simulation state plus everything that lives outside it (audio
//! listeners, latched input, the fixed-step clock) and turns real frame time
//! into whole ticks.

use crate::audio::AudioBus;
use crate::platform::{FixedStepClock, InputState};
use crate::renderer::FrameView;
use crate::settings::Settings;
use crate::sim::{Direction, GameState, MazeError, TickInput, apply_controls, tick};

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    state: GameState,
    audio: AudioBus,
    input: InputState,
    clock: FixedStepClock,
    ticks: u64,
}

impl Game {
    pub fn new(settings: &Settings) -> Result<Self, MazeError> {
        let settings = settings.clone().sanitized();
        let maze = settings.maze()?;
        log::info!(
            "Maze {}x{} with {} pellets",
            maze.width(),
            maze.height(),
            maze.pellet_spawns().len()
        );
        Ok(Self {
            state: GameState::with_round_length(maze, settings.round_seconds),
            audio: AudioBus::new(),
            input: InputState::default(),
            clock: FixedStepClock::new(settings.sim_step, settings.max_frame_dt),
            ticks: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn audio_mut(&mut self) -> &mut AudioBus {
        &mut self.audio
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Total simulation ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance by one rendered frame and return what to draw.
    ///
    /// Controls are applied once up front. The direction intent (keyboard
    /// first, `gamepad` as fallback) is read once and handed to the first
    /// tick only; a keyboard press stays latched if no tick runs.
    pub fn frame(&mut self, frame_dt: f32, gamepad: Direction) -> FrameView {
        apply_controls(&mut self.state, &mut self.input.controls);

        let mut pending = self.input.intent(gamepad);
        self.clock.push_frame(frame_dt);
        while self.clock.take_step() {
            let input = TickInput {
                direction: std::mem::take(&mut pending),
            };
            tick(&mut self.state, &input, self.clock.step(), &mut self.audio);
            self.input.consume_direction();
            self.ticks += 1;
        }

        FrameView::capture(&self.state, self.clock.alpha(), self.clock.step())
    }
}
