//! Fixed-step time accumulator
//!
//! The host feeds real frame time in; the clock hands out whole simulation
//! steps and the leftover fraction used for render interpolation.

use crate::consts::{MAX_FRAME_DT, SIM_DT};

/// Accumulates real time and drains it in whole fixed steps
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: f32,
    max_frame_dt: f32,
    accumulator: f32,
}

impl FixedStepClock {
    /// Non-positive or NaN values fall back to `SIM_DT` and `MAX_FRAME_DT`
    pub fn new(step: f32, max_frame_dt: f32) -> Self {
        Self {
            step: positive_or(step, SIM_DT),
            max_frame_dt: positive_or(max_frame_dt, MAX_FRAME_DT),
            accumulator: 0.0,
        }
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add one frame's elapsed time, clamped to `[0, max_frame_dt]`
    pub fn push_frame(&mut self, frame_dt: f32) {
        // A NaN frame time counts as zero
        self.accumulator += frame_dt.max(0.0).min(self.max_frame_dt);
    }

    /// Take one step if enough time has accumulated
    pub fn take_step(&mut self) -> bool {
        if self.accumulator < self.step {
            return false;
        }
        self.accumulator -= self.step;
        true
    }

    /// Sub-step interpolation fraction in [0, 1)
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step).clamp(0.0, 1.0 - f32::EPSILON)
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value > 0.0 { value } else { fallback }
}
