//! Platform abstraction layer
//!
//! Host-side pieces that sit between the device and the simulation:
//! - Fixed-step time accumulation
//! - Input adapter contract (direction intent and one-shot signals)

pub mod clock;
pub mod input;

pub use clock::FixedStepClock;
pub use input::{InputState, direction_from_axes};
