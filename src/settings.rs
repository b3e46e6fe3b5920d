//! Game settings
//!
//! Loaded from a JSON file next to the binary. Every field has a default, so
//! a partial file only overrides what it names.

use std::error::Error;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, ROUND_SECONDS, SIM_DT};
use crate::sim::{Maze, MazeError};

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Round length in seconds
    pub round_seconds: f32,
    /// Fixed simulation step in seconds
    pub sim_step: f32,
    /// Clamp on a single frame's elapsed time
    pub max_frame_dt: f32,
    /// Custom maze rows; the classic layout is used when absent
    pub layout: Option<Vec<String>>,

    // === Headless demo ===
    /// Seed for the autopilot
    pub autopilot_seed: u64,
    /// Simulated seconds to run
    pub demo_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_SECONDS,
            sim_step: SIM_DT,
            max_frame_dt: MAX_FRAME_DT,
            layout: None,
            autopilot_seed: 0x5eed,
            demo_seconds: 60.0,
        }
    }
}

/// Failure reading a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read settings: {err}"),
            Self::Parse(err) => write!(f, "invalid settings JSON: {err}"),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(SettingsError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Replace non-positive timing values with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !is_positive(self.sim_step) {
            log::warn!("sim_step must be positive, using {}", defaults.sim_step);
            self.sim_step = defaults.sim_step;
        }
        if !is_positive(self.max_frame_dt) {
            log::warn!("max_frame_dt must be positive, using {}", defaults.max_frame_dt);
            self.max_frame_dt = defaults.max_frame_dt;
        }
        if !is_positive(self.round_seconds) {
            log::warn!("round_seconds must be positive, using {}", defaults.round_seconds);
            self.round_seconds = defaults.round_seconds;
        }
        self
    }

    /// Build the configured maze
    pub fn maze(&self) -> Result<Maze, MazeError> {
        match &self.layout {
            Some(rows) => Maze::parse(rows),
            None => Maze::classic(),
        }
    }
}

/// False for zero, negatives and NaN
fn is_positive(value: f32) -> bool {
    value > 0.0
}
