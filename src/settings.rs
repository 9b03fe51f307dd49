//! Skier tuning
//!
//! Loaded from a JSON file; any field left out falls back to the default.

use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::GameTime;
use crate::consts::*;

/// Tuning knobs for the skier simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Speed on start and after resets; also the size of a horizontal/up step
    pub starting_speed: f32,
    /// Divisor applied to speed on diagonal movement
    pub diagonal_speed_reducer: f32,
    /// Time units a jump frame stays on screen before advancing
    pub animation_frame_speed: GameTime,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_speed: STARTING_SPEED,
            diagonal_speed_reducer: DIAGONAL_SPEED_REDUCER,
            animation_frame_speed: ANIMATION_FRAME_SPEED,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document, rejecting out-of-range tuning
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate().map_err(serde_json::Error::custom)?;
        Ok(settings)
    }

    /// Speeds and the diagonal divisor must be finite and positive
    pub fn validate(&self) -> Result<(), String> {
        let positive = |name: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(format!("{name} must be a positive number, got {value}"))
            }
        };
        positive("starting_speed", self.starting_speed)?;
        positive("diagonal_speed_reducer", self.diagonal_speed_reducer)
    }

    /// Serialize settings as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults if it is missing or invalid
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::info!("Using default settings ({}: {})", path.display(), err);
                Self::default()
            }
        }
    }
}
