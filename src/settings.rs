//! Difficulty tuning
//!
//! Loaded once at startup from JSON. Every field has a default, so a file
//! only needs the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Difficulty ===
    /// Obstacle advance per tick at session start
    pub start_speed: f32,
    /// Speed added on every ramp
    pub speed_increase: f32,
    /// Seconds between ramps (shrinks as the run goes on)
    pub speed_ramp_interval: f32,
    /// Seconds between obstacle spawns (shrinks as the run goes on)
    pub obstacle_spawn_interval: f32,
    /// Restore the difficulty above when a new run starts
    pub reset_difficulty_on_start: bool,

    // === Player ===
    /// Lane change clock advance per tick (duration is 1)
    pub lane_change_step: f32,

    // === Run ===
    /// Fixed RNG seed (random if absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_speed: START_SPEED,
            speed_increase: SPEED_INCREASE,
            speed_ramp_interval: SPEED_RAMP_INTERVAL,
            obstacle_spawn_interval: OBSTACLE_SPAWN_INTERVAL,
            reset_difficulty_on_start: false,

            lane_change_step: LANE_CHANGE_STEP,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&text)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("start_speed", self.start_speed),
            ("speed_increase", self.speed_increase),
            ("speed_ramp_interval", self.speed_ramp_interval),
            ("obstacle_spawn_interval", self.obstacle_spawn_interval),
            ("lane_change_step", self.lane_change_step),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidSetting { name, value });
            }
        }
        if self.lane_change_step > LANE_CHANGE_DURATION {
            return Err(ConfigError::InvalidSetting {
                name: "lane_change_step",
                value: self.lane_change_step,
            });
        }
        Ok(())
    }
}
