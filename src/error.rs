//! Configuration error types
//!
//! Misuse of the lane model and bad tuning data. Gameplay outcomes
//! (collisions, ignored inputs) are not errors.

use thiserror::Error;

/// Errors raised by lane lookups and settings loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Lane index outside `[0, lanes)`.
    #[error("lane index {index} out of range (0..{lanes})")]
    LaneOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of lanes in the track.
        lanes: usize,
    },

    /// A tuning value failed validation.
    #[error("invalid setting `{name}`: {value}")]
    InvalidSetting {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },

    /// Settings JSON could not be parsed or written.
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Settings file could not be read.
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
}
