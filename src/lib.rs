//! Lane Dash - a five-lane endless runner core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, obstacle patterns, obstacle field, lane changes, difficulty)
//! - `platform`: Frontend adapter (scene intents, score display, frame loop)
//! - `settings`: Data-driven difficulty tuning
//! - `error`: Configuration errors

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one display refresh at 60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum catch-up ticks per frame
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Lane layout (odd count, one exact center lane)
    pub const NUM_LANES: usize = 5;
    pub const LANE_WIDTH: f32 = 1.3;
    pub const CENTER_LANE: usize = NUM_LANES / 2;

    /// Difficulty defaults
    pub const START_SPEED: f32 = 0.3; // depth units per tick
    pub const SPEED_INCREASE: f32 = 0.02;
    pub const SPEED_RAMP_INTERVAL: f32 = 10.0; // seconds
    pub const SPEED_RAMP_INTERVAL_STEP: f32 = 0.5;
    pub const MIN_SPEED_RAMP_INTERVAL: f32 = 1.0;
    pub const OBSTACLE_SPAWN_INTERVAL: f32 = 1.0; // seconds

    /// Obstacle spawn point (wide of the lane grid, far down the track)
    pub const OBSTACLE_SPAWN_X: f32 = 7.0;
    pub const OBSTACLE_SPAWN_Z: f32 = -30.0;
    /// Obstacle group height and per-lane slot height inside the group
    pub const OBSTACLE_GROUP_Y: f32 = 1.0;
    pub const OBSTACLE_SLOT_Y: f32 = 0.2;
    /// Depth at which the approach curve has fully converged onto the lanes
    pub const CURVE_END_Z: f32 = 10.0;
    /// Number of obstacle prototypes the frontend provides
    pub const OBSTACLE_MODEL_COUNT: usize = 3;

    /// Player
    pub const HERO_SIZE: f32 = 1.0;
    pub const HERO_Y: f32 = 1.0;
    pub const HERO_Z: f32 = 20.0;
    /// Slack subtracted from hero size for the proximity test
    pub const COLLISION_SLACK: f32 = 0.1;
    /// Obstacles this far behind the player are retired
    pub const RETIRE_MARGIN: f32 = 5.0;

    /// Lane change animation
    pub const LANE_CHANGE_DURATION: f32 = 1.0;
    pub const LANE_CHANGE_STEP: f32 = 0.2;

    /// Upper bound on random resampling loops
    pub const MAX_RESAMPLE_ATTEMPTS: u32 = 64;
}

/// Linearly remap `x` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// The input bounds must differ.
#[inline]
pub fn map_range(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    debug_assert!(in_min != in_max, "map_range needs distinct input bounds");
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Linear interpolation from `a` to `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-in-out.
///
/// `t` is not normalized against `duration`: the midpoint test uses
/// `duration / 2` but the curve itself is evaluated on raw `t`.
#[inline]
pub fn ease_in_out_quad(duration: f32, t: f32) -> f32 {
    if t < duration * 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(map_range(-30.0, -30.0, 10.0, 0.0, 90.0), 0.0);
        assert_eq!(map_range(10.0, -30.0, 10.0, 0.0, 90.0), 90.0);
        // Reversed output range
        assert_eq!(map_range(0.25, 0.0, 1.0, 8.0, 0.0), 6.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 1.3, 0.0), 0.0);
        assert_eq!(lerp(0.0, 1.3, 1.0), 1.3);
        assert_eq!(lerp(-2.0, 2.0, 0.5), 0.0);
    }

    #[test]
    fn test_ease_samples() {
        let samples: Vec<f32> = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0]
            .iter()
            .map(|&t| ease_in_out_quad(1.0, t))
            .collect();
        let expected = [0.0, 0.08, 0.32, 0.68, 0.92, 1.0];
        for (got, want) in samples.iter().zip(expected) {
            assert!((got - want).abs() < 1e-5, "{got} != {want}");
        }
        // Continuous and non-decreasing across the midpoint
        for pair in samples.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!((ease_in_out_quad(1.0, 0.5) - 0.5).abs() < 1e-6);
    }
}
