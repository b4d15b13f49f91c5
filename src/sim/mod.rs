//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick speed increments
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod animator;
pub mod clock;
pub mod collision;
pub mod field;
pub mod lanes;
pub mod path;
pub mod pattern;
pub mod state;
pub mod tick;

pub use animator::LaneAnimator;
pub use clock::{Difficulty, IntervalClock};
pub use collision::{HIT_DISTANCE, slot_hits_player};
pub use field::{Obstacle, ObstacleField, RETIREMENT_DEPTH, SceneIntent};
pub use lanes::{LANE_CENTERS, lane_coordinate, nearest_lane_index};
pub use path::curved_lateral;
pub use pattern::{ObstacleModel, ObstaclePattern, PatternHistory, PatternKind, next_pattern};
pub use state::{GameEvent, GameSession, LaneDirection, Player, SessionState};
pub use tick::{TickInput, tick};
