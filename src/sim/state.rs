//! Game session and core simulation types
//!
//! `GameSession` owns every piece of mutable gameplay state. All of it is
//! touched from the single tick driver, so nothing here is shared.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animator::LaneAnimator;
use super::clock::{Difficulty, IntervalClock};
use super::field::ObstacleField;
use super::lanes::{LANE_CENTERS, lane_coordinate, lane_left, lane_right};
use super::pattern::{PatternHistory, PatternKind, next_pattern};
use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Current mode of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Self-playing demo before the first start
    Intro,
    /// Player in control
    Playing,
    /// Run over; waiting for start
    Stopped,
}

/// Direction of a requested lane change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaneDirection {
    Left,
    Right,
}

/// Things the frontend may want to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new run began
    Started,
    /// The run ended, by collision (`Some(obstacle id)`) or by request
    Stopped { obstacle: Option<u32> },
    ObstacleSpawned { id: u32, kind: PatternKind },
    /// New score value to display
    ScoreChanged(u64),
    SpeedRamped { speed: f32 },
    /// Logical lane changed; `auto` for intro self-play
    LaneChanged { lane: usize, auto: bool },
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Logical lane (authoritative)
    pub lane: usize,
    /// Animated visual position across the lanes
    pub lateral: f32,
    /// Cosmetic lean while changing lanes
    pub yaw: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            lane: CENTER_LANE,
            lateral: LANE_CENTERS[CENTER_LANE],
            yaw: 0.0,
        }
    }
}

impl Player {
    /// Center of the logical lane
    pub fn lane_coordinate(&self) -> Result<f32, ConfigError> {
        lane_coordinate(self.lane)
    }

    /// Position in world space (depth is fixed)
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(self.lateral, HERO_Y, HERO_Z)
    }
}

/// Complete game session (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) mode: SessionState,
    pub player: Player,
    pub animator: LaneAnimator,
    pub field: ObstacleField,
    pub history: PatternHistory,
    pub difficulty: Difficulty,
    pub spawn_clock: IntervalClock,
    pub ramp_clock: IntervalClock,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
    settings: Settings,
}

impl GameSession {
    /// New session in intro mode with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_settings(Settings::default(), seed)
    }

    pub fn with_settings(settings: Settings, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode: SessionState::Intro,
            player: Player::default(),
            animator: LaneAnimator::new(settings.lane_change_step),
            field: ObstacleField::new(),
            history: PatternHistory::new(),
            difficulty: Difficulty::from_settings(&settings),
            spawn_clock: IntervalClock::new(),
            ramp_clock: IntervalClock::new(),
            time_ticks: 0,
            events: Vec::new(),
            settings,
        }
    }

    pub fn mode(&self) -> SessionState {
        self.mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn score(&self) -> u64 {
        self.field.score()
    }

    /// Begin a run. Ignored while already playing.
    pub fn start(&mut self) -> bool {
        if self.mode == SessionState::Playing {
            return false;
        }

        self.field.reset();
        self.player = Player::default();
        self.animator.cancel();
        self.spawn_clock.restart();
        self.ramp_clock.restart();
        if self.settings.reset_difficulty_on_start {
            self.difficulty = Difficulty::from_settings(&self.settings);
        }
        self.mode = SessionState::Playing;

        self.events.push(GameEvent::Started);
        self.events.push(GameEvent::ScoreChanged(0));
        log::info!("Run started (speed {:.2})", self.difficulty.speed);
        true
    }

    /// End the run on request
    pub fn stop(&mut self) {
        self.halt(None);
    }

    /// End the run because the player touched `obstacle`
    pub fn crash(&mut self, obstacle: u32) {
        self.halt(Some(obstacle));
    }

    fn halt(&mut self, obstacle: Option<u32>) {
        if self.mode != SessionState::Playing {
            return;
        }
        self.mode = SessionState::Stopped;
        self.events.push(GameEvent::Stopped { obstacle });
        log::info!(
            "Run over after {} ticks, score {}",
            self.time_ticks,
            self.score()
        );
    }

    /// Player-requested lane change. Only honoured while playing.
    pub fn move_lane(&mut self, direction: LaneDirection) -> bool {
        if self.mode != SessionState::Playing {
            return false;
        }
        let target = match direction {
            LaneDirection::Left => lane_left(self.player.lane),
            LaneDirection::Right => lane_right(self.player.lane),
        };
        let Some(lane) = target else {
            return false;
        };
        match self.steer_to(lane, false) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Lane change ignored: {}", e);
                false
            }
        }
    }

    /// Retarget the player and restart the lane animation from where it is now.
    ///
    /// An out-of-range lane leaves the player untouched.
    pub(crate) fn steer_to(&mut self, lane: usize, auto: bool) -> Result<(), ConfigError> {
        let target = lane_coordinate(lane)?;
        self.player.lane = lane;
        self.animator.start(self.player.lateral, target);
        self.events.push(GameEvent::LaneChanged { lane, auto });
        Ok(())
    }

    /// Generate the next pattern and put it on the track
    pub fn spawn_obstacle(&mut self) -> Result<u32, ConfigError> {
        let pattern = next_pattern(&mut self.rng, &mut self.history);
        let kind = pattern.kind;
        let id = self.field.spawn(pattern)?;
        self.events.push(GameEvent::ObstacleSpawned { id, kind });
        Ok(id)
    }

    /// Take queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
