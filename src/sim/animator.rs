//! Lane change animation
//!
//! A stepped ease, not a physics integrator. Each tick the player's visual
//! position is pulled from where it currently is toward the target lane by
//! `ease_in_out_quad(1, t)`, then `t` moves on by a fixed step. The
//! animation ends once `t` reaches the duration (or the run stops), and the
//! player snaps onto its logical lane.

use serde::{Deserialize, Serialize};

use super::state::Player;
use crate::consts::{LANE_CHANGE_DURATION, LANE_CHANGE_STEP, LANE_WIDTH};
use crate::{ease_in_out_quad, lerp, map_range};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaneAnimator {
    active: bool,
    /// Visual position the next step starts from
    from: f32,
    target: f32,
    steps_taken: u32,
    step_size: f32,
    duration: f32,
}

impl Default for LaneAnimator {
    fn default() -> Self {
        Self::new(LANE_CHANGE_STEP)
    }
}

impl LaneAnimator {
    pub fn new(step_size: f32) -> Self {
        Self {
            active: false,
            from: 0.0,
            target: 0.0,
            steps_taken: 0,
            step_size,
            duration: LANE_CHANGE_DURATION,
        }
    }

    /// Begin a new animation from `from` toward `target`, replacing any in flight
    pub fn start(&mut self, from: f32, target: f32) {
        self.active = true;
        self.from = from;
        self.target = target;
        self.steps_taken = 0;
    }

    /// Drop the animation without touching the player
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Animation clock
    pub fn elapsed(&self) -> f32 {
        self.steps_taken as f32 * self.step_size
    }

    /// Apply one step to `player`.
    ///
    /// With `keep_running` false (run stopped) this is the last step.
    /// Returns whether the animation continues next tick.
    pub fn step(&mut self, player: &mut Player, keep_running: bool) -> bool {
        if !self.active {
            return false;
        }

        let progress = ease_in_out_quad(self.duration, self.elapsed());
        let x = lerp(self.from, self.target, progress);
        player.lateral = x;
        // Lean into the turn, fading out as the target is reached
        player.yaw = map_range(
            x,
            self.target + self.duration * LANE_WIDTH,
            self.target,
            0.0,
            180.0,
        )
        .to_radians()
        .sin();
        self.from = x;
        self.steps_taken += 1;

        if self.elapsed() < self.duration && keep_running {
            return true;
        }

        player.lateral = player.lane_coordinate().unwrap_or(self.target);
        player.yaw = 0.0;
        self.active = false;
        log::trace!("Lane change settled at {}", player.lateral);
        false
    }
}
