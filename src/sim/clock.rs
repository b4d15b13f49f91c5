//! Spawn/ramp timers and difficulty curve
//!
//! Two interval clocks run off the tick's `dt`. The spawn clock fires an
//! obstacle every `obstacle_spawn_interval` seconds; the ramp clock (only
//! outside the intro) speeds the game up and shortens both intervals.

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_SPEED_RAMP_INTERVAL, SPEED_RAMP_INTERVAL_STEP};
use crate::settings::Settings;

/// Elapsed-time clock that restarts whenever it fires
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalClock {
    elapsed: f32,
}

impl IntervalClock {
    pub fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Seconds since the last restart
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Fire (and restart) once strictly more than `interval` has passed
    pub fn fire(&mut self, interval: f32) -> bool {
        if self.elapsed > interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Speed and cadence of the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Obstacle advance per tick
    pub speed: f32,
    /// Seconds between spawns
    pub obstacle_spawn_interval: f32,
    /// Seconds between ramps
    pub speed_ramp_interval: f32,
    /// Speed added per ramp
    pub speed_increase: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Difficulty {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            speed: settings.start_speed,
            obstacle_spawn_interval: settings.obstacle_spawn_interval,
            speed_ramp_interval: settings.speed_ramp_interval,
            speed_increase: settings.speed_increase,
        }
    }

    /// Shortest spawn interval the ramp can reach
    pub fn min_spawn_interval(&self) -> f32 {
        3.0 * self.speed_increase
    }

    /// One step harder: faster obstacles, quicker ramps, denser spawns
    pub fn ramp(&mut self) {
        if self.speed_ramp_interval > MIN_SPEED_RAMP_INTERVAL {
            self.speed_ramp_interval =
                (self.speed_ramp_interval - SPEED_RAMP_INTERVAL_STEP).max(MIN_SPEED_RAMP_INTERVAL);
        }
        let min_spawn = self.min_spawn_interval();
        if self.obstacle_spawn_interval > min_spawn {
            self.obstacle_spawn_interval =
                (self.obstacle_spawn_interval - 2.0 * self.speed_increase).max(min_spawn);
        }
        self.speed += self.speed_increase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_fires_strictly_after_interval() {
        let mut clock = IntervalClock::new();
        clock.advance(0.5);
        clock.advance(0.5);
        assert!(!clock.fire(1.0));
        clock.advance(0.01);
        assert!(clock.fire(1.0));
        assert_eq!(clock.elapsed(), 0.0);
        assert!(!clock.fire(1.0));
    }

    #[test]
    fn test_single_ramp() {
        let mut difficulty = Difficulty::default();
        difficulty.ramp();
        assert!((difficulty.speed - 0.32).abs() < 1e-6);
        assert_eq!(difficulty.speed_ramp_interval, 9.5);
        assert!((difficulty.obstacle_spawn_interval - 0.96).abs() < 1e-6);
    }

    #[test]
    fn test_ramp_floors() {
        let mut difficulty = Difficulty::default();
        let mut last_speed = difficulty.speed;
        for _ in 0..200 {
            difficulty.ramp();
            assert!(difficulty.speed > last_speed);
            last_speed = difficulty.speed;
            assert!(difficulty.speed_ramp_interval >= MIN_SPEED_RAMP_INTERVAL);
            assert!(difficulty.obstacle_spawn_interval >= difficulty.min_spawn_interval());
        }
        assert_eq!(difficulty.speed_ramp_interval, MIN_SPEED_RAMP_INTERVAL);
        assert_eq!(difficulty.obstacle_spawn_interval, difficulty.min_spawn_interval());
    }
}
