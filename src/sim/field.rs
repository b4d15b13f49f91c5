//! Live obstacle field
//!
//! Obstacles are stored in spawn order. They all move at the same speed,
//! so spawn order is also depth order: the front of the list is the next
//! obstacle to reach the player.
//!
//! The field never talks to a renderer directly. Every change it makes is
//! queued as a [`SceneIntent`] for the frontend to replay.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::first_hit;
use super::lanes::lane_coordinate;
use super::path::{curved_lateral, in_curve};
use super::pattern::{ObstacleModel, ObstaclePattern, PatternKind};
use crate::consts::*;
use crate::error::ConfigError;

/// Scene-graph change for the frontend, keyed by obstacle id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneIntent {
    /// Clone `model` once per slot and group the clones at `position`
    Create {
        id: u32,
        model: ObstacleModel,
        position: Vec3,
        /// Slot offsets relative to `position`
        slots: Vec<Vec3>,
    },
    Move { id: u32, position: Vec3 },
    SetVisible { id: u32, visible: bool },
    Destroy { id: u32 },
}

/// One spawned obstacle group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: PatternKind,
    pub model: ObstacleModel,
    pub occupied_lanes: Vec<usize>,
    /// Group offset across the lanes (swings to 0 on approach)
    pub lateral: f32,
    /// Depth along the track; grows toward and past the player
    pub forward: f32,
    pub visible: bool,
}

impl Obstacle {
    /// Group origin in world space
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.lateral, OBSTACLE_GROUP_Y, self.forward)
    }

    /// Whether any slot sits in `lane`
    pub fn occupies(&self, lane: usize) -> bool {
        self.occupied_lanes.contains(&lane)
    }

    /// World position of every slot (lanes are checked on spawn)
    pub fn slot_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        let origin = self.position();
        self.occupied_lanes
            .iter()
            .filter_map(move |&lane| slot_offset(lane).ok().map(|offset| origin + offset))
    }

    /// Move one tick down the track; re-aim while still on the curve
    fn advance(&mut self, speed: f32) {
        self.forward += speed;
        if in_curve(self.forward) {
            self.lateral = curved_lateral(self.forward);
        }
    }
}

/// Offset of a lane slot inside its obstacle group
#[inline]
pub fn slot_offset(lane: usize) -> Result<Vec3, ConfigError> {
    Ok(Vec3::new(lane_coordinate(lane)?, OBSTACLE_SLOT_Y, 0.0))
}

/// Depth past which obstacles are retired
pub const RETIREMENT_DEPTH: f32 = HERO_Z + RETIRE_MARGIN;

/// Owner of every live obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    score: u64,
    next_id: u32,
    #[serde(skip)]
    intents: Vec<SceneIntent>,
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            score: 0,
            next_id: 1,
            intents: Vec::new(),
        }
    }

    /// Live obstacles, front (nearest the player) first
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Next obstacle to reach the player
    pub fn front(&self) -> Option<&Obstacle> {
        self.obstacles.first()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Obstacles retired since the last reset
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Place a new obstacle group at the spawn point.
    ///
    /// Fails without touching the field if any lane is out of range.
    pub fn spawn(&mut self, pattern: ObstaclePattern) -> Result<u32, ConfigError> {
        let slots = pattern
            .lanes
            .iter()
            .map(|&lane| slot_offset(lane))
            .collect::<Result<Vec<_>, _>>()?;

        let id = self.next_id;
        self.next_id += 1;

        let obstacle = Obstacle {
            id,
            kind: pattern.kind,
            model: pattern.model,
            occupied_lanes: pattern.lanes,
            lateral: OBSTACLE_SPAWN_X,
            forward: OBSTACLE_SPAWN_Z,
            visible: true,
        };

        self.intents.push(SceneIntent::Create {
            id,
            model: obstacle.model,
            position: obstacle.position(),
            slots,
        });
        self.intents.push(SceneIntent::SetVisible { id, visible: true });

        log::debug!(
            "Spawned obstacle {} ({:?}, lanes {:?})",
            id,
            obstacle.kind,
            obstacle.occupied_lanes
        );
        self.obstacles.push(obstacle);
        Ok(id)
    }

    /// Advance every obstacle by `speed` depth units
    pub fn advance(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(speed);
            self.intents.push(SceneIntent::Move {
                id: obstacle.id,
                position: obstacle.position(),
            });
        }
    }

    /// Id of the first obstacle with a slot touching the player
    pub fn collide_check(&self, player: Vec3) -> Option<u32> {
        self.obstacles
            .iter()
            .find(|o| first_hit(o.slot_positions(), player).is_some())
            .map(|o| o.id)
    }

    /// Remove visible obstacles deeper than `retirement_depth`, one point each.
    ///
    /// Returns the number retired.
    pub fn retire_and_score(&mut self, retirement_depth: f32) -> u32 {
        let mut retired = 0;
        let intents = &mut self.intents;
        self.obstacles.retain(|o| {
            if o.visible && o.forward > retirement_depth {
                intents.push(SceneIntent::Destroy { id: o.id });
                retired += 1;
                false
            } else {
                true
            }
        });
        if retired > 0 {
            self.score += u64::from(retired);
            log::debug!("Retired {} obstacle(s), score {}", retired, self.score);
        }
        retired
    }

    /// Drop every obstacle and zero the score
    pub fn reset(&mut self) {
        for obstacle in self.obstacles.drain(..) {
            self.intents.push(SceneIntent::Destroy { id: obstacle.id });
        }
        self.score = 0;
    }

    /// Take queued scene intents
    pub fn drain_intents(&mut self) -> Vec<SceneIntent> {
        std::mem::take(&mut self.intents)
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut Vec<Obstacle> {
        &mut self.obstacles
    }
}
