//! In-memory frontend
//!
//! Keeps a flat scene graph of obstacle groups keyed by id. Used by the
//! native binary and by tests that check what a renderer would see.

use std::collections::HashMap;

use glam::Vec3;

use super::Frontend;
use crate::sim::{GameSession, ObstacleModel, SceneIntent};

/// One cloned obstacle group
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub model: ObstacleModel,
    pub position: Vec3,
    /// Slot offsets relative to `position`
    pub slots: Vec<Vec3>,
    pub visible: bool,
}

#[derive(Debug)]
pub struct HeadlessFrontend {
    nodes: HashMap<u32, SceneNode>,
    score: u64,
    start_visible: bool,
    frames: u64,
}

impl Default for HeadlessFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessFrontend {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            score: 0,
            start_visible: true,
            frames: 0,
        }
    }

    pub fn node(&self, id: u32) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Last score shown
    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn start_visible(&self) -> bool {
        self.start_visible
    }

    /// Number of render calls
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Frontend for HeadlessFrontend {
    fn apply(&mut self, intent: &SceneIntent) {
        match intent {
            SceneIntent::Create {
                id,
                model,
                position,
                slots,
            } => {
                self.nodes.insert(
                    *id,
                    SceneNode {
                        model: *model,
                        position: *position,
                        slots: slots.clone(),
                        visible: false,
                    },
                );
            }
            SceneIntent::Move { id, position } => match self.nodes.get_mut(id) {
                Some(node) => node.position = *position,
                None => log::warn!("Move for unknown obstacle {}", id),
            },
            SceneIntent::SetVisible { id, visible } => {
                if let Some(node) = self.nodes.get_mut(id) {
                    node.visible = *visible;
                }
            }
            SceneIntent::Destroy { id } => {
                self.nodes.remove(id);
            }
        }
    }

    fn show_score(&mut self, score: u64) {
        self.score = score;
    }

    fn show_start_control(&mut self, visible: bool) {
        self.start_visible = visible;
    }

    fn render(&mut self, session: &GameSession) {
        self.frames += 1;
        log::trace!(
            "frame {}: player x={:.2} lane {}, {} obstacle(s)",
            self.frames,
            session.player.lateral,
            session.player.lane,
            self.nodes.len()
        );
    }
}
