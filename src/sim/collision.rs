//! Proximity collision between the player and obstacle slots
//!
//! Not a volume test: a slot hits when its center is closer to the player
//! than the hero size minus a little slack.

use glam::Vec3;

use crate::consts::{COLLISION_SLACK, HERO_SIZE};

/// Distance below which a slot counts as a hit
pub const HIT_DISTANCE: f32 = HERO_SIZE - COLLISION_SLACK;

/// Whether an obstacle slot at `slot` touches the player at `player`
#[inline]
pub fn slot_hits_player(slot: Vec3, player: Vec3) -> bool {
    slot.distance(player) < HIT_DISTANCE
}

/// First slot position that touches the player, if any
pub fn first_hit(slots: impl IntoIterator<Item = Vec3>, player: Vec3) -> Option<Vec3> {
    slots.into_iter().find(|&slot| slot_hits_player(slot, player))
}
