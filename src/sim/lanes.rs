//! Lane geometry
//!
//! Lanes are indexed left to right. Lane centers are evenly spaced by
//! `LANE_WIDTH` around an exact center lane at coordinate 0.

use crate::consts::{CENTER_LANE, LANE_WIDTH, NUM_LANES};
use crate::error::ConfigError;

const _: () = assert!(NUM_LANES % 2 == 1, "lane count must be odd");

const fn lane_centers() -> [f32; NUM_LANES] {
    let mut centers = [0.0; NUM_LANES];
    let mut i = 0;
    while i < NUM_LANES {
        centers[i] = (i as f32 - CENTER_LANE as f32) * LANE_WIDTH;
        i += 1;
    }
    centers
}

/// Lateral center of every lane, strictly increasing
pub const LANE_CENTERS: [f32; NUM_LANES] = lane_centers();

/// Lateral coordinate of a lane
pub fn lane_coordinate(index: usize) -> Result<f32, ConfigError> {
    LANE_CENTERS
        .get(index)
        .copied()
        .ok_or(ConfigError::LaneOutOfRange {
            index,
            lanes: NUM_LANES,
        })
}

/// Index of the lane whose center is closest to `coordinate`
pub fn nearest_lane_index(coordinate: f32) -> usize {
    LANE_CENTERS
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (*a - coordinate)
                .abs()
                .partial_cmp(&(*b - coordinate).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(CENTER_LANE)
}

/// Lane to the left, if any
#[inline]
pub fn lane_left(lane: usize) -> Option<usize> {
    lane.checked_sub(1)
}

/// Lane to the right, if any
#[inline]
pub fn lane_right(lane: usize) -> Option<usize> {
    (lane + 1 < NUM_LANES).then_some(lane + 1)
}
