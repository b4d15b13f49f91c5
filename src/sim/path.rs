//! Curved approach path
//!
//! Obstacles spawn wide of the track and swing onto their lanes as they
//! approach. The swing is sine-eased over the depth range
//! `[OBSTACLE_SPAWN_Z, CURVE_END_Z]`; past that the offset is left alone.

use crate::consts::{CURVE_END_Z, OBSTACLE_SPAWN_X, OBSTACLE_SPAWN_Z};
use crate::map_range;

/// Whether an obstacle at `depth` is still on the curved part of its path
#[inline]
pub fn in_curve(depth: f32) -> bool {
    depth < CURVE_END_Z
}

/// Lateral offset of an obstacle group at `depth`.
///
/// `OBSTACLE_SPAWN_X` at the spawn depth, 0 at `CURVE_END_Z`.
pub fn curved_lateral(depth: f32) -> f32 {
    let angle = map_range(depth, OBSTACLE_SPAWN_Z, CURVE_END_Z, 0.0, 90.0).to_radians();
    OBSTACLE_SPAWN_X - map_range(angle.sin(), 0.0, 1.0, 0.0, OBSTACLE_SPAWN_X)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(curved_lateral(OBSTACLE_SPAWN_Z), OBSTACLE_SPAWN_X);
        assert!(curved_lateral(CURVE_END_Z).abs() < 1e-5);
    }

    #[test]
    fn test_curve_threshold() {
        assert!(in_curve(OBSTACLE_SPAWN_Z));
        assert!(in_curve(9.99));
        assert!(!in_curve(CURVE_END_Z));
    }

    #[test]
    fn test_sine_shape() {
        // Halfway in depth is 45 degrees, so the offset has dropped by sin(45)
        let mid = (OBSTACLE_SPAWN_Z + CURVE_END_Z) / 2.0;
        let expected = OBSTACLE_SPAWN_X * (1.0 - std::f32::consts::FRAC_1_SQRT_2);
        assert!((curved_lateral(mid) - expected).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_monotonically_decreasing(a in OBSTACLE_SPAWN_Z..CURVE_END_Z, b in OBSTACLE_SPAWN_Z..CURVE_END_Z) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(curved_lateral(far) <= curved_lateral(near) + 1e-6);
            prop_assert!(curved_lateral(near) <= OBSTACLE_SPAWN_X);
            prop_assert!(curved_lateral(far) >= -1e-5);
        }
    }
}
