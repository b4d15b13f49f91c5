//! Obstacle pattern generation
//!
//! Each spawn picks one of six lane layouts. A layout is rejected when it
//! already filled both slots of the recent history, so the same layout
//! never appears three times in a row. Every layout leaves at least one
//! lane free.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{CENTER_LANE, MAX_RESAMPLE_ATTEMPTS, NUM_LANES, OBSTACLE_MODEL_COUNT};

/// Obstacle lane layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    /// `| | |x| | |` one random lane
    Single,
    /// `| |x|x| | |` two neighbouring lanes
    AdjacentPair,
    /// `|x| |x| |x|` both outer lanes and the center
    Alternating,
    /// `|x|x|x| |x|` everything except one random gap
    GapOne,
    /// `|x| |x|x| |` everything except two random gaps
    GapTwo,
    /// `| |x| | |x|` two distinct random lanes
    SplitPair,
}

impl PatternKind {
    pub const ALL: [PatternKind; 6] = [
        PatternKind::Single,
        PatternKind::AdjacentPair,
        PatternKind::Alternating,
        PatternKind::GapOne,
        PatternKind::GapTwo,
        PatternKind::SplitPair,
    ];

    /// Number of lanes this layout blocks
    pub fn occupied_count(self) -> usize {
        match self {
            PatternKind::Single => 1,
            PatternKind::AdjacentPair | PatternKind::SplitPair => 2,
            PatternKind::Alternating => 3,
            PatternKind::GapOne => NUM_LANES - 1,
            PatternKind::GapTwo => NUM_LANES - 2,
        }
    }

    fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Visual prototype used for every slot of one spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleModel {
    Error,
    Warning,
    NoSignal,
}

impl ObstacleModel {
    pub const ALL: [ObstacleModel; OBSTACLE_MODEL_COUNT] = [
        ObstacleModel::Error,
        ObstacleModel::Warning,
        ObstacleModel::NoSignal,
    ];

    fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A concrete layout ready to spawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstaclePattern {
    pub kind: PatternKind,
    pub model: ObstacleModel,
    /// Blocked lanes, in generation order
    pub lanes: Vec<usize>,
}

/// Number of recent kinds remembered
pub const HISTORY_LEN: usize = 2;

/// Recently emitted kinds, oldest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternHistory {
    recent: VecDeque<PatternKind>,
}

impl PatternHistory {
    pub fn new() -> Self {
        Self {
            recent: VecDeque::with_capacity(HISTORY_LEN + 1),
        }
    }

    /// How many remembered entries equal `kind`
    pub fn matches(&self, kind: PatternKind) -> usize {
        self.recent.iter().filter(|&&k| k == kind).count()
    }

    /// A kind is admissible unless it fills the whole history
    pub fn admits(&self, kind: PatternKind) -> bool {
        self.matches(kind) <= 1
    }

    /// Record an emitted kind, evicting the oldest past capacity
    pub fn push(&mut self, kind: PatternKind) {
        self.recent.push_back(kind);
        if self.recent.len() > HISTORY_LEN {
            self.recent.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PatternKind> + '_ {
        self.recent.iter().copied()
    }
}

/// Uniform random lane
pub fn random_lane<R: Rng>(rng: &mut R) -> usize {
    rng.random_range(0..NUM_LANES)
}

/// Uniform random lane different from `excluded`
pub fn random_lane_excluding<R: Rng>(rng: &mut R, excluded: usize) -> usize {
    for _ in 0..MAX_RESAMPLE_ATTEMPTS {
        let lane = random_lane(rng);
        if lane != excluded {
            return lane;
        }
    }
    log::warn!("Lane resample cap hit, stepping past lane {}", excluded);
    (excluded + 1) % NUM_LANES
}

/// Draw the next pattern and record its kind in `history`
pub fn next_pattern<R: Rng>(rng: &mut R, history: &mut PatternHistory) -> ObstaclePattern {
    let kind = draw_admissible_kind(rng, history);
    history.push(kind);

    let model = ObstacleModel::random(rng);
    let lanes = layout_lanes(kind, rng);

    ObstaclePattern { kind, model, lanes }
}

fn draw_admissible_kind<R: Rng>(rng: &mut R, history: &PatternHistory) -> PatternKind {
    for _ in 0..MAX_RESAMPLE_ATTEMPTS {
        let kind = PatternKind::random(rng);
        if history.admits(kind) {
            return kind;
        }
    }
    // At most one kind can fill a two-slot history, so one of the first two is admissible
    log::warn!("Pattern resample cap hit, taking first admissible kind");
    PatternKind::ALL
        .into_iter()
        .find(|&k| history.admits(k))
        .unwrap_or(PatternKind::Single)
}

/// Pick the blocked lanes for a layout
fn layout_lanes<R: Rng>(kind: PatternKind, rng: &mut R) -> Vec<usize> {
    match kind {
        PatternKind::Single => vec![random_lane(rng)],
        PatternKind::AdjacentPair => {
            let first = random_lane(rng);
            let second = if first + 1 < NUM_LANES { first + 1 } else { first - 1 };
            vec![first, second]
        }
        PatternKind::Alternating => vec![0, CENTER_LANE, NUM_LANES - 1],
        PatternKind::GapOne => {
            let gap = random_lane(rng);
            (0..NUM_LANES).filter(|&lane| lane != gap).collect()
        }
        PatternKind::GapTwo => {
            let gap1 = random_lane(rng);
            let gap2 = random_lane_excluding(rng, gap1);
            (0..NUM_LANES)
                .filter(|&lane| lane != gap1 && lane != gap2)
                .collect()
        }
        PatternKind::SplitPair => {
            let first = random_lane(rng);
            let second = random_lane_excluding(rng, first);
            vec![first, second]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;

    /// Source that only ever yields zero bits
    struct StuckRng;

    impl RngCore for StuckRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn test_history_eviction() {
        let mut history = PatternHistory::new();
        assert!(history.is_empty());
        history.push(PatternKind::Single);
        assert!(!history.is_empty());
        history.push(PatternKind::GapOne);
        history.push(PatternKind::GapTwo);
        assert_eq!(history.len(), HISTORY_LEN);
        assert_eq!(
            history.iter().collect::<Vec<_>>(),
            vec![PatternKind::GapOne, PatternKind::GapTwo]
        );
    }

    #[test]
    fn test_history_admits() {
        let mut history = PatternHistory::new();
        history.push(PatternKind::Alternating);
        assert!(history.admits(PatternKind::Alternating));
        history.push(PatternKind::Alternating);
        assert!(!history.admits(PatternKind::Alternating));
        assert!(history.admits(PatternKind::Single));
    }

    #[test]
    fn test_no_triple_repeat() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut history = PatternHistory::new();
        let kinds: Vec<PatternKind> = (0..10_000)
            .map(|_| next_pattern(&mut rng, &mut history).kind)
            .collect();
        for run in kinds.windows(3) {
            assert!(!(run[0] == run[1] && run[1] == run[2]), "triple repeat: {:?}", run);
        }
        // All six layouts show up
        for kind in PatternKind::ALL {
            assert!(kinds.contains(&kind));
        }
    }

    #[test]
    fn test_stuck_rng_still_terminates() {
        // A constant source always draws the same kind and lane
        let mut rng = StuckRng;
        let mut history = PatternHistory::new();
        let kinds: Vec<PatternKind> = (0..6)
            .map(|_| next_pattern(&mut rng, &mut history).kind)
            .collect();
        for run in kinds.windows(3) {
            assert!(!(run[0] == run[1] && run[1] == run[2]));
        }
        assert_ne!(random_lane_excluding(&mut rng, 0), 0);
    }

    #[test]
    fn test_fixed_alternating_layout() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(layout_lanes(PatternKind::Alternating, &mut rng), vec![0, 2, 4]);
    }

    #[test]
    fn test_adjacent_pair_at_right_edge() {
        // Whatever the first lane is, the pair is adjacent and in range
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            let lanes = layout_lanes(PatternKind::AdjacentPair, &mut rng);
            assert_eq!(lanes.len(), 2);
            assert_eq!(lanes[0].abs_diff(lanes[1]), 1);
            if lanes[0] == NUM_LANES - 1 {
                assert_eq!(lanes[1], NUM_LANES - 2);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_layouts_leave_a_free_lane(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut history = PatternHistory::new();
            for _ in 0..32 {
                let pattern = next_pattern(&mut rng, &mut history);
                let mut lanes = pattern.lanes.clone();
                lanes.sort_unstable();
                lanes.dedup();
                prop_assert_eq!(lanes.len(), pattern.lanes.len());
                prop_assert_eq!(lanes.len(), pattern.kind.occupied_count());
                prop_assert!(!lanes.is_empty());
                prop_assert!(lanes.len() < NUM_LANES);
                prop_assert!(lanes.iter().all(|&l| l < NUM_LANES));
            }
        }

        #[test]
        fn prop_gap_counts(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let free = |lanes: &[usize]| (0..NUM_LANES).filter(|l| !lanes.contains(l)).count();
            prop_assert_eq!(free(&layout_lanes(PatternKind::GapOne, &mut rng)[..]), 1);
            prop_assert_eq!(free(&layout_lanes(PatternKind::GapTwo, &mut rng)[..]), 2);
        }

        #[test]
        fn prop_distinct_lane(seed in any::<u64>(), excluded in 0..NUM_LANES) {
            let mut rng = Pcg32::seed_from_u64(seed);
            prop_assert_ne!(random_lane_excluding(&mut rng, excluded), excluded);
        }
    }
}
