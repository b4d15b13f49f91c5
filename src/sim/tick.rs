//! Fixed timestep simulation tick
//!
//! One call per display frame. Order matters: inputs, spawn clock, ramp
//! clock (or intro self-play), obstacle advance, collision, retirement,
//! lane animation.

use rand::Rng;

use super::field::RETIREMENT_DEPTH;
use super::state::{GameEvent, GameSession, LaneDirection, SessionState};
use crate::consts::NUM_LANES;

/// Discrete inputs collected since the last tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start (or restart) a run
    pub start: bool,
    /// Shift one lane left
    pub move_left: bool,
    /// Shift one lane right
    pub move_right: bool,
}

/// Advance the session by one tick of `dt` seconds
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) {
    if input.start {
        session.start();
    }
    if input.move_left {
        session.move_lane(LaneDirection::Left);
    }
    if input.move_right {
        session.move_lane(LaneDirection::Right);
    }

    if session.mode == SessionState::Stopped {
        return;
    }

    session.time_ticks += 1;

    // Spawning runs in the intro too
    session.spawn_clock.advance(dt);
    if session
        .spawn_clock
        .fire(session.difficulty.obstacle_spawn_interval)
    {
        if let Err(e) = session.spawn_obstacle() {
            log::error!("Obstacle spawn failed: {}", e);
        }
    }

    if session.mode == SessionState::Intro {
        intro_dodge(session);
    } else {
        session.ramp_clock.advance(dt);
        if session.ramp_clock.fire(session.difficulty.speed_ramp_interval) {
            session.difficulty.ramp();
            log::debug!(
                "Speed ramp: speed {:.2}, spawn every {:.2}s, next ramp in {:.1}s",
                session.difficulty.speed,
                session.difficulty.obstacle_spawn_interval,
                session.difficulty.speed_ramp_interval
            );
            session.events.push(GameEvent::SpeedRamped {
                speed: session.difficulty.speed,
            });
        }
    }

    session.field.advance(session.difficulty.speed);

    if let Some(id) = session.field.collide_check(session.player.world_position()) {
        if session.mode == SessionState::Playing {
            session.crash(id);
        } else {
            log::trace!("Intro brushed obstacle {}", id);
        }
    }

    // One score update per retired obstacle
    let retired = u64::from(session.field.retire_and_score(RETIREMENT_DEPTH));
    let score = session.field.score();
    for point in (0..retired).rev() {
        session.events.push(GameEvent::ScoreChanged(score - point));
    }

    let running = session.mode != SessionState::Stopped;
    session.animator.step(&mut session.player, running);
}

/// Intro self-play: dodge the next obstacle if it blocks the player's lane
fn intro_dodge(session: &mut GameSession) {
    let lane = session.player.lane;
    let free: Vec<usize> = match session.field.front() {
        Some(next) if next.forward > 0.0 && next.occupies(lane) => {
            (0..NUM_LANES).filter(|&l| !next.occupies(l)).collect()
        }
        _ => return,
    };
    let Some(&first) = free.first() else {
        return;
    };

    // Closest free lane; equally close lanes win a coin flip
    let mut best = first;
    let mut best_dist = lane.abs_diff(first);
    for &candidate in &free {
        let dist = lane.abs_diff(candidate);
        if dist < best_dist || (dist == best_dist && session.rng.random_bool(0.5)) {
            best = candidate;
            best_dist = dist;
        }
    }

    log::trace!("Intro dodge: lane {} -> {}", lane, best);
    if let Err(e) = session.steer_to(best, true) {
        log::warn!("Intro dodge failed: {}", e);
    }
}
