//! Platform abstraction layer
//!
//! The simulation never touches a scene graph or the DOM. A frontend
//! implements [`Frontend`] and [`FrameDriver`] replays the simulation's
//! scene intents and events into it once per tick:
//! - Scene intents (create/move/show/destroy obstacle groups)
//! - Score display
//! - Start control visibility
//! - Render

pub mod headless;

pub use headless::HeadlessFrontend;

use crate::consts::{FRAME_DT, MAX_SUBSTEPS};
use crate::sim::{GameEvent, GameSession, SceneIntent, TickInput, tick};

/// Outer shell the simulation drives
pub trait Frontend {
    /// Apply one scene-graph change
    fn apply(&mut self, intent: &SceneIntent);

    /// Replace the displayed score
    fn show_score(&mut self, score: u64);

    /// Show or hide the start control
    fn show_start_control(&mut self, _visible: bool) {}

    /// Draw the current state
    fn render(&mut self, session: &GameSession);
}

/// Fixed-timestep frame loop with one-shot input latching
#[derive(Debug, Default)]
pub struct FrameDriver {
    accumulator: f32,
    input: TickInput,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a start request for the next tick
    pub fn press_start(&mut self) {
        self.input.start = true;
    }

    pub fn press_left(&mut self) {
        self.input.move_left = true;
    }

    pub fn press_right(&mut self) {
        self.input.move_right = true;
    }

    /// Run however many ticks `dt` seconds of wall time cover.
    ///
    /// Returns the number of ticks run.
    pub fn frame(
        &mut self,
        session: &mut GameSession,
        frontend: &mut impl Frontend,
        dt: f32,
    ) -> u32 {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= FRAME_DT && substeps < MAX_SUBSTEPS {
            tick(session, &self.input, FRAME_DT);
            self.accumulator -= FRAME_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input = TickInput::default();

            dispatch(session, frontend);
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= FRAME_DT {
            log::trace!("Dropping {:.3}s of frame backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        substeps
    }
}

/// Forward queued intents and events to the frontend, then render
pub fn dispatch(session: &mut GameSession, frontend: &mut impl Frontend) {
    for intent in session.field.drain_intents() {
        frontend.apply(&intent);
    }
    for event in session.drain_events() {
        match event {
            GameEvent::ScoreChanged(score) => frontend.show_score(score),
            GameEvent::Started => frontend.show_start_control(false),
            GameEvent::Stopped { .. } => frontend.show_start_control(true),
            _ => {}
        }
    }
    frontend.render(session);
}
