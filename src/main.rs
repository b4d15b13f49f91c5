//! Lane Dash entry point
//!
//! Runs the simulation headless: a few seconds of intro self-play, then a
//! scripted run with random lane changes until the runner crashes or the
//! time limit is reached.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_dash::Settings;
    use lane_dash::consts::FRAME_DT;
    use lane_dash::platform::{FrameDriver, HeadlessFrontend};
    use lane_dash::sim::{GameSession, SessionState};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    const INTRO_FRAMES: u32 = 5 * 60;
    const MAX_RUN_FRAMES: u32 = 120 * 60;
    const INPUT_EVERY: u32 = 20;

    env_logger::init();
    log::info!("Lane Dash (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring settings file {}: {}", path, e);
            Settings::default()
        }),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Game initialized with seed: {}", seed);

    let mut session = GameSession::with_settings(settings, seed);
    let mut frontend = HeadlessFrontend::new();
    let mut driver = FrameDriver::new();

    for _ in 0..INTRO_FRAMES {
        driver.frame(&mut session, &mut frontend, FRAME_DT);
    }
    log::info!(
        "Intro done: {} obstacle(s) on track, player in lane {}",
        session.field.len(),
        session.player.lane
    );

    driver.press_start();
    let mut inputs = Pcg32::seed_from_u64(seed.wrapping_add(1));
    let mut frames = 0;
    while frames < MAX_RUN_FRAMES && session.mode() != SessionState::Stopped {
        if frames % INPUT_EVERY == 0 {
            match inputs.random_range(0..3) {
                0 => driver.press_left(),
                1 => driver.press_right(),
                _ => {}
            }
        }
        driver.frame(&mut session, &mut frontend, FRAME_DT);
        frames += 1;
    }

    log::info!(
        "Run finished after {:.1}s: score {}, speed {:.2}",
        frames as f32 * FRAME_DT,
        frontend.score(),
        session.difficulty.speed
    );
    println!("score: {}", frontend.score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds embed the library; there is no standalone entry point
}
