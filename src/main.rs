//! Tilt Snake entry point
//!
//! Headless native runner: binds the DIPPID feed, advances the simulation at
//! a fixed rate, and logs game events. A graphical front end would consume
//! `GameState::frame()` each tick instead of the log lines.

use std::path::Path;
use std::time::{Duration, Instant};

use tilt_snake::Settings;
use tilt_snake::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use tilt_snake::input::DippidFeed;
use tilt_snake::sim::{Bounds, GameState, TickInput, tick};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load(Path::new("tilt-snake.json"));
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Starting run with seed {seed} in {:?} mode", settings.control);

    let mut feed = match DippidFeed::bind(settings.sensor_port) {
        Ok(feed) => Some(feed),
        Err(err) => {
            log::warn!(
                "No sensor feed on udp/{}: {err}; the head will idle",
                settings.sensor_port
            );
            None
        }
    };

    let bounds = Bounds::new(ARENA_WIDTH, ARENA_HEIGHT);
    let mut state = GameState::new(seed, bounds, settings.control);

    let tick_hz = settings.tick_hz.max(1);
    let tick_duration = Duration::from_secs_f64(1.0 / f64::from(tick_hz));
    let mut button_was_pressed = false;
    let mut last_report = 0u64;

    loop {
        let frame_start = Instant::now();

        let mut input = TickInput::default();
        if let Some(feed) = feed.as_mut() {
            let reading = feed.sample();
            input.tilt = reading.tilt();
            // Rising edge on button_1 toggles pause
            let pressed = reading.button_pressed();
            input.pause = pressed && !button_was_pressed;
            button_was_pressed = pressed;
        }

        for event in tick(&mut state, &input) {
            log::debug!("{event:?}");
        }

        // Once-a-second status line
        if state.time_ticks != last_report && state.time_ticks % u64::from(tick_hz) == 0 {
            last_report = state.time_ticks;
            let frame = state.frame();
            log::debug!(
                "t={} head=({:.1},{:.1}) segments={} score={}",
                state.time_ticks,
                frame.head.pos.x,
                frame.head.pos.y,
                frame.segments.len(),
                frame.score
            );
        }

        if let Some(remaining) = tick_duration.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}
