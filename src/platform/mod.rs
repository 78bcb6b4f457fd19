//! Platform layer
//!
//! Native desktop only:
//! - Window + event loop (winit)
//! - Input events collected into per-frame snapshots
//! - Fixed 60 Hz frame pacing
//! - High score file and audio output wiring

pub mod app;
pub mod input;
pub mod pacer;

pub use app::App;
pub use input::InputCollector;
pub use pacer::FramePacer;

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use winit::event_loop::EventLoop;

use crate::audio::create_audio;
use crate::game::Game;
use crate::highscores::FileScoreStore;
use crate::settings::Settings;

/// Seed from the wall clock
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Open the window and run until it is closed
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let store = FileScoreStore::new(&settings.high_score_path);
    let audio = create_audio(&settings.audio);
    let game = Game::new(&settings, store, audio, clock_seed());

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(settings, game);
    event_loop.run_app(&mut app).context("Event loop failed")?;
    app.finish()
}
