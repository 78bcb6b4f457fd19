//! Bouncing Ball - a single-screen paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `game`: Orchestrator wiring the simulation to its collaborators
//! - `renderer`: Scene building and the wgpu backend
//! - `platform`: Native window, input collection and frame pacing
//! - `highscores`: Persisted high score
//! - `audio`: Sound cues
//! - `settings`: Start-up configuration

pub mod audio;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameInput, Game, InputEvent, LoopControl};
pub use highscores::{FileScoreStore, HighScoreError, MemoryScoreStore, ScoreStore};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation rate; one tick per frame
    pub const TICK_RATE: u32 = 60;

    /// Screen dimensions (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance from the bottom edge to the paddle's top edge
    pub const PADDLE_Y_OFFSET: f32 = 40.0;
    /// Pixels per tick while a direction key is held
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 30.0;
    /// Base horizontal speed (pixels per tick before the multiplier)
    pub const BALL_BASE_VX: f32 = 5.0;
    /// Base vertical speed (pixels per tick before the multiplier)
    pub const BALL_BASE_VY: f32 = 4.0;
    pub const BALL_START_MULTIPLIER: f32 = 0.5;
    /// Added to the multiplier on every paddle hit
    pub const BALL_MULTIPLIER_STEP: f32 = 0.05;
    /// Lowest value of any random color channel (keeps balls visible on black)
    pub const COLOR_CHANNEL_MIN: u8 = 50;

    /// A new ball joins every time score reaches balls_spawned * this
    pub const SPAWN_INTERVAL: u32 = 20;

    pub const HIGH_SCORE_FILE: &str = "highscore.txt";
    pub const SETTINGS_FILE: &str = "settings.json";
    pub const HIT_SOUND_FILE: &str = "hitpaddle.wav";
    pub const WINDOW_TITLE: &str = "Bouncing Ball Game";
}
