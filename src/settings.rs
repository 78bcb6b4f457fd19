//! Game settings
//!
//! Created once at start-up and passed by reference to everything that needs
//! screen dimensions or tuning. Optionally read from `settings.json` in the
//! working directory; any field left out keeps its default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Paddle tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub width: f32,
    pub height: f32,
    /// Distance from the bottom edge to the paddle's top edge
    pub y_offset: f32,
    /// Pixels per tick while a direction key is held
    pub speed: f32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            y_offset: PADDLE_Y_OFFSET,
            speed: PADDLE_SPEED,
        }
    }
}

/// Ball tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub radius: f32,
    pub base_vx: f32,
    pub base_vy: f32,
    pub start_multiplier: f32,
    pub multiplier_step: f32,
    pub color_channel_min: u8,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            base_vx: BALL_BASE_VX,
            base_vy: BALL_BASE_VY,
            start_multiplier: BALL_START_MULTIPLIER,
            multiplier_step: BALL_MULTIPLIER_STEP,
            color_channel_min: COLOR_CHANNEL_MIN,
        }
    }
}

/// Audio preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,
    /// Sample played on paddle hits; a synthesized blip is used when missing
    pub hit_sound_path: PathBuf,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            muted: false,
            hit_sound_path: PathBuf::from(HIT_SOUND_FILE),
        }
    }
}

/// All start-up configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub screen_width: f32,
    pub screen_height: f32,
    /// Ticks (and frames) per second
    pub tick_rate: u32,
    pub paddle: PaddleSettings,
    pub ball: BallSettings,
    /// Score step between extra balls
    pub spawn_interval: u32,
    pub high_score_path: PathBuf,
    pub audio: AudioSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,
            paddle: PaddleSettings::default(),
            ball: BallSettings::default(),
            spawn_interval: SPAWN_INTERVAL,
            high_score_path: PathBuf::from(HIGH_SCORE_FILE),
            audio: AudioSettings::default(),
        }
    }
}

impl Settings {
    /// Wall-clock length of one tick
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }

    /// Paddle's fixed top edge
    pub fn paddle_y(&self) -> f32 {
        self.screen_height - self.paddle.y_offset
    }

    /// Rightmost legal paddle x
    pub fn paddle_max_x(&self) -> f32 {
        (self.screen_width - self.paddle.width).max(0.0)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::validated)
    }

    /// Load settings from `settings.json` in the working directory
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No {} found, using default settings", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}; using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace values the game cannot run with
    pub fn validated(mut self) -> Self {
        let defaults = Settings::default();

        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            log::warn!(
                "Screen size {}x{} is invalid, using {}x{}",
                self.screen_width,
                self.screen_height,
                defaults.screen_width,
                defaults.screen_height
            );
            self.screen_width = defaults.screen_width;
            self.screen_height = defaults.screen_height;
        }
        if self.tick_rate == 0 {
            log::warn!("tick_rate must be positive, using {}", defaults.tick_rate);
            self.tick_rate = defaults.tick_rate;
        }
        if self.spawn_interval == 0 {
            log::warn!(
                "spawn_interval must be positive, using {}",
                defaults.spawn_interval
            );
            self.spawn_interval = defaults.spawn_interval;
        }
        if !(self.paddle.width > 0.0 && self.paddle.width <= self.screen_width) {
            let width = defaults.paddle.width.min(self.screen_width);
            log::warn!("Paddle width {} does not fit, using {}", self.paddle.width, width);
            self.paddle.width = width;
        }
        if !(self.paddle.speed >= 0.0) {
            self.paddle.speed = defaults.paddle.speed;
        }
        if !(self.ball.radius > 0.0) {
            log::warn!("Ball radius must be positive, using {}", defaults.ball.radius);
            self.ball.radius = defaults.ball.radius;
        }
        if !(self.ball.multiplier_step >= 0.0) {
            // A negative step would let balls slow down on hits
            self.ball.multiplier_step = defaults.ball.multiplier_step;
        }
        self.audio.master_volume = self.audio.master_volume.clamp(0.0, 1.0);

        self
    }
}
