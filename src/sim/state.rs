//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{Rect, below_floor, touches_ceiling, touches_side_wall};
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Title screen, waiting for the start input
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Every ball was lost; waiting for the restart input
    GameOver,
}

/// Things that happened during a tick, for collaborators outside the sim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new round began
    RoundStarted,
    /// A ball bounced off the paddle (hit sound cue)
    PaddleHit { ball_id: u32 },
    /// A ball fell below the floor
    BallMissed { ball_id: u32 },
    /// The score crossed a spawn threshold
    BallSpawned { ball_id: u32 },
    /// The round ended with this score
    GameOver { score: u32 },
    /// The round beat the stored high score; it should be persisted
    NewHighScore(u32),
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const TEAL: Rgb = Rgb(0, 255, 180);

    /// Each channel drawn uniformly from [min, 255]
    pub fn random<R: Rng>(rng: &mut R, min: u8) -> Self {
        Rgb(
            rng.random_range(min..=255),
            rng.random_range(min..=255),
            rng.random_range(min..=255),
        )
    }

    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            1.0,
        ]
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    /// Base velocity in pixels per tick, scaled by `speed_multiplier`
    pub vel: Vec2,
    pub radius: f32,
    pub speed_multiplier: f32,
    pub color: Rgb,
    pub active: bool,
}

impl Ball {
    /// Create a ball already reset to its starting state
    pub fn new<R: Rng>(id: u32, settings: &Settings, rng: &mut R) -> Self {
        let mut ball = Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: settings.ball.radius,
            speed_multiplier: settings.ball.start_multiplier,
            color: Rgb::WHITE,
            active: true,
        };
        ball.reset(settings, rng);
        ball
    }

    /// Back to screen center with a random diagonal heading and color
    pub fn reset<R: Rng>(&mut self, settings: &Settings, rng: &mut R) {
        let tuning = &settings.ball;
        self.pos = Vec2::new(settings.screen_width / 2.0, settings.screen_height / 2.0);
        let vx = if rng.random_bool(0.5) {
            -tuning.base_vx
        } else {
            tuning.base_vx
        };
        let vy = if rng.random_bool(0.5) {
            -tuning.base_vy
        } else {
            tuning.base_vy
        };
        self.vel = Vec2::new(vx, vy);
        self.speed_multiplier = tuning.start_multiplier;
        self.color = Rgb::random(rng, tuning.color_channel_min);
        self.active = true;
    }

    /// Advance one tick and bounce off the side walls and ceiling
    pub fn step<R: Rng>(&mut self, settings: &Settings, rng: &mut R) {
        self.pos += self.vel * self.speed_multiplier;

        if touches_side_wall(self.pos, self.radius, settings.screen_width) {
            self.vel.x = -self.vel.x;
            self.color = Rgb::random(rng, settings.ball.color_channel_min);
        }

        if touches_ceiling(self.pos, self.radius) {
            self.vel.y = -self.vel.y;
            self.color = Rgb::random(rng, settings.ball.color_channel_min);
        }
    }

    /// Bounce off the paddle if the ball's bottom point is inside it
    ///
    /// Only a ball moving downward can hit, so a ball that is still inside
    /// the paddle after bouncing is not hit again on the next tick. On a hit
    /// the ball speeds up and changes color; the caller raises the hit cue.
    pub fn collides_with_paddle<R: Rng>(
        &mut self,
        paddle: Rect,
        settings: &Settings,
        rng: &mut R,
    ) -> bool {
        let bottom_point = Vec2::new(self.pos.x, self.pos.y + self.radius);
        if self.vel.y > 0.0 && paddle.contains(bottom_point) {
            self.vel.y = -self.vel.y;
            self.color = Rgb::random(rng, settings.ball.color_channel_min);
            self.speed_multiplier += settings.ball.multiplier_step;
            return true;
        }
        false
    }

    /// True once the ball's top edge is below the screen
    pub fn is_missed(&self, settings: &Settings) -> bool {
        below_floor(self.pos, self.radius, settings.screen_height)
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub x: f32,
    /// Fixed top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per tick
    pub speed: f32,
}

impl Paddle {
    /// Centered horizontally, `y_offset` above the bottom edge
    pub fn new(settings: &Settings) -> Self {
        let tuning = &settings.paddle;
        Self {
            x: ((settings.screen_width - tuning.width) / 2.0).floor(),
            y: settings.paddle_y(),
            width: tuning.width,
            height: tuning.height,
            speed: tuning.speed,
        }
    }

    /// Move from held keys; left and right are checked independently
    pub fn handle_input(&mut self, left_held: bool, right_held: bool, screen_width: f32) {
        let max_x = (screen_width - self.width).max(0.0);
        if left_held && self.x > 0.0 {
            self.x = (self.x - self.speed).max(0.0);
        }
        if right_held && self.x < max_x {
            self.x = (self.x + self.speed).min(max_x);
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The whole session: phase, entities, scoring and the RNG that drives them
#[derive(Debug, Clone)]
pub struct GameState {
    /// Screen size and tuning (fixed for the session)
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub paddle: Paddle,
    /// Active balls in spawn order
    pub balls: Vec<Ball>,
    pub score: u32,
    /// Balls introduced this round, including the first one
    pub balls_spawned: u32,
    /// Best score across sessions
    pub high_score: u32,
    /// Simulation tick counter (Playing ticks only)
    pub time_ticks: u64,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// New session on the menu screen
    pub fn new(settings: &Settings, seed: u64, high_score: u32) -> Self {
        Self {
            settings: settings.clone(),
            seed,
            phase: GamePhase::Menu,
            paddle: Paddle::new(settings),
            balls: Vec::new(),
            score: 0,
            balls_spawned: 0,
            high_score,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new ball ID
    fn next_ball_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a freshly reset ball and count it as spawned
    pub fn spawn_ball(&mut self) -> u32 {
        let id = self.next_ball_id();
        let ball = Ball::new(id, &self.settings, &mut self.rng);
        self.balls.push(ball);
        self.balls_spawned += 1;
        id
    }

    /// Reset the round: centered paddle, one ball, zero score
    pub fn start_round(&mut self) {
        self.balls.clear();
        self.paddle = Paddle::new(&self.settings);
        self.score = 0;
        self.balls_spawned = 0;
        self.spawn_ball();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::RoundStarted);
    }

    /// Spawn one ball if the score reached the next threshold
    ///
    /// Runs once per tick and spawns at most one ball, even if the score
    /// jumped past several thresholds.
    pub fn spawn_if_due(&mut self) -> bool {
        let threshold = self.balls_spawned.saturating_mul(self.settings.spawn_interval);
        if self.score >= threshold {
            let ball_id = self.spawn_ball();
            self.events.push(GameEvent::BallSpawned { ball_id });
            return true;
        }
        false
    }

    /// Playing -> GameOver, recording a new high score if beaten
    pub fn finish_round(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.events.push(GameEvent::NewHighScore(self.score));
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
    }

    /// Take all events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
