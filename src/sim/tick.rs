//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session deterministically, one frame at
//! a time.

use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
    /// Start/restart (click or Space) pressed this frame
    pub start: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.start && matches!(state.phase, GamePhase::Menu | GamePhase::GameOver) {
        state.start_round();
        log::info!("Round started (high score {})", state.high_score);
    }

    // Menu and GameOver only wait for the start input
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    state
        .paddle
        .handle_input(input.left, input.right, state.settings.screen_width);
    let paddle = state.paddle.bounds();

    for ball in state.balls.iter_mut().filter(|b| b.active) {
        ball.step(&state.settings, &mut state.rng);

        if ball.collides_with_paddle(paddle, &state.settings, &mut state.rng) {
            state.score += 1;
            state.events.push(GameEvent::PaddleHit { ball_id: ball.id });
            log::debug!(
                "Ball {} hit paddle (score {}, multiplier {:.2})",
                ball.id,
                state.score,
                ball.speed_multiplier
            );
        }

        if ball.is_missed(&state.settings) {
            ball.active = false;
            state.events.push(GameEvent::BallMissed { ball_id: ball.id });
            log::debug!("Ball {} missed", ball.id);
        }
    }

    state.balls.retain(|b| b.active);

    if state.spawn_if_due() {
        log::info!(
            "Score {} reached, ball #{} joins",
            state.score,
            state.balls_spawned
        );
    }

    if state.balls.is_empty() {
        state.finish_round();
        log::info!(
            "Game over: score {}, high score {}",
            state.score,
            state.high_score
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::settings::Settings;

    const START: TickInput = TickInput {
        left: false,
        right: false,
        start: true,
    };

    /// Put the first ball just above the paddle, falling
    fn line_up_hit(state: &mut GameState) {
        let paddle = state.paddle.bounds();
        let ball = &mut state.balls[0];
        ball.pos = Vec2::new(paddle.x + paddle.width / 2.0, paddle.y - ball.radius + 1.0);
        ball.vel = Vec2::new(ball.vel.x, ball.vel.y.abs());
    }

    /// Send every ball below the floor
    fn drop_all(state: &mut GameState) {
        let below = state.settings.screen_height + 100.0;
        for ball in &mut state.balls {
            ball.pos.y = below;
        }
    }

    #[test]
    fn test_menu_waits_for_start() {
        let mut state = GameState::new(&Settings::default(), 12345, 0);
        assert_eq!(state.phase, GamePhase::Menu);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.balls.is_empty());
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &START);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls_spawned, 1);
        assert_eq!(state.score, 0);
        // The first Playing tick runs in the same frame
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.events[0], GameEvent::RoundStarted);
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut state = GameState::new(&Settings::default(), 12345, 0);
        tick(&mut state, &START);
        state.score = 5;
        tick(&mut state, &START);
        assert_eq!(state.score, 5);
        assert_eq!(state.balls_spawned, 1);
    }

    #[test]
    fn test_paddle_follows_input() {
        let mut state = GameState::new(&Settings::default(), 12345, 0);
        tick(&mut state, &START);
        let x = state.paddle.x;

        let left = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &left);
        assert_eq!(state.paddle.x, x - 10.0);
    }

    #[test]
    fn test_paddle_hit_scores() {
        let mut state = GameState::new(&Settings::default(), 12345, 0);
        tick(&mut state, &START);
        state.drain_events();

        line_up_hit(&mut state);
        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 1);
        assert!(state.balls[0].vel.y < 0.0);
        let id = state.balls[0].id;
        assert_eq!(state.drain_events(), vec![GameEvent::PaddleHit { ball_id: id }]);
    }

    #[test]
    fn test_twenty_hits_spawn_second_ball() {
        let mut state = GameState::new(&Settings::default(), 42, 0);
        tick(&mut state, &START);

        for _ in 0..20 {
            line_up_hit(&mut state);
            tick(&mut state, &TickInput::default());
        }

        assert_eq!(state.score, 20);
        assert_eq!(state.balls_spawned, 2);
        assert_eq!(state.balls.len(), 2);
        assert!(state.balls.iter().all(|b| b.active));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_missed_balls_are_pruned() {
        let mut state = GameState::new(&Settings::default(), 7, 0);
        tick(&mut state, &START);
        state.spawn_ball();
        assert_eq!(state.balls.len(), 2);

        state.balls[0].pos.y = 800.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_losing_all_balls_ends_round() {
        let mut state = GameState::new(&Settings::default(), 7, 10);
        tick(&mut state, &START);
        // Consistent with 37 points: the second ball joined at 20
        state.spawn_ball();
        state.score = 37;

        drop_all(&mut state);
        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.balls.is_empty());
        assert_eq!(state.high_score, 37);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::NewHighScore(37)));
        assert!(events.contains(&GameEvent::GameOver { score: 37 }));
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = GameState::new(&Settings::default(), 7, 0);
        tick(&mut state, &START);
        state.score = 3;
        state.paddle.x = 0.0;
        drop_all(&mut state);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        // Game over screen is static until start
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(&mut state, &START);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls_spawned, 1);
        assert_eq!(state.paddle.x, 340.0);
        assert_eq!(state.high_score, 3);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(&Settings::default(), 99999, 0);
        let mut state2 = GameState::new(&Settings::default(), 99999, 0);

        let inputs = [
            START,
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.balls, state2.balls);
        assert_eq!(state1.paddle, state2.paddle);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
    }
}
