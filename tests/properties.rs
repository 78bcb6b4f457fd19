use std::collections::HashMap;

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use bouncing_ball::Settings;
use bouncing_ball::sim::{Ball, GameState, Paddle, TickInput, tick};

fn tick_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), prop::bool::weighted(0.02)).prop_map(|(left, right, start)| {
        TickInput { left, right, start }
    })
}

proptest! {
    #[test]
    fn paddle_stays_on_screen(
        speed in 0.0f32..60.0,
        width in 10.0f32..800.0,
        moves in prop::collection::vec((any::<bool>(), any::<bool>()), 0..300),
    ) {
        let mut settings = Settings::default();
        settings.paddle.speed = speed;
        settings.paddle.width = width;
        let mut paddle = Paddle::new(&settings);

        for (left, right) in moves {
            paddle.handle_input(left, right, settings.screen_width);
            prop_assert!(paddle.x >= 0.0);
            prop_assert!(paddle.x <= settings.screen_width - paddle.width);
        }
    }

    #[test]
    fn bounds_are_idempotent(x in 0.0f32..680.0) {
        let mut paddle = Paddle::new(&Settings::default());
        paddle.x = x;
        prop_assert_eq!(paddle.bounds(), paddle.bounds());
    }

    #[test]
    fn no_paddle_hit_while_rising(
        x in -100.0f32..900.0,
        y in -100.0f32..700.0,
        vy in -10.0f32..=0.0,
        seed in any::<u64>(),
    ) {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::new(&settings);
        let mut ball = Ball::new(1, &settings, &mut rng);
        ball.pos = Vec2::new(x, y);
        ball.vel.y = vy;
        let before = ball.clone();

        prop_assert!(!ball.collides_with_paddle(paddle.bounds(), &settings, &mut rng));
        prop_assert_eq!(ball, before);
    }

    #[test]
    fn side_walls_reflect(
        offset in 0.0f32..30.0,
        right_wall in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ball = Ball::new(1, &settings, &mut rng);
        // Touching the wall and still heading into it
        if right_wall {
            ball.pos.x = settings.screen_width - ball.radius + offset;
            ball.vel.x = ball.vel.x.abs();
        } else {
            ball.pos.x = ball.radius - offset;
            ball.vel.x = -ball.vel.x.abs();
        }
        ball.pos.y = 300.0;
        let vx = ball.vel.x;

        ball.step(&settings, &mut rng);
        prop_assert_eq!(ball.vel.x, -vx);
    }

    #[test]
    fn speed_multiplier_never_drops(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..600),
    ) {
        let mut state = GameState::new(&Settings::default(), seed, 0);
        let mut seen: HashMap<u32, f32> = HashMap::new();

        // Ball IDs are never reused, even across rounds
        for input in &inputs {
            tick(&mut state, input);
            for ball in &state.balls {
                if let Some(previous) = seen.insert(ball.id, ball.speed_multiplier) {
                    prop_assert!(ball.speed_multiplier >= previous);
                }
            }
            prop_assert!(state.balls.iter().all(|b| b.active));
        }
    }

    #[test]
    fn same_seed_same_game(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..300),
    ) {
        let settings = Settings::default();
        let mut a = GameState::new(&settings, seed, 0);
        let mut b = GameState::new(&settings, seed, 0);
        for input in &inputs {
            tick(&mut a, input);
            tick(&mut b, input);
        }
        prop_assert_eq!(a.balls, b.balls);
        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.phase, b.phase);
    }
}
