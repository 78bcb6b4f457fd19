//! Scene building
//!
//! Pure function of the game state: no GPU, so it can be tested directly.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{GamePhase, GameState};

/// Font pixel size for overlay text
pub const TEXT_PIXEL: f32 = 4.0;
/// Triangles per ball
pub const CIRCLE_SEGMENTS: u32 = 48;

/// Where a line of text is placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Top-left corner at this point
    TopLeft(Vec2),
    /// Centered horizontally on the screen, vertical center at this y
    CenterY(f32),
}

/// One line of overlay text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub color: [f32; 4],
    pub anchor: Anchor,
}

impl TextLine {
    fn centered(text: impl Into<String>, color: [f32; 4], y: f32) -> Self {
        Self {
            text: text.into(),
            color,
            anchor: Anchor::CenterY(y),
        }
    }

    fn at(text: impl Into<String>, color: [f32; 4], x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            color,
            anchor: Anchor::TopLeft(Vec2::new(x, y)),
        }
    }

    /// Top-left corner on a screen of the given width
    pub fn origin(&self, screen_width: f32) -> Vec2 {
        match self.anchor {
            Anchor::TopLeft(p) => p,
            Anchor::CenterY(y) => Vec2::new(
                (screen_width - shapes::text_width(&self.text, TEXT_PIXEL)) / 2.0,
                y - shapes::text_height(TEXT_PIXEL) / 2.0,
            ),
        }
    }
}

/// Text overlays for the current phase
pub fn overlay(state: &GameState) -> Vec<TextLine> {
    let mid = state.settings.screen_height / 2.0;
    match state.phase {
        GamePhase::Menu => vec![
            TextLine::centered(" Bouncing Ball Game ", colors::TEXT, mid - 80.0),
            TextLine::centered(
                "Move the paddle with <-- and -->",
                colors::TEXT_ACCENT,
                mid - 20.0,
            ),
            TextLine::centered("Click or Press SPACE to Start", colors::TEXT_ACCENT, mid + 40.0),
        ],
        GamePhase::Playing => vec![
            TextLine::at(format!("Score: {}", state.score), colors::TEXT, 20.0, 20.0),
            TextLine::at(
                format!("High Score: {}", state.high_score),
                colors::TEXT_ACCENT,
                20.0,
                60.0,
            ),
        ],
        GamePhase::GameOver => vec![
            TextLine::centered(" Game Over ", colors::TEXT, mid - 80.0),
            TextLine::centered(format!("Score: {}", state.score), colors::TEXT, mid - 20.0),
            TextLine::centered(
                format!("High Score: {}", state.high_score),
                colors::TEXT_ACCENT,
                mid + 40.0,
            ),
            TextLine::centered(
                "Click or Press SPACE to Restart",
                colors::TEXT_ACCENT,
                mid + 100.0,
            ),
        ],
    }
}

/// All triangles for one frame, in screen pixels
pub fn build(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    if state.phase == GamePhase::Playing {
        for ball in state.balls.iter().filter(|b| b.active) {
            vertices.extend(shapes::circle(
                ball.pos,
                ball.radius,
                ball.color.to_rgba(),
                CIRCLE_SEGMENTS,
            ));
        }
        vertices.extend(shapes::rect(state.paddle.bounds(), colors::PADDLE));
    }

    for line in overlay(state) {
        let origin = line.origin(state.settings.screen_width);
        vertices.extend(shapes::text(origin, &line.text, TEXT_PIXEL, line.color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{TickInput, tick};

    fn texts(state: &GameState) -> Vec<String> {
        overlay(state).into_iter().map(|l| l.text).collect()
    }

    #[test]
    fn test_menu_overlay() {
        let state = GameState::new(&Settings::default(), 1, 12);
        assert_eq!(
            texts(&state),
            vec![
                " Bouncing Ball Game ",
                "Move the paddle with <-- and -->",
                "Click or Press SPACE to Start",
            ]
        );
    }

    #[test]
    fn test_playing_overlay_and_shapes() {
        let mut state = GameState::new(&Settings::default(), 1, 12);
        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
        );
        state.score = 3;
        assert_eq!(texts(&state), vec!["Score: 3", "High Score: 12"]);

        let vertices = build(&state);
        let ball_color = state.balls[0].color.to_rgba();
        let ball_vertices = vertices.iter().filter(|v| v.color == ball_color).count();
        assert_eq!(ball_vertices, (CIRCLE_SEGMENTS * 3) as usize);
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = GameState::new(&Settings::default(), 1, 12);
        state.start_round();
        state.score = 40;
        state.finish_round();
        assert_eq!(
            texts(&state),
            vec![
                " Game Over ",
                "Score: 40",
                "High Score: 40",
                "Click or Press SPACE to Restart",
            ]
        );
        // No balls or paddle off the playing screen
        let vertices = build(&state);
        assert!(vertices.iter().all(|v| v.color == colors::TEXT || v.color == colors::TEXT_ACCENT));
    }

    #[test]
    fn test_centered_lines_fit_on_screen() {
        let settings = Settings::default();
        let state = GameState::new(&settings, 1, 0);
        for line in overlay(&state) {
            let origin = line.origin(settings.screen_width);
            assert!(origin.x >= 0.0, "{:?} overflows", line.text);
            let center = origin.x + shapes::text_width(&line.text, TEXT_PIXEL) / 2.0;
            assert!((center - settings.screen_width / 2.0).abs() < 1e-3);
        }
    }
}
