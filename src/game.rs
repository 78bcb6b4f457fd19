//! Game orchestrator
//!
//! Owns the session and its collaborators. Each frame it turns the collected
//! input into one simulation tick, hands the tick's events to the audio sink
//! and the score store, then asks the render sink to draw.

use crate::audio::{AudioSink, SoundEffect};
use crate::highscores::{ScoreStore, load_or_default};
use crate::renderer::RenderSink;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Discrete input events, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    /// Primary pointer button pressed
    PrimaryPress,
    /// Start key (Space) pressed
    StartKey,
}

/// Everything the input source reported for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left_held: bool,
    pub right_held: bool,
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn wants_start(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, InputEvent::PrimaryPress | InputEvent::StartKey))
    }

    pub fn wants_quit(&self) -> bool {
        self.events.contains(&InputEvent::Quit)
    }

    pub fn to_tick_input(&self) -> TickInput {
        TickInput {
            left: self.left_held,
            right: self.right_held,
            start: self.wants_start(),
        }
    }
}

/// Whether the main loop should keep going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Game instance holding the session and its collaborators
pub struct Game<S: ScoreStore, A: AudioSink> {
    state: GameState,
    store: S,
    audio: A,
}

impl<S: ScoreStore, A: AudioSink> Game<S, A> {
    /// Load the high score and open on the menu
    pub fn new(settings: &Settings, store: S, audio: A, seed: u64) -> Self {
        let high_score = load_or_default(&store);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(settings, seed, high_score),
            store,
            audio,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Run one tick and draw it
    ///
    /// A quit event still lets the tick and the draw complete.
    pub fn frame<R: RenderSink + ?Sized>(
        &mut self,
        input: &FrameInput,
        renderer: &mut R,
    ) -> LoopControl {
        tick(&mut self.state, &input.to_tick_input());
        self.dispatch_events();
        renderer.present(&self.state);

        if input.wants_quit() {
            log::info!("Quit requested");
            LoopControl::Quit
        } else {
            LoopControl::Continue
        }
    }

    /// Draw the current state without advancing it
    pub fn redraw<R: RenderSink + ?Sized>(&self, renderer: &mut R) {
        renderer.present(&self.state);
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::PaddleHit { .. } => self.audio.play(SoundEffect::PaddleHit),
                GameEvent::NewHighScore(score) => {
                    log::info!("New high score: {}", score);
                    if let Err(e) = self.store.save(score) {
                        log::error!("Failed to save high score {}: {}", score, e);
                    }
                }
                GameEvent::RoundStarted
                | GameEvent::BallMissed { .. }
                | GameEvent::BallSpawned { .. }
                | GameEvent::GameOver { .. } => {}
            }
        }
    }
}
