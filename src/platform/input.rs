//! Input collection
//!
//! winit delivers input as events; the game wants a per-frame snapshot of
//! held keys plus the discrete presses since the last frame.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use crate::game::{FrameInput, InputEvent};

/// Accumulates window events between frames
#[derive(Debug, Default)]
pub struct InputCollector {
    left_held: bool,
    right_held: bool,
    events: Vec<InputEvent>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&mut self, code: KeyCode, state: ElementState, repeat: bool) {
        let pressed = state == ElementState::Pressed;
        match code {
            KeyCode::ArrowLeft => self.left_held = pressed,
            KeyCode::ArrowRight => self.right_held = pressed,
            // Holding Space must not restart over and over
            KeyCode::Space if pressed && !repeat => self.events.push(InputEvent::StartKey),
            _ => {}
        }
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left && state == ElementState::Pressed {
            self.events.push(InputEvent::PrimaryPress);
        }
    }

    pub fn close_requested(&mut self) {
        self.events.push(InputEvent::Quit);
    }

    /// Key releases are not delivered to unfocused windows
    pub fn focus_lost(&mut self) {
        self.left_held = false;
        self.right_held = false;
    }

    /// Snapshot held keys and drain queued events
    pub fn take_frame(&mut self) -> FrameInput {
        FrameInput {
            left_held: self.left_held,
            right_held: self.right_held,
            events: std::mem::take(&mut self.events),
        }
    }
}
