//! Native window and event loop

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use super::input::InputCollector;
use super::pacer::FramePacer;
use crate::audio::AudioSink;
use crate::game::{Game, LoopControl};
use crate::highscores::ScoreStore;
use crate::renderer::RenderState;
use crate::settings::Settings;

/// winit application driving one `Game`
pub struct App<S: ScoreStore, A: AudioSink> {
    settings: Settings,
    game: Game<S, A>,
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    input: InputCollector,
    pacer: FramePacer,
    /// Start-up failure to report once the loop exits
    error: Option<anyhow::Error>,
}

impl<S: ScoreStore, A: AudioSink> App<S, A> {
    pub fn new(settings: Settings, game: Game<S, A>) -> Self {
        let pacer = FramePacer::new(settings.tick_period(), Instant::now());
        Self {
            settings,
            game,
            window: None,
            renderer: None,
            input: InputCollector::new(),
            pacer,
            error: None,
        }
    }

    /// Consume the app, surfacing any start-up failure
    pub fn finish(self) -> anyhow::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.window_title.clone())
            .with_inner_size(LogicalSize::new(
                self.settings.screen_width as f64,
                self.settings.screen_height as f64,
            ))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create surface")?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("Failed to get adapter")?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let renderer = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            (self.settings.screen_width, self.settings.screen_height),
        ))?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }
}

impl<S: ScoreStore, A: AudioSink> ApplicationHandler for App<S, A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_graphics(event_loop) {
            log::error!("Graphics initialization failed: {:#}", e);
            self.error = Some(e);
            event_loop.exit();
            return;
        }
        log::info!("Bouncing Ball running!");
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.input.close_requested(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input.key(code, event.state, event.repeat);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.mouse_button(button, state);
            }
            WindowEvent::Focused(false) => self.input.focus_lost(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    self.game.redraw(renderer);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if let Some(renderer) = &mut self.renderer {
            if self.pacer.is_due(now) {
                let input = self.input.take_frame();
                let control = self.game.frame(&input, renderer);
                self.pacer.advance(now);
                if control == LoopControl::Quit {
                    event_loop.exit();
                    return;
                }
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
    }
}
