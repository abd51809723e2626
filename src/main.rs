//! Vector Balls entry point
//!
//! Opens the window, runs the fixed-step game loop and draws each frame.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use vector_balls::consts::{SIM_DT_MS, WORLD_HEIGHT, WORLD_WIDTH};
use vector_balls::platform::{FrameClock, InputState};
use vector_balls::renderer::{RenderState, build_scene};
use vector_balls::sim::{GameState, tick};
use vector_balls::{AppError, Settings};

struct App {
    state: GameState,
    input: InputState,
    clock: FrameClock,
    settings: Settings,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    /// Fatal error raised inside the event loop
    error: Option<AppError>,
}

impl App {
    fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(),
            input: InputState::new(),
            clock: FrameClock::new(Instant::now()),
            settings,
            window: None,
            render_state: None,
            error: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let attrs = Window::default_attributes()
            .with_title("Bouncy Vector Ball - Amiga Style (3D)")
            .with_inner_size(LogicalSize::new(WORLD_WIDTH as f64, WORLD_HEIGHT as f64))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(attrs)?);
        if self.settings.hide_cursor {
            window.set_cursor_visible(false);
        }

        let render_state = pollster::block_on(RenderState::new(window.clone(), &self.settings))?;
        self.render_state = Some(render_state);
        self.window = Some(window);
        log::info!("Vector Balls running!");
        Ok(())
    }

    /// Run the simulation ticks owed since the last frame
    fn update(&mut self) {
        let steps = self.clock.advance(Instant::now());
        for _ in 0..steps {
            let input = self.input.tick_input();
            tick(&mut self.state, &input, SIM_DT_MS);
            // Clear one-shot inputs after processing
            self.input.clear_one_shots();
            if self.state.is_terminated() {
                break;
            }
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_state) = &mut self.render_state else {
            return;
        };
        let vertices = build_scene(&self.state, &self.settings, self.clock.fps());
        match render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    fn exit(&self, event_loop: &ActiveEventLoop) {
        log::info!("Exiting, final score {}", self.state.score);
        event_loop.exit();
    }

    /// Cursor x in physical pixels to play-area pixels
    fn world_x(&self, physical_x: f64) -> f32 {
        let width = self
            .window
            .as_ref()
            .map(|w| w.inner_size().width)
            .unwrap_or(0)
            .max(1);
        (physical_x / width as f64) as f32 * WORLD_WIDTH
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.state.terminate();
                self.exit(event_loop);
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.input.release_all(),
            WindowEvent::CursorMoved { position, .. } => {
                let x = self.world_x(position.x);
                self.input.pointer_moved(x);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input
                    .mouse_button(button, state == ElementState::Pressed);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.key(
                    event.physical_key,
                    &event.logical_key,
                    event.state == ElementState::Pressed,
                    event.repeat,
                );
            }
            WindowEvent::RedrawRequested => {
                self.update();
                if self.state.is_terminated() {
                    self.exit(event_loop);
                    return;
                }
                self.render(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        if self.clock.frame_due(Instant::now(), self.settings.frame_interval()) {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_frame()));
    }
}

fn run() -> Result<(), AppError> {
    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::load(&PathBuf::from(path))?,
        None => Settings::default(),
    };
    log::debug!("Settings: {:?}", settings);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Vector Balls starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
