//! Window front end
//!
//! Drives the GPU variant through winit's [`ApplicationHandler`]: the window
//! and render system are created on resume, key presses become commands,
//! rotation keys act for as long as they are held, and every redraw advances
//! the state by one frame.

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use polyhedra_core::ShapeCatalog;
use polyhedra_input::{Command, Controls, HeldRotations, InteractionState};

use crate::config::WindowConfig;
use crate::error::AppError;
use crate::input::InputMapper;
use crate::systems::{RenderSystem, WindowError, WindowSystem};

/// Main application state for the window variant
pub struct WindowApp {
    config: WindowConfig,
    controls: Controls,
    catalog: ShapeCatalog,
    state: InteractionState,
    held: HeldRotations,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    /// First fatal error, reported once the event loop returns
    error: Option<AppError>,
}

impl WindowApp {
    pub fn new(config: WindowConfig, controls: Controls, catalog: ShapeCatalog) -> Self {
        Self {
            config,
            controls,
            catalog,
            state: InteractionState::new(),
            held: HeldRotations::empty(),
            window: None,
            render: None,
            error: None,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    /// Route one key event; returns `false` on quit
    pub fn handle_key(&mut self, key: winit::keyboard::KeyCode, state: ElementState, repeat: bool) -> bool {
        if let Some((plane, direction)) = InputMapper::window_rotation(key) {
            self.held.update(plane, direction, state == ElementState::Pressed);
            return true;
        }
        if repeat {
            return true;
        }
        match InputMapper::map_window(key, state) {
            Some(Command::Quit) => false,
            Some(command) => {
                self.state.apply(command, &self.controls, self.catalog.len());
                true
            }
            None => true,
        }
    }

    /// Per-frame state update: held keys, then auto-rotation
    pub fn advance(&mut self) {
        self.held.apply(&mut self.state, &self.controls);
        self.state.tick(&self.controls);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.advance();

        let index = self.state.shape_index;
        let Some(shape) = self.catalog.get(index) else {
            return;
        };

        if let Some(window) = &mut self.window {
            window.update_title(shape, &self.state);
        }

        let Some(render) = &mut self.render else {
            return;
        };
        match render.render_frame(index, shape, &self.state) {
            Ok(()) => {}
            Err(e) if e.is_transient() => log::warn!("Skipping frame: {}", e),
            Err(e) => self.fail(event_loop, e.into()),
        }
    }
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let render = match RenderSystem::new(window.window().clone(), &self.config) {
            Ok(render) => render,
            Err(e) => return self.fail(event_loop, e.into()),
        };

        log::info!(
            "Window viewer ready: {} shapes, surface {:?}",
            self.catalog.len(),
            render.size()
        );

        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                // Releases are not delivered while unfocused
                self.held = HeldRotations::empty();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if !self.handle_key(key, event.state, event.repeat) {
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open the window and run until it closes
pub fn run_window(
    config: WindowConfig,
    controls: Controls,
    catalog: ShapeCatalog,
) -> Result<(), AppError> {
    let event_loop = EventLoop::new().map_err(|e| WindowError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = WindowApp::new(config, controls, catalog);
    event_loop
        .run_app(&mut app)
        .map_err(|e| WindowError::EventLoop(e.to_string()))?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
