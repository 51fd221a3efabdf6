//! Noise Grid - a lattice of line segments swaying through a 4D noise field.
//!
//! Drag with the left mouse button to orbit, scroll to zoom.
//! Tab hides the control panel, F toggles fullscreen, Esc quits.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowId},
};

use noise_grid::cli::Args;
use noise_grid::fps::FpsTracker;
use noise_grid::gui::{control_panel, GuiLayer, PanelAction};
use noise_grid::params::{CameraConfig, GridParams, RenderConfig};
use noise_grid::rendering::RenderSystem;
use noise_grid::settings;
use noise_grid::sketch::{KeyAction, Sketch};

/// Wheel lines per pixel of touchpad scroll
const PIXELS_PER_LINE: f32 = 50.0;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    gui: Option<GuiLayer>,

    // Sketch state
    sketch: Sketch,
    fps: FpsTracker,

    // Configuration
    render_config: RenderConfig,
    settings_path: PathBuf,
    start_fullscreen: bool,

    // Time tracking
    start_time: Instant,
}

impl App {
    fn new(args: &Args, params: GridParams) -> Self {
        let mut sketch = Sketch::new(params, CameraConfig::default(), args.seed);
        sketch.show_gui = !args.hide_gui;

        Self {
            window: None,
            render_system: None,
            gui: None,
            sketch,
            fps: FpsTracker::new(),
            render_config: args.render_config(),
            settings_path: args.settings.clone(),
            start_fullscreen: args.fullscreen,
            start_time: Instant::now(),
        }
    }

    fn save_settings(&self) {
        match settings::save(&self.settings_path, &self.sketch.params) {
            Ok(()) => log::info!("Saved settings to {}", self.settings_path.display()),
            Err(e) => log::error!("{} ({})", e, self.settings_path.display()),
        }
    }

    fn exit(&self, event_loop: &ActiveEventLoop) {
        self.save_settings();
        event_loop.exit();
    }

    fn toggle_fullscreen(&self) {
        if let Some(window) = &self.window {
            if window.fullscreen().is_some() {
                window.set_fullscreen(None);
            } else {
                window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            }
        }
    }

    fn apply_panel_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::None => {}
            PanelAction::Save => self.save_settings(),
            PanelAction::Load => match settings::load(&self.settings_path) {
                Ok(params) => {
                    log::info!("Loaded settings from {}", self.settings_path.display());
                    self.sketch.params = params;
                }
                Err(e) => log::warn!("{} ({})", e, self.settings_path.display()),
            },
            PanelAction::Reset => {
                self.sketch.params = GridParams::default();
                self.sketch.camera.reset();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let mut window_attributes = Window::default_attributes()
            .with_title("Noise Grid")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));
        if self.start_fullscreen {
            window_attributes =
                window_attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.render_config,
        )) {
            Ok(render_system) => render_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let gui = GuiLayer::new(
            &render_system.device,
            render_system.surface_format(),
            &window,
        );

        log::info!("Noise Grid is running (Tab: panel, F: fullscreen, Esc: quit)");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.gui = Some(gui);
        self.start_time = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let consumed = match (&mut self.gui, &self.window) {
            (Some(gui), Some(window)) => gui.on_window_event(window, &event),
            _ => false,
        };
        let gui_wants_pointer = self.sketch.show_gui
            && self.gui.as_ref().is_some_and(|gui| gui.wants_pointer());

        match event {
            WindowEvent::CloseRequested => self.exit(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } if !consumed => match self.sketch.handle_key(code) {
                KeyAction::None => {}
                KeyAction::ToggleFullscreen => self.toggle_fullscreen(),
                KeyAction::Exit => self.exit(event_loop),
            },
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let pressed = state == ElementState::Pressed;
                if !pressed || !gui_wants_pointer {
                    self.sketch.camera.set_dragging(pressed);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.sketch.camera.cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } if !gui_wants_pointer => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
                };
                self.sketch.camera.zoom(lines);
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

impl App {
    /// Update the sketch and render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(render_system), Some(gui)) =
            (&self.window, &mut self.render_system, &mut self.gui)
        else {
            return;
        };

        let time_s = self.start_time.elapsed().as_secs_f32();

        // Regenerate the grid from the current parameters
        let vertices = self.sketch.update(time_s);
        render_system.update_grid(vertices);

        let view_proj = self.sketch.camera.view_proj(render_system.aspect_ratio());
        render_system.update_view_proj(view_proj);

        let fps = self.fps.current_fps();
        let show_panel = self.sketch.show_gui;
        let panel_width = self.render_config.panel_width;
        let params = &mut self.sketch.params;
        let mut action = PanelAction::None;
        let frame = gui.run(window, |ctx| {
            action = control_panel(ctx, params, fps, show_panel, panel_width);
        });

        match render_system.render(Some((gui, &frame))) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_system.reconfigure()
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        self.fps.record_frame();
        self.apply_panel_action(action);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = settings::load_or_default(&args.settings);

    let mut app = App::new(&args, params);
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;

    Ok(())
}
