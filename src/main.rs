use anyhow::{anyhow, Context, Result};
use glam::Vec2;
use glutin::{
    config::ConfigTemplateBuilder,
    context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version},
    display::{GetGlDisplay, GlDisplay},
    prelude::*,
    surface::{Surface, SwapInterval, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::{debug, error, info, warn};
use raw_window_handle::HasRawWindowHandle;
use simple_logger::SimpleLogger;
use std::{ffi::CString, num::NonZeroU32, time::Instant};
use winit::{
    dpi::LogicalSize,
    event::{DeviceEvent, Event, KeyEvent, WindowEvent},
    event_loop::{EventLoop, EventLoopBuilder},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowBuilder},
};

use eyeball_viewer::{
    config::{core::CONFIG_FILE_NAME, ViewerConfig},
    player::{PlayerInput, SimulationState},
    render::{Model, RenderPipeline, ShaderProgram},
    scene::{alarm, compose_frame, FrameContext},
};

/// Longest step fed to the simulation, so a stall does not teleport the camera.
const MAX_FRAME_TIME: f32 = 0.1;

// Field order matters: GL resources must drop before the context and window.
struct App {
    pipeline: Option<RenderPipeline>,
    state: SimulationState,
    input: PlayerInput,
    config: ViewerConfig,
    started: Instant,
    last_frame: Instant,
    siren: bool,
    focused: bool,
    gl_surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    window: Window,
}

impl App {
    fn new(config: ViewerConfig) -> Result<(Self, EventLoop<()>)> {
        info!("Initializing viewer...");

        let event_loop = EventLoopBuilder::new().build()?;
        let window_builder = WindowBuilder::new()
            .with_title(config.render.title.as_str())
            .with_inner_size(LogicalSize::new(config.render.width, config.render.height));

        let template = ConfigTemplateBuilder::new().with_depth_size(24);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |configs| {
                // The picker must return a config; glutin fails `build` with
                // `BadConfig` before calling it when nothing matches.
                configs
                    .reduce(|accum, config| {
                        if config.num_samples() > accum.num_samples() {
                            config
                        } else {
                            accum
                        }
                    })
                    .expect("find_configs yields at least one config")
            })
            .map_err(|e| anyhow!("Failed to create window: {}", e))?;
        let window = window.context("Display builder returned no window")?;
        let raw_window_handle = window.raw_window_handle();

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));

        let gl_display = gl_config.display();
        let not_current = unsafe {
            gl_display
                .create_context(&gl_config, &context_attributes)
                .context("Failed to create OpenGL 3.3 core context")?
        };

        let attrs = window.build_surface_attributes(<_>::default());
        let gl_surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &attrs)
                .context("Failed to create GL surface")?
        };
        let gl_context = not_current
            .make_current(&gl_surface)
            .context("Failed to make context current")?;

        gl::load_with(|symbol| match CString::new(symbol) {
            Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()) as *const _,
            Err(_) => std::ptr::null(),
        });

        if config.render.vsync {
            if let Err(e) = gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN)) {
                warn!("Could not enable vsync: {}", e);
            }
        }

        let shader = ShaderProgram::from_files(&config.scene.vertex_shader, &config.scene.fragment_shader)
            .context("Failed to load shader program")?;

        let model = match Model::load(&config.scene.model_path) {
            Ok(model) => model,
            Err(e) if config.scene.abort_on_model_error => {
                return Err(e).context("Failed to load model");
            }
            Err(e) => {
                error!("Failed to load model {:?}: {}", config.scene.model_path, e);
                Model::placeholder()
            }
        };

        let pipeline = RenderPipeline::new(shader, model, &config.scene, config.render.clear_color);
        let mut state = SimulationState::new(&config.gameplay, &config.render, &config.scene);

        let size = window.inner_size();
        pipeline.resize(size.width, size.height);
        state.camera.resize(size.width, size.height);

        let now = Instant::now();
        let app = Self {
            pipeline: Some(pipeline),
            state,
            input: PlayerInput::default(),
            config,
            started: now,
            last_frame: now,
            siren: false,
            focused: true,
            gl_surface,
            gl_context,
            window,
        };
        app.capture_cursor();

        info!("Viewer ready");
        Ok((app, event_loop))
    }

    fn capture_cursor(&self) {
        let grabbed = self
            .window
            .set_cursor_grab(CursorGrabMode::Confined)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Locked));
        if let Err(e) = grabbed {
            warn!("Could not grab cursor: {}", e);
        }
        self.window.set_cursor_visible(false);
    }

    /// Returns `Ok(true)` when the viewer should exit.
    fn handle_window_event(&mut self, event: WindowEvent) -> Result<bool> {
        match event {
            WindowEvent::CloseRequested => return Ok(true),
            WindowEvent::Resized(size) => {
                if let (Some(width), Some(height)) =
                    (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                {
                    self.gl_surface.resize(&self.gl_context, width, height);
                    if let Some(pipeline) = &self.pipeline {
                        pipeline.resize(size.width, size.height);
                    }
                    self.state.camera.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => self.input.handle_key(code, state.is_pressed()),
            WindowEvent::Focused(focused) => {
                self.focused = focused;
                self.input.release_all();
                if focused {
                    self.capture_cursor();
                }
            }
            WindowEvent::RedrawRequested => self.update()?,
            _ => {}
        }
        Ok(self.input.wants_quit())
    }

    /// Mouse look from raw device motion, ignored while unfocused.
    fn handle_device_event(&mut self, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if self.focused {
                self.input.handle_mouse_motion(Vec2::new(dx as f32, dy as f32));
            }
        }
    }

    fn update(&mut self) -> Result<()> {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32().min(MAX_FRAME_TIME);
        self.last_frame = now;

        self.state.update(&mut self.input, delta_time);

        let camera = &self.state.camera;
        let frame = FrameContext {
            camera_position: camera.position,
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            time: now.duration_since(self.started).as_secs_f64(),
        };

        let scene = &self.config.scene;
        let siren = alarm::is_triggered(frame.camera_position, scene.table_position, scene.alarm_trigger_radius);
        if siren != self.siren {
            debug!("Alarm {}", if siren { "triggered" } else { "cleared" });
            self.siren = siren;
        }

        let calls = compose_frame(scene, &frame);
        if let Some(pipeline) = &mut self.pipeline {
            pipeline.render(&calls);
        }

        self.gl_surface
            .swap_buffers(&self.gl_context)
            .context("Failed to swap buffers")?;
        Ok(())
    }

    fn cleanup(&mut self) {
        if let Some(pipeline) = self.pipeline.take() {
            pipeline.release();
            info!("Released GPU resources");
        }
    }
}

fn main() -> Result<()> {
    let (config, config_path) = ViewerConfig::load_or_default()?;
    SimpleLogger::new().with_level(config.log_level).init()?;
    match &config_path {
        Some(path) => info!("Using config {:?}", path),
        None => info!("No {} found, using defaults", CONFIG_FILE_NAME),
    }

    let (mut app, event_loop) = App::new(config).map_err(|e| {
        error!("Start-up failed: {:#}", e);
        e
    })?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match app.handle_window_event(event) {
            Ok(false) => {}
            Ok(true) => {
                app.cleanup();
                elwt.exit();
            }
            Err(e) => {
                error!("{:#}", e);
                app.cleanup();
                elwt.exit();
            }
        },
        Event::DeviceEvent { event, .. } => app.handle_device_event(event),
        Event::AboutToWait => app.window.request_redraw(),
        _ => (),
    })?;

    Ok(())
}
