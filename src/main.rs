//! Folio - personal site with a constellation background
//!
//! Opens a window, animates the particle field behind the site and moves
//! between pages from the keyboard.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use folio::config::AppConfig;
use folio::input::{InputAction, InputMapper};
use folio::systems::{
    AnimationSystem, NavigationSystem, NavigationUpdate, RenderError, RenderSystem, WindowSystem,
};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    animation: AnimationSystem,
    navigation: NavigationSystem,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let animation = AnimationSystem::new(None, config.field.to_field_config());
        let navigation = NavigationSystem::new(&config.site, &config.debug);
        navigation.show_page();

        Self {
            config,
            window: None,
            render: None,
            animation,
            navigation,
        }
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            window.update_title(self.navigation.title());
        }
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Exit => {
                self.animation.stop();
                event_loop.exit();
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::Reseed => self.animation.reseed(),
            _ => {
                if let NavigationUpdate::Navigated(_) = self.navigation.handle(action) {
                    self.update_title();
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render) = self.render.as_mut() else {
            return;
        };

        if let Some(snapshot) = self.animation.on_redraw() {
            render.prepare(snapshot);
        }

        match render.render_frame(self.animation.viewport()) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                render.reconfigure();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("{}", RenderError::OutOfMemory);
                self.animation.stop();
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        // Frames requested from here on become redraws of this window
        self.animation = AnimationSystem::new(
            Some(window.window().clone()),
            self.config.field.to_field_config(),
        );
        let (width, height) = window.logical_size();
        self.animation.start(width, height);

        self.window = Some(window);
        self.render = Some(render);
        self.update_title();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.animation.stop();
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                if let Some(window) = &self.window {
                    let (width, height) = window.logical_size();
                    self.animation.resize(width, height);
                    window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let menu_open = self.navigation.router().menu().is_open();
                    if let Some(action) = InputMapper::map_keyboard(key, event.state, menu_open) {
                        self.handle_action(event_loop, action);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Some(e) = load_error {
        log::warn!("{}; using defaults", e);
    }
    log::info!("Starting Folio");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
