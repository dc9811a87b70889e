//! Player application implementing winit ApplicationHandler
//!
//! Forwards pointer and resize events to the sparkler, steps it once per
//! redraw, and presents whatever it drew.

use anyhow::Context;
use sparkler_core::{DrawList, SurfaceSize};
use sparkler_fx::SparklerSystem;
use sparkler_render::{CanvasRenderer, RenderContext};
use sparkler_runtime::{EventBus, GameClock, RuntimeSystem, SurfaceEvent};
use std::sync::Arc;
use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

pub struct PlayerApp {
    // Effect
    pub system: SparklerSystem,
    pub clock: GameClock,
    events: EventBus,
    draw_list: DrawList,

    // Rendering
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    canvas_renderer: Option<CanvasRenderer>,

    // Window options
    pub fullscreen: bool,
    pub initial_size: PhysicalSize<u32>,
    exit_requested: bool,
}

impl PlayerApp {
    pub fn new(system: SparklerSystem, width: u32, height: u32, fullscreen: bool) -> Self {
        Self {
            system,
            clock: GameClock::new(),
            events: EventBus::new(),
            draw_list: DrawList::default(),
            window: None,
            render_context: None,
            canvas_renderer: None,
            fullscreen,
            initial_size: PhysicalSize::new(width, height),
            exit_requested: false,
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title("Sparkler")
            .with_inner_size(self.initial_size);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("Failed to create window")?,
        );

        if self.fullscreen {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        self.window = Some(window.clone());

        let render_context = pollster::block_on(RenderContext::new(window.clone()))
            .context("Failed to initialize rendering")?;
        let canvas_renderer = CanvasRenderer::new(&render_context);

        let (width, height) = canvas_renderer.size();
        let surface = SurfaceSize::from_physical(width, height);
        self.draw_list = DrawList::new(surface);
        self.system.initialize(surface)?;

        info!(width, height, "[player] window ready");

        self.render_context = Some(render_context);
        self.canvas_renderer = Some(canvas_renderer);
        Ok(())
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if let Some(context) = &mut self.render_context {
            context.resize(new_size);
            if let Some(renderer) = &mut self.canvas_renderer {
                renderer.resize(&context.device, new_size.width, new_size.height);
            }
        }
        self.draw_list
            .resize(SurfaceSize::from_physical(new_size.width, new_size.height));
    }

    /// One host callback: feed events, step the effect, present if it drew.
    ///
    /// Redraws still queued after an exit request are dropped.
    fn frame(&mut self) {
        if self.exit_requested {
            return;
        }
        self.clock.tick();

        for event in self.events.drain() {
            if let Err(e) = self.system.handle_event(&event) {
                warn!("Event error: {e}");
            }
        }

        self.draw_list.clear();
        match self.system.update(self.clock.delta_time, &mut self.draw_list) {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                error!("Update error: {e}");
                return;
            }
        }

        if let (Some(context), Some(renderer)) =
            (&mut self.render_context, &mut self.canvas_renderer)
        {
            if let Err(e) = renderer.render(context, &self.draw_list) {
                error!("Render error: {e}");
            }
        }
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

    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    /// Tear down the effect once the loop has stopped delivering frames
    fn shutdown(&mut self) {
        if let Err(e) = self.system.shutdown() {
            warn!("Shutdown error: {e}");
        }
    }
}

impl ApplicationHandler for PlayerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.initialize(event_loop) {
                error!("{e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // A minimized window reports a zero size; the effect keeps its last surface
        if let Some(surface_event) = SurfaceEvent::from_window_event(&event) {
            if !matches!(surface_event, SurfaceEvent::Resized(size) if size.is_empty()) {
                self.events.push(surface_event);
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                self.exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                self.resize(new_size);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => self.exit(event_loop),
                    PhysicalKey::Code(KeyCode::F11) => self.toggle_fullscreen(),
                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => {
                self.frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
