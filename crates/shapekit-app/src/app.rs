//! Core application state and lifecycle.

use crate::config::{AppConfig, ConfigError};
use crate::gallery::Gallery;
use kurbo::{Point, Size};
use peniko::Color;
use shapekit_core::input::{InputState, KeyInput, MouseButton as PointerButton, PointerEvent};
use shapekit_core::paint::DisplayList;
use shapekit_core::widgets::WidgetError;
use shapekit_render::{ParleyMetrics, RenderContext, Renderer, RendererError, VelloRenderer};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Renderer(#[from] RendererError),
    #[error("Widget setup failed: {0}")]
    Widget(#[from] WidgetError),
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    scene_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion.
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // State
    input: InputState,
    display_list: DisplayList,
    gallery: Gallery,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// First fatal error, reported once the event loop returns.
    error: Option<AppError>,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            error: None,
        }
    }

    /// Build an app from an optional config file, defaults when `None`.
    pub fn from_config_path<P: AsRef<Path>>(path: Option<P>) -> Result<Self, AppError> {
        let config = match path {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        Ok(Self::with_config(config))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the application until the window is closed.
    pub async fn run(mut self) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        log::error!("{}", err);
        self.error.get_or_insert(err);
        event_loop.exit();
    }

    /// Create the surface and everything that draws into it.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| RendererError::InitFailed(e.to_string()))?,
        );

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };
        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self.render_cx.get_or_insert_with(vello::util::RenderContext::new);
        let surface: RenderSurface<'static> = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| RendererError::Surface(e.to_string()))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;
        // Vello renders to Rgba8Unorm, the surface may want another format
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        self.state = Some(AppState {
            window,
            surface,
            vello_renderer,
            scene_renderer: VelloRenderer::new(),
            texture_blitter,
            input: InputState::new(),
            display_list: DisplayList::with_metrics(ParleyMetrics::new()),
            gallery: Gallery::new()?,
        });
        log::info!("shapekit gallery initialized - {}x{}", width, height);
        Ok(())
    }

    fn redraw(&mut self) {
        let Some(state) = &mut self.state else {
            return;
        };
        let Some(render_cx) = self.render_cx.as_ref() else {
            return;
        };

        let pointer = state.input.pointer_sample();
        state.display_list.clear();
        state
            .gallery
            .update(&pointer, state.input.keys(), &mut state.display_list);
        state.input.begin_frame();

        let width = state.surface.config.width;
        let height = state.surface.config.height;
        let background = Color::from(self.config.background);
        let render_ctx = RenderContext::new(&state.display_list, Size::new(width as f64, height as f64))
            .with_scale_factor(state.window.scale_factor())
            .with_background(background);
        state.scene_renderer.build_scene(&render_ctx);
        let scene = state.scene_renderer.take_scene();

        let device_handle = &render_cx.devices[state.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match state.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };

        let params = RenderParams {
            base_color: state.scene_renderer.background_color(&render_ctx),
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello's compute shaders need a storage texture, which must be Rgba8Unorm
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        if let Err(e) = state.vello_renderer.render_to_texture(
            device,
            queue,
            &scene,
            &render_texture_view,
            &params,
        ) {
            log::error!("Failed to render: {:?}", e);
            return;
        }

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());
        let mut blit_encoder = device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
            label: Some("blit encoder"),
        });
        state
            .texture_blitter
            .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
        queue.submit(std::iter::once(blit_encoder.finish()));

        surface_texture.present();
        state.window.request_redraw();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        log::info!("Creating window...");
        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if matches!(event, WindowEvent::RedrawRequested) {
            self.redraw();
            return;
        }

        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Closing");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                // widgets are laid out in logical pixels
                let logical = position.to_logical::<f64>(state.window.scale_factor());
                state.input.handle_pointer_event(PointerEvent::Move {
                    position: Point::new(logical.x, logical.y),
                });
            }

            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => {
                let Some(button) = pointer_button(button) else {
                    return;
                };
                let position = state.input.pointer_position;
                let event = match button_state {
                    ElementState::Pressed => PointerEvent::Down { position, button },
                    ElementState::Released => PointerEvent::Up { position, button },
                };
                state.input.handle_pointer_event(event);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(key) = key_input(&event) {
                    state.input.handle_key_event(key);
                }
            }

            _ => {}
        }
    }
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Left),
        MouseButton::Right => Some(PointerButton::Right),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// Text-editing input carried by a key press, if any.
fn key_input(event: &KeyEvent) -> Option<KeyInput> {
    if event.state != ElementState::Pressed {
        return None;
    }
    match &event.logical_key {
        Key::Named(NamedKey::Backspace) => Some(KeyInput::Backspace),
        Key::Named(NamedKey::Enter | NamedKey::Tab | NamedKey::Escape) => None,
        _ => event
            .text
            .as_ref()
            .filter(|text| !text.chars().any(char::is_control))
            .map(|text| KeyInput::Text(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_no_path_uses_defaults() {
        let app = App::from_config_path(None::<&Path>).unwrap();
        assert_eq!(app.config(), &AppConfig::default());
    }

    #[test]
    fn test_config_file_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gallery.json");
        let config = AppConfig {
            title: "demo".to_string(),
            width: 640,
            ..AppConfig::default()
        };
        config.save(&path).unwrap();

        let app = App::from_config_path(Some(&path)).unwrap();
        assert_eq!(app.config(), &config);
    }

    #[test]
    fn test_missing_config_is_config_error() {
        let dir = tempdir().unwrap();
        let result = App::from_config_path(Some(dir.path().join("absent.json")));
        assert!(matches!(result, Err(AppError::Config(ConfigError::Io(_)))));
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let result = App::from_config_path(Some(&path));
        assert!(matches!(result, Err(AppError::Config(ConfigError::Json(_)))));
    }
}
