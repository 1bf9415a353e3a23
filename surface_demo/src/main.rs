//! Metal surface demo
//!
//! Opens a GLFW window, attaches a `CAMetalLayer` to it through `metal_surface`
//! and keeps the window open until it is closed or Escape is pressed.
//!
//! Usage: `surface_demo [config.toml|config.ron]`

mod config;

use std::path::PathBuf;

use glfw::{Action, Key, WindowEvent};
use metal_surface::foundation::logging;
use metal_surface::{Config, ConfigError, Surface, SurfaceError, SurfaceFactory};

use crate::config::{DemoConfig, DEFAULT_CONFIG_PATH};

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("GLFW initialization failed: {0}")]
    Glfw(String),

    #[error("window creation failed")]
    WindowCreation,

    #[error("surface creation failed: {0}")]
    Surface(#[from] SurfaceError),
}

fn main() {
    logging::init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = DemoConfig::load_or_default(&config_path)?;
    log::info!("Loaded configuration from {}: {:?}", config_path.display(), config.layer);

    let factory = SurfaceFactory::new(config.layer.clone())?;

    let mut glfw = glfw::init(glfw::fail_on_errors).map_err(|e| DemoError::Glfw(format!("{e:?}")))?;
    glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
    glfw.window_hint(glfw::WindowHint::Resizable(true));

    let (mut window, events) = glfw
        .create_window(
            config.window.width,
            config.window.height,
            &config.window.title,
            glfw::WindowMode::Windowed,
        )
        .ok_or(DemoError::WindowCreation)?;
    window.set_key_polling(true);
    window.set_framebuffer_size_polling(true);

    let surface = attach_surface(&factory, &window)?;
    log::info!(
        "Attached layer {:p}; hosted by our window: {}",
        surface.as_ptr(),
        surface.is_hosted_by(surface.origin())
    );

    let mut running = true;
    while running && !window.should_close() {
        glfw.wait_events();
        for (_, event) in glfw::flush_messages(&events) {
            match event {
                WindowEvent::Key(Key::Escape, _, Action::Press, _) => running = false,
                WindowEvent::FramebufferSize(width, height) => {
                    log::debug!("Framebuffer now {width}x{height}, layer follows the content view");
                }
                _ => {}
            }
        }
    }

    drop(surface);
    Ok(())
}

#[cfg(target_os = "macos")]
fn attach_surface<'w>(factory: &SurfaceFactory, window: &'w glfw::PWindow) -> Result<Surface<'w>, DemoError> {
    let cocoa_window = window.get_cocoa_window();
    // SAFETY: the surface borrows `window` for 'w, so the NSWindow outlives it.
    let native = unsafe { metal_surface::NativeWindow::from_raw(cocoa_window) }.ok_or(SurfaceError::NullWindow)?;
    Ok(factory.create_surface(native)?)
}

#[cfg(not(target_os = "macos"))]
fn attach_surface<'w>(_factory: &SurfaceFactory, _window: &'w glfw::PWindow) -> Result<Surface<'w>, DemoError> {
    Err(SurfaceError::UnsupportedPlatform.into())
}
