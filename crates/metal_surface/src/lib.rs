//! # Metal Surface
//!
//! Creates a `CAMetalLayer` and installs it as the backing layer of a native
//! macOS window's content view, so a renderer can present into the window.
//!
//! Two ways in:
//!
//! - **C**: `createMetalLayerForWindow(void* cocoaWindow)` declared in
//!   `include/metal_surface.h`, returning the layer or null.
//! - **Rust**: [`SurfaceFactory`] with typed handles and [`SurfaceError`] causes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # #![allow(unsafe_code)]
//! use metal_surface::prelude::*;
//!
//! # fn cocoa_window() -> *mut std::ffi::c_void { std::ptr::null_mut() }
//! fn attach() -> Result<(), Box<dyn std::error::Error>> {
//!     let factory = SurfaceFactory::new(LayerConfig::default())?;
//!     let window = unsafe { NativeWindow::from_raw(cocoa_window()) }.ok_or(SurfaceError::NullWindow)?;
//!     let surface = factory.create_surface(window)?;
//!     assert!(surface.is_hosted_by(window));
//!     Ok(())
//! }
//! ```
//!
//! ## Ownership
//!
//! The window is borrowed and never retained. The surface belongs to the caller;
//! the window must outlive it. There is no destroy call: the layer is a
//! reference-counted platform object, released like any other.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod config;
pub mod ffi;
pub mod foundation;
pub mod platform;
pub mod surface;

pub use config::{Config, ConfigError};
pub use platform::{PlatformBackend, PlatformLayer};
pub use surface::{
    LayerConfig, NativeWindow, PixelFormat, Surface, SurfaceBackend, SurfaceError, SurfaceFactory, SurfaceLayer,
    SurfaceResult,
};

/// Common imports
pub mod prelude {
    pub use crate::{
        Config, ConfigError, LayerConfig, NativeWindow, PixelFormat, PlatformBackend, Surface, SurfaceError,
        SurfaceFactory, SurfaceResult,
    };
}
