//! Metal surface creation
//!
//! - **`handle`**: typed window handles, converted from raw pointers once
//! - **`backend`**: the platform contract the factory is built on
//! - **`factory`**: [`SurfaceFactory`] and the owned [`Surface`] it returns
//! - **`config`**: per-layer settings
//! - **`error`**: [`SurfaceError`]

pub mod backend;
pub mod config;
pub mod error;
pub mod factory;
pub mod handle;

#[cfg(test)]
pub(crate) mod stub;

pub use backend::{SurfaceBackend, SurfaceLayer};
pub use config::{LayerConfig, PixelFormat};
pub use error::{SurfaceError, SurfaceResult};
pub use factory::{Surface, SurfaceFactory};
pub use handle::NativeWindow;
