//! Platform backends
//!
//! [`PlatformBackend`] is the backend the default factory and the C entry point
//! use: AppKit on macOS, a backend that always fails everywhere else.

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use macos::{AppKitBackend as PlatformBackend, MetalLayer as PlatformLayer};

mod unsupported;
pub use unsupported::{NoLayer, UnsupportedBackend};
#[cfg(not(target_os = "macos"))]
pub use unsupported::{NoLayer as PlatformLayer, UnsupportedBackend as PlatformBackend};
