//! Surface creation errors

use thiserror::Error;

/// Reasons a surface could not be created for a window
///
/// The Rust API reports the cause; the C entry point collapses every variant
/// into a null return.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The window pointer was null
    #[error("window handle is null")]
    NullWindow,

    /// A raw window handle from a windowing library was not an AppKit handle
    #[error("unsupported window handle kind: {0}")]
    UnsupportedHandle(String),

    /// The pointer does not refer to an `NSWindow`
    #[error("window handle does not refer to an NSWindow")]
    NotAWindow,

    /// The window has no content view that could host a layer
    #[error("window has no content view to host a layer")]
    NoContentView,

    /// AppKit was called from a thread other than the main thread
    #[error("surface creation must run on the main thread")]
    NotMainThread,

    /// The platform refused to create the layer
    #[error("layer creation failed: {0}")]
    LayerCreationFailed(String),

    /// The layer could not be installed on the content view
    #[error("failed to attach layer to content view: {0}")]
    AttachFailed(String),

    /// Metal layers only exist on macOS
    #[error("Metal surfaces are not available on this platform")]
    UnsupportedPlatform,
}

/// Result alias for surface operations
pub type SurfaceResult<T> = Result<T, SurfaceError>;
