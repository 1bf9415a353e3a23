//! Platform backend contract
//!
//! [`SurfaceBackend`] is the seam between the factory's fixed sequence of steps
//! and the platform calls behind each one. The macOS implementation talks to
//! AppKit; tests drive the factory with a stub.

use std::ffi::c_void;
use std::ptr::NonNull;

use super::config::LayerConfig;
use super::error::SurfaceResult;
use super::handle::NativeWindow;

/// A platform layer object owned by a [`Surface`](super::Surface)
pub trait SurfaceLayer {
    /// Borrow the raw layer pointer without changing ownership
    fn as_ptr(&self) -> NonNull<c_void>;

    /// Give up this reference, returning a pointer that now owns it
    fn into_raw(self) -> NonNull<c_void>;
}

/// Platform operations the factory is built from
///
/// All methods run on the thread that owns the window system. Implementations
/// never retain the window itself, only its content view.
pub trait SurfaceBackend {
    /// The window's content view, retained for as long as a surface refers to it
    type View;

    /// The layer type produced by this backend
    type Layer: SurfaceLayer;

    /// Resolve the content view that will host the layer
    ///
    /// Fails with `NotAWindow` when the pointer is not a window and with
    /// `NoContentView` when the window cannot host a layer.
    fn content_view(&self, window: NativeWindow<'_>) -> SurfaceResult<Self::View>;

    /// Backing scale factor of the window (1.0 on non-retina displays)
    fn backing_scale(&self, window: NativeWindow<'_>) -> f64;

    /// Create a new, unattached layer configured from `config`
    fn create_layer(&self, config: &LayerConfig, contents_scale: Option<f64>) -> SurfaceResult<Self::Layer>;

    /// Install `layer` as the backing layer of `view`
    fn attach_layer(&self, view: &Self::View, layer: &Self::Layer) -> SurfaceResult<()>;

    /// The window that `view` belongs to, provided `view` still hosts `layer`
    ///
    /// Returns `None` once the layer has been replaced on the view or the view
    /// has left its window.
    fn hosting_window(view: &Self::View, layer: &Self::Layer) -> Option<NonNull<c_void>>;
}
