//! Surface factory
//!
//! Turns a borrowed window into an owned [`Surface`]: resolve the content view,
//! create a configured layer, install it on the view. Each call is independent;
//! nothing is cached between calls and calling twice on one window attaches a
//! second layer over the first.

#![allow(unsafe_code)]

use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

use super::backend::{SurfaceBackend, SurfaceLayer};
use super::config::LayerConfig;
use super::error::{SurfaceError, SurfaceResult};
use super::handle::NativeWindow;
use crate::config::ConfigError;
use crate::platform::PlatformBackend;

/// Creates Metal surfaces for native windows
pub struct SurfaceFactory<B: SurfaceBackend = PlatformBackend> {
    backend: B,
    config: LayerConfig,
}

impl SurfaceFactory<PlatformBackend> {
    /// Factory for the current platform with a validated layer configuration
    pub fn new(config: LayerConfig) -> Result<Self, ConfigError> {
        Self::with_backend(PlatformBackend::default(), config)
    }
}

impl Default for SurfaceFactory<PlatformBackend> {
    fn default() -> Self {
        Self {
            backend: PlatformBackend::default(),
            config: LayerConfig::default(),
        }
    }
}

impl<B: SurfaceBackend> SurfaceFactory<B> {
    /// Factory over an explicit backend
    pub fn with_backend(backend: B, config: LayerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { backend, config })
    }

    /// The configuration applied to every new layer
    pub const fn config(&self) -> &LayerConfig {
        &self.config
    }

    /// The platform backend
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Create a layer and install it as the backing layer of the window's content view
    ///
    /// Must run on the thread that owns the window system. The returned surface
    /// borrows `window` for `'w`: the window has to outlive the surface.
    pub fn create_surface<'w>(&self, window: NativeWindow<'w>) -> SurfaceResult<Surface<'w, B>> {
        let view = self.backend.content_view(window)?;
        log::trace!("Resolved content view for window {:p}", window.as_ptr());

        let contents_scale = self
            .config
            .match_backing_scale
            .then(|| self.backend.backing_scale(window));
        let layer = self.backend.create_layer(&self.config, contents_scale)?;
        self.backend.attach_layer(&view, &layer)?;

        log::debug!(
            "Attached Metal layer {:p} to window {:p} ({:?}, scale {:?})",
            layer.as_ptr(),
            window.as_ptr(),
            self.config.pixel_format,
            contents_scale
        );

        Ok(Surface { window, view, layer })
    }

    /// [`create_surface`](Self::create_surface) for a raw window pointer
    ///
    /// A null pointer fails with [`SurfaceError::NullWindow`].
    ///
    /// # Safety
    /// A non-null `window` must point to a live window object that outlives the surface.
    pub unsafe fn create_surface_raw<'w>(&self, window: *mut c_void) -> SurfaceResult<Surface<'w, B>> {
        let window = NativeWindow::from_raw(window).ok_or(SurfaceError::NullWindow)?;
        self.create_surface(window)
    }
}

impl<B: SurfaceBackend> fmt::Debug for SurfaceFactory<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceFactory")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A layer attached to a window's content view, owned by the caller
///
/// Dropping a surface releases the caller's reference only. The content view
/// keeps its own reference, so the layer stays on screen until the view
/// replaces it.
pub struct Surface<'w, B: SurfaceBackend = PlatformBackend> {
    window: NativeWindow<'w>,
    view: B::View,
    layer: B::Layer,
}

impl<'w, B: SurfaceBackend> Surface<'w, B> {
    /// Raw layer pointer, still owned by this surface
    #[must_use]
    pub fn as_ptr(&self) -> *mut c_void {
        self.layer.as_ptr().as_ptr()
    }

    /// The platform layer
    pub const fn layer(&self) -> &B::Layer {
        &self.layer
    }

    /// The window this surface was created for
    pub const fn origin(&self) -> NativeWindow<'w> {
        self.window
    }

    /// Ask the platform which window currently hosts this layer
    ///
    /// `None` when another layer has since been attached to the same view.
    #[must_use]
    pub fn window(&self) -> Option<NonNull<c_void>> {
        B::hosting_window(&self.view, &self.layer)
    }

    /// Whether the layer is still the backing layer of `window`'s content view
    #[must_use]
    pub fn is_hosted_by(&self, window: NativeWindow<'_>) -> bool {
        self.window().is_some_and(|hosting| hosting.as_ptr() == window.as_ptr())
    }

    /// Hand the layer reference to the caller as a raw pointer
    ///
    /// The pointer carries one retain that the caller must eventually release.
    #[must_use]
    pub fn into_raw(self) -> *mut c_void {
        let Self { layer, .. } = self;
        layer.into_raw().as_ptr()
    }
}

impl<B: SurfaceBackend> fmt::Debug for Surface<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("window", &self.window)
            .field("layer", &self.layer.as_ptr())
            .finish_non_exhaustive()
    }
}
