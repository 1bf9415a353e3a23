//! Backend for platforms without Metal
//!
//! Every creation attempt fails with [`SurfaceError::UnsupportedPlatform`], so the
//! C entry point still links everywhere and simply returns null.

use std::ffi::c_void;
use std::ptr::NonNull;

use crate::surface::{LayerConfig, NativeWindow, SurfaceBackend, SurfaceError, SurfaceLayer, SurfaceResult};

/// Backend that never produces a layer
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedBackend;

/// Layer type of [`UnsupportedBackend`]; it has no values
#[derive(Debug)]
pub enum NoLayer {}

impl SurfaceLayer for NoLayer {
    fn as_ptr(&self) -> NonNull<c_void> {
        match *self {}
    }

    fn into_raw(self) -> NonNull<c_void> {
        match self {}
    }
}

impl SurfaceBackend for UnsupportedBackend {
    type View = ();
    type Layer = NoLayer;

    fn content_view(&self, _window: NativeWindow<'_>) -> SurfaceResult<Self::View> {
        Err(SurfaceError::UnsupportedPlatform)
    }

    fn backing_scale(&self, _window: NativeWindow<'_>) -> f64 {
        1.0
    }

    fn create_layer(&self, _config: &LayerConfig, _contents_scale: Option<f64>) -> SurfaceResult<Self::Layer> {
        Err(SurfaceError::UnsupportedPlatform)
    }

    fn attach_layer(&self, _view: &Self::View, layer: &Self::Layer) -> SurfaceResult<()> {
        match *layer {}
    }

    fn hosting_window(_view: &Self::View, layer: &Self::Layer) -> Option<NonNull<c_void>> {
        match *layer {}
    }
}
