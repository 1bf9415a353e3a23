//! In-memory backend for exercising the factory without a window server

#![allow(unsafe_code)]

use std::cell::Cell;
use std::collections::HashMap;
use std::ffi::c_void;
use std::ptr::NonNull;
use std::rc::Rc;

use super::backend::{SurfaceBackend, SurfaceLayer};
use super::config::LayerConfig;
use super::error::{SurfaceError, SurfaceResult};
use super::handle::NativeWindow;

/// Fake window server keyed by window address
#[derive(Default)]
pub(crate) struct StubBackend {
    windows: HashMap<usize, StubWindow>,
    anchors: Vec<Box<u8>>,
    created: Cell<usize>,
    pub fail_layer_creation: bool,
}

struct StubWindow {
    view: Option<Rc<StubView>>,
    scale: f64,
}

pub(crate) struct StubView {
    window: NonNull<c_void>,
    hosted: Cell<Option<NonNull<c_void>>>,
}

pub(crate) struct StubLayerState {
    config: LayerConfig,
    contents_scale: Option<f64>,
}

pub(crate) struct StubLayer(Box<StubLayerState>);

impl StubLayer {
    pub fn config(&self) -> &LayerConfig {
        &self.0.config
    }

    pub fn contents_scale(&self) -> Option<f64> {
        self.0.contents_scale
    }
}

impl SurfaceLayer for StubLayer {
    fn as_ptr(&self) -> NonNull<c_void> {
        NonNull::from(&*self.0).cast()
    }

    fn into_raw(self) -> NonNull<c_void> {
        NonNull::from(Box::leak(self.0)).cast()
    }
}

impl StubBackend {
    fn anchor(&mut self) -> NonNull<c_void> {
        let mut anchor = Box::new(0u8);
        let ptr = NonNull::from(&mut *anchor).cast();
        self.anchors.push(anchor);
        ptr
    }

    fn handle(ptr: NonNull<c_void>) -> NativeWindow<'static> {
        // Anchors live as long as the backend; tests never outlive it.
        unsafe { NativeWindow::from_raw(ptr.as_ptr()) }.expect("anchor is non-null")
    }

    /// A window with a content view able to host a layer
    pub fn add_window(&mut self, scale: f64) -> NativeWindow<'static> {
        let ptr = self.anchor();
        let view = Rc::new(StubView {
            window: ptr,
            hosted: Cell::new(None),
        });
        self.windows.insert(ptr.as_ptr() as usize, StubWindow { view: Some(view), scale });
        Self::handle(ptr)
    }

    /// A window whose content view is missing
    pub fn add_window_without_view(&mut self) -> NativeWindow<'static> {
        let ptr = self.anchor();
        self.windows.insert(ptr.as_ptr() as usize, StubWindow { view: None, scale: 1.0 });
        Self::handle(ptr)
    }

    /// A live object that is not a window
    pub fn foreign_object(&mut self) -> NativeWindow<'static> {
        let ptr = self.anchor();
        Self::handle(ptr)
    }

    pub fn layers_created(&self) -> usize {
        self.created.get()
    }

    /// The layer currently installed on `window`'s content view
    pub fn hosted_layer(&self, window: NativeWindow<'_>) -> Option<*mut c_void> {
        let view = self.windows.get(&(window.as_ptr() as usize))?.view.as_ref()?;
        view.hosted.get().map(NonNull::as_ptr)
    }

    /// Free a layer handed out through [`SurfaceLayer::into_raw`]
    pub unsafe fn release_raw(raw: *mut c_void) {
        drop(Box::from_raw(raw.cast::<StubLayerState>()));
    }
}

impl SurfaceBackend for StubBackend {
    type View = Rc<StubView>;
    type Layer = StubLayer;

    fn content_view(&self, window: NativeWindow<'_>) -> SurfaceResult<Self::View> {
        let window = self
            .windows
            .get(&(window.as_ptr() as usize))
            .ok_or(SurfaceError::NotAWindow)?;
        window.view.clone().ok_or(SurfaceError::NoContentView)
    }

    fn backing_scale(&self, window: NativeWindow<'_>) -> f64 {
        self.windows
            .get(&(window.as_ptr() as usize))
            .map_or(1.0, |window| window.scale)
    }

    fn create_layer(&self, config: &LayerConfig, contents_scale: Option<f64>) -> SurfaceResult<Self::Layer> {
        if self.fail_layer_creation {
            return Err(SurfaceError::LayerCreationFailed("stub refused".into()));
        }
        self.created.set(self.created.get() + 1);
        Ok(StubLayer(Box::new(StubLayerState {
            config: config.clone(),
            contents_scale,
        })))
    }

    fn attach_layer(&self, view: &Self::View, layer: &Self::Layer) -> SurfaceResult<()> {
        view.hosted.set(Some(layer.as_ptr()));
        Ok(())
    }

    fn hosting_window(view: &Self::View, layer: &Self::Layer) -> Option<NonNull<c_void>> {
        (view.hosted.get() == Some(layer.as_ptr())).then_some(view.window)
    }
}
