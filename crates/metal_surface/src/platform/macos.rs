//! AppKit backend
//!
//! The layer becomes the content view's hosted layer (`setLayer:` followed by
//! `setWantsLayer:`), so AppKit sizes and positions it with the view from then on.

#![allow(unsafe_code)]
// Some of these selectors are marked safe in newer objc2 framework releases.
#![allow(unused_unsafe)]

use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2::MainThreadMarker;
use objc2_app_kit::{NSView, NSWindow};
use objc2_metal::MTLPixelFormat;
use objc2_quartz_core::{CALayer, CAMetalLayer};

use crate::surface::{LayerConfig, NativeWindow, SurfaceBackend, SurfaceError, SurfaceLayer, SurfaceResult};

/// Creates `CAMetalLayer`s on `NSWindow` content views
#[derive(Debug, Default, Clone, Copy)]
pub struct AppKitBackend;

/// A retained `CAMetalLayer`
pub struct MetalLayer(Retained<CAMetalLayer>);

impl MetalLayer {
    /// The underlying layer, for further configuration (device, drawable size)
    #[must_use]
    pub fn layer(&self) -> &CAMetalLayer {
        &self.0
    }

    fn as_ca_layer(&self) -> &CALayer {
        &self.0
    }
}

impl fmt::Debug for MetalLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MetalLayer").field(&Retained::as_ptr(&self.0)).finish()
    }
}

impl SurfaceLayer for MetalLayer {
    fn as_ptr(&self) -> NonNull<c_void> {
        NonNull::from(&*self.0).cast()
    }

    fn into_raw(self) -> NonNull<c_void> {
        let ptr = Retained::into_raw(self.0);
        // SAFETY: a Retained is never null.
        unsafe { NonNull::new_unchecked(ptr.cast()) }
    }
}

fn main_thread() -> SurfaceResult<MainThreadMarker> {
    MainThreadMarker::new().ok_or(SurfaceError::NotMainThread)
}

/// View the window pointer as an `NSWindow`, checking its class first
fn ns_window<'w>(window: NativeWindow<'w>) -> SurfaceResult<&'w NSWindow> {
    // SAFETY: `NativeWindow` construction requires a live object pointer.
    let object: &'w AnyObject = unsafe { &*window.as_ptr().cast::<AnyObject>() };
    object.downcast_ref::<NSWindow>().ok_or(SurfaceError::NotAWindow)
}

impl SurfaceBackend for AppKitBackend {
    type View = Retained<NSView>;
    type Layer = MetalLayer;

    fn content_view(&self, window: NativeWindow<'_>) -> SurfaceResult<Self::View> {
        main_thread()?;
        let ns_window = ns_window(window)?;
        unsafe { ns_window.contentView() }.ok_or(SurfaceError::NoContentView)
    }

    fn backing_scale(&self, window: NativeWindow<'_>) -> f64 {
        ns_window(window).map_or(1.0, |ns_window| unsafe { ns_window.backingScaleFactor() })
    }

    fn create_layer(&self, config: &LayerConfig, contents_scale: Option<f64>) -> SurfaceResult<Self::Layer> {
        main_thread()?;
        let layer = unsafe { CAMetalLayer::new() };

        unsafe {
            layer.setPixelFormat(MTLPixelFormat(config.pixel_format.metal_raw_value()));
            layer.setFramebufferOnly(config.framebuffer_only);
            layer.setMaximumDrawableCount(config.maximum_drawable_count as usize);
            layer.setDisplaySyncEnabled(config.display_sync);
            layer.setOpaque(config.opaque);
            if let Some(scale) = contents_scale {
                layer.setContentsScale(scale);
            }
        }

        Ok(MetalLayer(layer))
    }

    fn attach_layer(&self, view: &Self::View, layer: &Self::Layer) -> SurfaceResult<()> {
        main_thread()?;
        let ca_layer = layer.as_ca_layer();
        unsafe {
            view.setLayer(Some(ca_layer));
            view.setWantsLayer(true);
        }

        match unsafe { view.layer() } {
            Some(hosted) if std::ptr::eq(&*hosted, ca_layer) => Ok(()),
            Some(_) => Err(SurfaceError::AttachFailed("content view kept a different layer".into())),
            None => Err(SurfaceError::AttachFailed("content view has no layer".into())),
        }
    }

    fn hosting_window(view: &Self::View, layer: &Self::Layer) -> Option<NonNull<c_void>> {
        MainThreadMarker::new()?;
        let hosted = unsafe { view.layer() }?;
        if !std::ptr::eq(&*hosted, layer.as_ca_layer()) {
            return None;
        }
        let window = unsafe { view.window() }?;
        Some(NonNull::from(&*window).cast())
    }
}
