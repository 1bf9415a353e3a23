//! C entry point
//!
//! Declared in `include/metal_surface.h`. Every failure becomes a null return;
//! the cause is only visible through the `log` facade.

#![allow(unsafe_code)]

use std::ffi::c_void;
use std::panic;
use std::ptr;

use crate::platform::PlatformBackend;
use crate::surface::{SurfaceBackend, SurfaceFactory};

/// Creates a `CAMetalLayer` for the given Cocoa window
///
/// `cocoa_window` is an `NSWindow*`, for example from `glfwGetCocoaWindow`.
/// Returns a `CAMetalLayer*` installed as the backing layer of the window's
/// content view, or null on failure. The caller owns one reference to the
/// returned layer and must keep the window alive while using it.
///
/// # Safety
/// `cocoa_window` must be null or point to a live Objective-C object (normally
/// an `NSWindow`), and the call must
/// happen on the main thread.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn createMetalLayerForWindow(cocoa_window: *mut c_void) -> *mut c_void {
    let created = panic::catch_unwind(|| {
        // SAFETY: forwarded from this function's contract.
        unsafe { create_layer_for_window(&SurfaceFactory::<PlatformBackend>::default(), cocoa_window) }
    });

    created.unwrap_or_else(|_| {
        log::error!("createMetalLayerForWindow: panic while creating layer");
        ptr::null_mut()
    })
}

/// Run `factory` on a raw window pointer, collapsing errors to null
pub(crate) unsafe fn create_layer_for_window<B: SurfaceBackend>(
    factory: &SurfaceFactory<B>,
    window: *mut c_void,
) -> *mut c_void {
    match factory.create_surface_raw(window) {
        Ok(surface) => surface.into_raw(),
        Err(err) => {
            log::warn!("createMetalLayerForWindow: {err}");
            ptr::null_mut()
        }
    }
}
