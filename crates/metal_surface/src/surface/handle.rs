//! Typed window handles
//!
//! Raw `void*` window pointers are converted into [`NativeWindow`] exactly once,
//! at the boundary where they enter the crate. Past that point nothing can
//! confuse a window pointer with a layer or view pointer.

#![allow(unsafe_code)]

use std::ffi::c_void;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use raw_window_handle::RawWindowHandle;

use super::error::{SurfaceError, SurfaceResult};

/// Borrowed reference to a native window (`NSWindow*` on macOS)
///
/// The window is owned by the windowing library. The lifetime `'w` ties this
/// handle to whatever keeps the window alive; the factory never retains or
/// releases it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NativeWindow<'w> {
    ptr: NonNull<c_void>,
    _window: PhantomData<&'w c_void>,
}

impl<'w> NativeWindow<'w> {
    /// Wrap a raw window pointer, returning `None` for null
    ///
    /// # Safety
    /// A non-null `ptr` must point to a live window object that stays valid for `'w`.
    pub unsafe fn from_raw(ptr: *mut c_void) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self {
            ptr,
            _window: PhantomData,
        })
    }

    /// Extract the window from a `raw-window-handle` AppKit handle
    ///
    /// # Safety
    /// The handle must come from a live window that stays valid for `'w`.
    pub unsafe fn from_raw_window_handle(handle: RawWindowHandle) -> SurfaceResult<Self> {
        match handle {
            RawWindowHandle::AppKit(appkit) => {
                Self::from_raw(appkit.ns_window).ok_or(SurfaceError::NullWindow)
            }
            other => Err(SurfaceError::UnsupportedHandle(format!("{other:?}"))),
        }
    }

    /// The raw window pointer
    #[must_use]
    pub const fn as_ptr(self) -> *mut c_void {
        self.ptr.as_ptr()
    }
}

impl fmt::Debug for NativeWindow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeWindow").field(&self.ptr).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raw_window_handle::{AppKitWindowHandle, Win32WindowHandle};

    #[test]
    fn test_null_pointer_is_rejected() {
        let window = unsafe { NativeWindow::from_raw(std::ptr::null_mut()) };
        assert!(window.is_none());
    }

    #[test]
    fn test_pointer_round_trips() {
        let mut backing = 0u8;
        let ptr = (&mut backing as *mut u8).cast::<c_void>();
        let window = unsafe { NativeWindow::from_raw(ptr) }.expect("non-null pointer");
        assert_eq!(window.as_ptr(), ptr);
    }

    #[test]
    fn test_appkit_handle_uses_ns_window() {
        let mut backing = 0u8;
        let mut handle = AppKitWindowHandle::empty();
        handle.ns_window = (&mut backing as *mut u8).cast();

        let window = unsafe { NativeWindow::from_raw_window_handle(RawWindowHandle::AppKit(handle)) }
            .expect("AppKit handle with a window");
        assert_eq!(window.as_ptr(), handle.ns_window);
    }

    #[test]
    fn test_appkit_handle_without_window_is_null() {
        let handle = AppKitWindowHandle::empty();
        let result = unsafe { NativeWindow::from_raw_window_handle(RawWindowHandle::AppKit(handle)) };
        assert_eq!(result.unwrap_err(), SurfaceError::NullWindow);
    }

    #[test]
    fn test_other_handle_kinds_are_unsupported() {
        let handle = Win32WindowHandle::empty();
        let result = unsafe { NativeWindow::from_raw_window_handle(RawWindowHandle::Win32(handle)) };
        assert!(matches!(result, Err(SurfaceError::UnsupportedHandle(_))));
    }
}
