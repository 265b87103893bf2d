//! Native window control for a browser host's top-level window.
//!
//! Provides:
//! - `Window`, the controller for focus, show state, title, size and centering
//! - `NativeWindowing`, the OS seam the controller is generic over
//! - `Win32Native`, the user32 implementation (Windows only)

pub mod handle;
pub mod native;
#[cfg(windows)]
pub mod win32;
pub mod window;

pub use handle::WindowHandle;
pub use native::{FrameStyle, NativeWindowing, PositionFlags, ShowCommand, SystemMetric, WindowStyle};
#[cfg(windows)]
pub use win32::Win32Native;
pub use window::{centered_origin, FrameSize, FrameSizeLimits, Window, MOVE_FLAGS, RESIZE_FLAGS};

use winframe_common::PlatformError;

/// The native backend for the current platform.
#[cfg(windows)]
pub fn system_native() -> Result<Win32Native, PlatformError> {
    Ok(Win32Native::new())
}

/// The native backend for the current platform.
#[cfg(not(windows))]
pub fn system_native() -> Result<UnsupportedNative, PlatformError> {
    Err(PlatformError::NotSupported(format!(
        "native window control on {}",
        std::env::consts::OS
    )))
}

/// Placeholder backend type on platforms without a native implementation.
/// It cannot be constructed.
#[cfg(not(windows))]
pub enum UnsupportedNative {}

#[cfg(not(windows))]
impl NativeWindowing for UnsupportedNative {
    fn system_metric(&self, _: SystemMetric) -> Result<i32, winframe_common::NativeError> {
        match *self {}
    }

    fn set_focus(&self, _: WindowHandle) -> Result<(), winframe_common::NativeError> {
        match *self {}
    }

    fn show_window(&self, _: WindowHandle, _: ShowCommand) -> Result<(), winframe_common::NativeError> {
        match *self {}
    }

    fn set_window_text(&self, _: WindowHandle, _: &str) -> Result<(), winframe_common::NativeError> {
        match *self {}
    }

    fn adjust_window_rect(
        &self,
        _: &mut winframe_common::Rect,
        _: WindowStyle,
        _: bool,
    ) -> Result<(), winframe_common::NativeError> {
        match *self {}
    }

    fn set_window_pos(
        &self,
        _: WindowHandle,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: PositionFlags,
    ) -> Result<(), winframe_common::NativeError> {
        match *self {}
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn system_native_is_unsupported_off_windows() {
        let err = system_native().err().unwrap();
        assert!(matches!(err, PlatformError::NotSupported(_)));
        assert!(err.to_string().contains(std::env::consts::OS));
    }
}
