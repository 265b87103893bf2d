//! `NativeWindowing` over user32, via the `windows` crate.

use tracing::trace;
use windows::core::{Error, HSTRING};
use windows::Win32::Foundation::{SetLastError, BOOL, HWND, RECT, WIN32_ERROR};
use windows::Win32::UI::Input::KeyboardAndMouse::SetFocus;
use windows::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRect, GetSystemMetrics, SetWindowPos, SetWindowTextW, ShowWindow,
    SET_WINDOW_POS_FLAGS, SHOW_WINDOW_CMD, SYSTEM_METRICS_INDEX, WINDOW_STYLE,
};
use winframe_common::{NativeError, Rect};

use crate::handle::WindowHandle;
use crate::native::{NativeWindowing, PositionFlags, ShowCommand, SystemMetric, WindowStyle};

/// The real user32 backend. Calls must be made from the thread that owns
/// the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Native;

impl Win32Native {
    pub fn new() -> Self {
        Self
    }
}

fn native_error(err: Error) -> NativeError {
    NativeError::new(err.code().0, err.message().to_string())
}

fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.as_raw())
}

/// Turn the thread's last-error value into a result.
///
/// For calls whose return value does not signal failure on its own, the
/// last error is cleared beforehand and checked here.
fn last_error() -> Result<(), NativeError> {
    let err = Error::from_win32();
    if err.code().is_ok() {
        Ok(())
    } else {
        Err(native_error(err))
    }
}

impl NativeWindowing for Win32Native {
    fn system_metric(&self, metric: SystemMetric) -> Result<i32, NativeError> {
        // SAFETY: GetSystemMetrics only reads system state.
        let value = unsafe { GetSystemMetrics(SYSTEM_METRICS_INDEX(metric.code())) };
        trace!(?metric, value, "GetSystemMetrics");
        if value == 0 {
            return Err(NativeError::new(
                0,
                format!("GetSystemMetrics({}) returned 0", metric.code()),
            ));
        }
        Ok(value)
    }

    fn set_focus(&self, handle: WindowHandle) -> Result<(), NativeError> {
        // SetFocus returns the previously focused window, which is null
        // both on failure and when nothing had focus.
        unsafe {
            SetLastError(WIN32_ERROR(0));
            let _ = SetFocus(hwnd(handle));
        }
        last_error()
    }

    fn show_window(&self, handle: WindowHandle, command: ShowCommand) -> Result<(), NativeError> {
        // The BOOL result is the previous visibility, not success.
        unsafe {
            SetLastError(WIN32_ERROR(0));
            let _ = ShowWindow(hwnd(handle), SHOW_WINDOW_CMD(command.code()));
        }
        last_error()
    }

    fn set_window_text(&self, handle: WindowHandle, text: &str) -> Result<(), NativeError> {
        let text = HSTRING::from(text);
        unsafe { SetWindowTextW(hwnd(handle), &text) }.map_err(native_error)
    }

    fn adjust_window_rect(
        &self,
        rect: &mut Rect,
        style: WindowStyle,
        has_menu: bool,
    ) -> Result<(), NativeError> {
        let mut native = RECT {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        };
        unsafe { AdjustWindowRect(&mut native, WINDOW_STYLE(style.bits()), BOOL::from(has_menu)) }
            .map_err(native_error)?;

        *rect = Rect {
            left: native.left,
            top: native.top,
            right: native.right,
            bottom: native.bottom,
        };
        Ok(())
    }

    fn set_window_pos(
        &self,
        handle: WindowHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        flags: PositionFlags,
    ) -> Result<(), NativeError> {
        unsafe {
            SetWindowPos(
                hwnd(handle),
                HWND::default(),
                x,
                y,
                width,
                height,
                SET_WINDOW_POS_FLAGS(flags.bits()),
            )
        }
        .map_err(native_error)
    }
}
