//! The native windowing surface the controller is written against.
//!
//! Constant values mirror the Win32 definitions so an implementation can
//! pass them straight through.

use bitflags::bitflags;
use winframe_common::{NativeError, Rect};

use crate::handle::WindowHandle;

/// Screen metrics the controller queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemMetric {
    /// Width of the primary display (`SM_CXSCREEN`).
    ScreenWidth,
    /// Height of the primary display (`SM_CYSCREEN`).
    ScreenHeight,
}

impl SystemMetric {
    pub const fn code(self) -> i32 {
        match self {
            Self::ScreenWidth => 0,
            Self::ScreenHeight => 1,
        }
    }
}

/// Show-state requests, one per controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowCommand {
    /// `SW_SHOWMAXIMIZED`
    Maximize,
    /// `SW_SHOW`
    Show,
    /// `SW_MINIMIZE`
    Minimize,
    /// `SW_RESTORE`
    Restore,
}

impl ShowCommand {
    pub const fn code(self) -> i32 {
        match self {
            Self::Maximize => 3,
            Self::Show => 5,
            Self::Minimize => 6,
            Self::Restore => 9,
        }
    }
}

bitflags! {
    /// Window style bits used for frame adjustment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowStyle: u32 {
        const CAPTION = 0x00C0_0000;
        const SYSMENU = 0x0008_0000;
        const THICKFRAME = 0x0004_0000;
        const MINIMIZEBOX = 0x0002_0000;
        const MAXIMIZEBOX = 0x0001_0000;
        /// Standard top-level window with title bar, sizing border and
        /// caption buttons.
        const OVERLAPPED_WINDOW = Self::CAPTION.bits()
            | Self::SYSMENU.bits()
            | Self::THICKFRAME.bits()
            | Self::MINIMIZEBOX.bits()
            | Self::MAXIMIZEBOX.bits();
    }
}

bitflags! {
    /// Flags for a position/size request.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PositionFlags: u32 {
        /// Keep the current size; width and height are ignored.
        const NO_SIZE = 0x0001;
        /// Keep the current position; x and y are ignored.
        const NO_MOVE = 0x0002;
        /// Keep the current z-order.
        const NO_ZORDER = 0x0004;
        /// Do not activate the window.
        const NO_ACTIVATE = 0x0010;
        /// Send a frame-changed notification so the frame is recomputed.
        const FRAME_CHANGED = 0x0020;
    }
}

/// The style a window was created with, needed to compute its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStyle {
    pub style: WindowStyle,
    pub has_menu: bool,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            style: WindowStyle::OVERLAPPED_WINDOW,
            has_menu: false,
        }
    }
}

/// Native window-management calls.
///
/// One method per OS primitive. Implementations report OS failures as
/// [`NativeError`] and perform no retries.
pub trait NativeWindowing {
    fn system_metric(&self, metric: SystemMetric) -> Result<i32, NativeError>;

    fn set_focus(&self, handle: WindowHandle) -> Result<(), NativeError>;

    fn show_window(&self, handle: WindowHandle, command: ShowCommand) -> Result<(), NativeError>;

    fn set_window_text(&self, handle: WindowHandle, text: &str) -> Result<(), NativeError>;

    /// Grow a client rectangle in place to the frame rectangle for `style`.
    fn adjust_window_rect(
        &self,
        rect: &mut Rect,
        style: WindowStyle,
        has_menu: bool,
    ) -> Result<(), NativeError>;

    fn set_window_pos(
        &self,
        handle: WindowHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        flags: PositionFlags,
    ) -> Result<(), NativeError>;
}

impl<N: NativeWindowing + ?Sized> NativeWindowing for &N {
    fn system_metric(&self, metric: SystemMetric) -> Result<i32, NativeError> {
        (**self).system_metric(metric)
    }

    fn set_focus(&self, handle: WindowHandle) -> Result<(), NativeError> {
        (**self).set_focus(handle)
    }

    fn show_window(&self, handle: WindowHandle, command: ShowCommand) -> Result<(), NativeError> {
        (**self).show_window(handle, command)
    }

    fn set_window_text(&self, handle: WindowHandle, text: &str) -> Result<(), NativeError> {
        (**self).set_window_text(handle, text)
    }

    fn adjust_window_rect(
        &self,
        rect: &mut Rect,
        style: WindowStyle,
        has_menu: bool,
    ) -> Result<(), NativeError> {
        (**self).adjust_window_rect(rect, style, has_menu)
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
        (**self).set_window_pos(handle, x, y, width, height, flags)
    }
}
