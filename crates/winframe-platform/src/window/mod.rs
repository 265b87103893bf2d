//! Window controller.
//!
//! `Window` turns high-level intents (show, center, resize, rename, focus)
//! into ordered native calls. Sizes are always given as client-area
//! extents and converted to frame extents before the final position call;
//! nothing on the OS side changes until that last call succeeds.

use std::sync::Arc;

use tracing::{debug, warn};
use winframe_common::{NativeCallError, NativeError, Rect};
use winframe_config::WindowConfiguration;

use crate::handle::WindowHandle;
use crate::native::{FrameStyle, NativeWindowing, PositionFlags, ShowCommand, SystemMetric};

mod limits;


pub use limits::{FrameSize, FrameSizeLimits};

const SET_FOCUS: &str = "failed to set focus";
const SHOW_WINDOW: &str = "failed to show the window";
const MINIMIZE_WINDOW: &str = "failed to minimize the window";
const RESTORE_WINDOW: &str = "failed to restore the window";
const MAXIMIZE_WINDOW: &str = "failed to maximize the window";
const SET_TITLE: &str = "failed to set the window title";
const SCREEN_WIDTH: &str = "failed to get the horizontal screen size";
const SCREEN_HEIGHT: &str = "failed to get the vertical screen size";
const ADJUST_RECT: &str = "failed to adjust window rect";
const SET_POSITION: &str = "failed to set the window position";

/// Flags for a size-only change.
pub const RESIZE_FLAGS: PositionFlags = PositionFlags::NO_ZORDER
    .union(PositionFlags::NO_ACTIVATE)
    .union(PositionFlags::NO_MOVE)
    .union(PositionFlags::FRAME_CHANGED);

/// Flags for a position-only change.
pub const MOVE_FLAGS: PositionFlags = PositionFlags::NO_ZORDER
    .union(PositionFlags::NO_ACTIVATE)
    .union(PositionFlags::NO_SIZE)
    .union(PositionFlags::FRAME_CHANGED);

/// Top-left corner that centers an `width` x `height` frame on a
/// `screen_width` x `screen_height` display.
///
/// Division truncates toward zero, including when the frame is larger than
/// the screen: an overhang of 3 pixels gives an offset of -1, not -2.
pub fn centered_origin(screen_width: i32, screen_height: i32, width: i32, height: i32) -> (i32, i32) {
    (
        screen_width.saturating_sub(width) / 2,
        screen_height.saturating_sub(height) / 2,
    )
}

/// Controller for a single host-owned OS window.
pub struct Window<N> {
    native: N,
    handle: WindowHandle,
    config: Arc<WindowConfiguration>,
    frame: FrameStyle,
}

impl<N: NativeWindowing> Window<N> {
    /// Wrap an existing window created with the standard overlapped style.
    pub fn new(native: N, handle: WindowHandle, config: Arc<WindowConfiguration>) -> Self {
        Self {
            native,
            handle,
            config,
            frame: FrameStyle::default(),
        }
    }

    /// Override the style used for frame adjustment. Must match the style
    /// the window was created with.
    ///
    /// The default assumes no menu bar. Hosts that size their window as if
    /// a menu were present (the frame then includes the menu height) pass
    /// `FrameStyle { has_menu: true, ..FrameStyle::default() }`.
    pub fn with_frame(mut self, frame: FrameStyle) -> Self {
        self.frame = frame;
        self
    }

    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    pub fn config(&self) -> &Arc<WindowConfiguration> {
        &self.config
    }

    pub fn frame(&self) -> FrameStyle {
        self.frame
    }

    pub fn focus(&self) -> Result<(), NativeCallError> {
        debug!(handle = %self.handle, "set focus");
        self.native
            .set_focus(self.handle)
            .map_err(|e| self.fail(SET_FOCUS, e))
    }

    pub fn minimize(&self) -> Result<(), NativeCallError> {
        self.show_state(ShowCommand::Minimize, MINIMIZE_WINDOW)
    }

    pub fn show(&self) -> Result<(), NativeCallError> {
        self.show_state(ShowCommand::Show, SHOW_WINDOW)
    }

    pub fn restore(&self) -> Result<(), NativeCallError> {
        self.show_state(ShowCommand::Restore, RESTORE_WINDOW)
    }

    pub fn maximize(&self) -> Result<(), NativeCallError> {
        self.show_state(ShowCommand::Maximize, MAXIMIZE_WINDOW)
    }

    pub fn set_title(&self, title: &str) -> Result<(), NativeCallError> {
        debug!(handle = %self.handle, title, "set title");
        self.native
            .set_window_text(self.handle, title)
            .map_err(|e| self.fail(SET_TITLE, e))
    }

    /// Resize the window so its client area is `width` x `height`.
    ///
    /// Position is left untouched. Non-positive sizes are passed through.
    pub fn set_size(&self, width: i32, height: i32) -> Result<(), NativeCallError> {
        let frame = self.frame_rect(width, height)?;
        debug!(
            handle = %self.handle,
            width,
            height,
            frame_width = frame.width(),
            frame_height = frame.height(),
            "set size"
        );
        self.set_position(0, 0, frame.width(), frame.height(), RESIZE_FLAGS)
    }

    /// Move the window so that a frame of the configured client size is
    /// centered on the primary display.
    ///
    /// Uses the configured size, not the current one. Size is left
    /// untouched.
    pub fn center(&self) -> Result<(), NativeCallError> {
        let screen_width = self
            .native
            .system_metric(SystemMetric::ScreenWidth)
            .map_err(|e| self.fail(SCREEN_WIDTH, e))?;
        let screen_height = self
            .native
            .system_metric(SystemMetric::ScreenHeight)
            .map_err(|e| self.fail(SCREEN_HEIGHT, e))?;

        let frame = self.frame_rect(self.config.width, self.config.height)?;
        let (x, y) = centered_origin(screen_width, screen_height, frame.width(), frame.height());

        debug!(
            handle = %self.handle,
            screen_width,
            screen_height,
            x,
            y,
            "center"
        );
        self.set_position(x, y, frame.width(), frame.height(), MOVE_FLAGS)
    }

    /// Bring a freshly created window in line with its configuration:
    /// title, client size, centered position, then shown.
    pub fn apply_configuration(&self) -> Result<(), NativeCallError> {
        self.set_title(&self.config.title)?;
        self.set_size(self.config.width, self.config.height)?;
        self.center()?;
        self.show()
    }

    /// Frame rectangle enclosing a client area of the given size.
    pub(crate) fn frame_rect(&self, width: i32, height: i32) -> Result<Rect, NativeCallError> {
        let mut rect = Rect::from_size(width, height);
        self.native
            .adjust_window_rect(&mut rect, self.frame.style, self.frame.has_menu)
            .map_err(|e| self.fail(ADJUST_RECT, e))?;
        Ok(rect)
    }

    fn show_state(&self, command: ShowCommand, operation: &'static str) -> Result<(), NativeCallError> {
        debug!(handle = %self.handle, ?command, "show window");
        self.native
            .show_window(self.handle, command)
            .map_err(|e| self.fail(operation, e))
    }

    fn set_position(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        flags: PositionFlags,
    ) -> Result<(), NativeCallError> {
        self.native
            .set_window_pos(self.handle, x, y, width, height, flags)
            .map_err(|e| self.fail(SET_POSITION, e))
    }

    fn fail(&self, operation: &'static str, cause: NativeError) -> NativeCallError {
        warn!(handle = %self.handle, error = %cause, "{operation}");
        NativeCallError::new(operation, cause)
    }
}
