use serde::{Deserialize, Serialize};

/// A window rectangle in screen pixels, stored as edges.
///
/// Used as a scratch value for client-to-frame conversions; `right` and
/// `bottom` are exclusive, matching the Win32 `RECT` layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// A rectangle anchored at the origin with the given extent.
    pub fn from_size(width: i32, height: i32) -> Self {
        Self {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    /// Horizontal extent, saturating at the `i32` range.
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Vertical extent, saturating at the `i32` range.
    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }
}
