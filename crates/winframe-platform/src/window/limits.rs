//! Frame-inclusive resize bounds.
//!
//! A host answers the OS min/max tracking query with frame sizes, while
//! the configuration stores client sizes. Each configured pair is run
//! through the same rectangle adjustment as `set_size`.

use tracing::debug;
use winframe_common::NativeCallError;

use crate::native::NativeWindowing;

use super::Window;

/// One frame-inclusive bound. `None` on an axis means that axis was not
/// configured and the OS default applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSize {
    pub width: Option<i32>,
    pub height: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSizeLimits {
    pub min: Option<FrameSize>,
    pub max: Option<FrameSize>,
}

impl<N: NativeWindowing> Window<N> {
    /// Convert the configured client-size bounds to frame sizes.
    pub fn frame_size_limits(&self) -> Result<FrameSizeLimits, NativeCallError> {
        let config = self.config();
        let min = self.frame_bound(config.min_width, config.min_height)?;
        let max = self.frame_bound(config.max_width, config.max_height)?;
        debug!(handle = %self.handle(), ?min, ?max, "frame size limits");
        Ok(FrameSizeLimits { min, max })
    }

    fn frame_bound(
        &self,
        width: Option<i32>,
        height: Option<i32>,
    ) -> Result<Option<FrameSize>, NativeCallError> {
        if width.is_none() && height.is_none() {
            return Ok(None);
        }

        let rect = self.frame_rect(width.unwrap_or(0), height.unwrap_or(0))?;
        Ok(Some(FrameSize {
            width: width.map(|_| rect.width()),
            height: height.map(|_| rect.height()),
        }))
    }
}
