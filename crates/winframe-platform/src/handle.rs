use std::fmt;
use std::str::FromStr;

use winframe_common::PlatformError;

/// Opaque, non-owning reference to an OS window.
///
/// The window is created and destroyed by the embedding host; holding a
/// `WindowHandle` keeps nothing alive and dropping it frees nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> isize {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Parses decimal (`1234`) or hex (`0x4d2`) handle values.
impl FromStr for WindowHandle {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => isize::from_str_radix(hex, 16),
            None => trimmed.parse::<isize>(),
        };

        match parsed {
            Ok(0) => Err(PlatformError::InvalidHandle(format!("{s} is a null handle"))),
            Ok(raw) => Ok(Self(raw)),
            Err(e) => Err(PlatformError::InvalidHandle(format!("{s}: {e}"))),
        }
    }
}
