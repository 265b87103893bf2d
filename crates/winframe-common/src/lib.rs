pub mod errors;
pub mod types;

pub use errors::{ConfigError, NativeCallError, NativeError, PlatformError, WinframeError};
pub use types::Rect;

pub type Result<T> = std::result::Result<T, WinframeError>;
