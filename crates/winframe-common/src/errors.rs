use std::path::PathBuf;

/// An error reported by the operating system for a single native call.
///
/// `code` carries the raw OS error value (an HRESULT on Windows) and
/// `message` its system-provided description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (os error {code:#010x})")]
pub struct NativeError {
    pub code: i32,
    pub message: String,
}

impl NativeError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// A failed step of a window operation, wrapping the OS cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation}: {cause}")]
pub struct NativeCallError {
    /// Short description of the attempted step.
    pub operation: &'static str,
    #[source]
    pub cause: NativeError,
}

impl NativeCallError {
    pub fn new(operation: &'static str, cause: NativeError) -> Self {
        Self { operation, cause }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("invalid window handle: {0}")]
    InvalidHandle(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WinframeError {
    #[error(transparent)]
    Native(#[from] NativeCallError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
