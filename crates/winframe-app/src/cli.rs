use clap::{Parser, Subcommand};

/// winframe: drive a browser host's window through the native window API.
#[derive(Parser, Debug)]
#[command(name = "winframe", version, about)]
pub struct Args {
    /// Target window handle, decimal or 0x-prefixed hex.
    #[arg(long, global = true)]
    pub hwnd: Option<String>,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log filter override (a level such as `debug`, or a full directive).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Give the window input focus.
    Focus,
    /// Show the window in its current state.
    Show,
    /// Minimize the window.
    Minimize,
    /// Restore a minimized or maximized window.
    Restore,
    /// Maximize the window.
    Maximize,
    /// Set the window title.
    Title { text: String },
    /// Resize the client area; the frame is added on top.
    Size {
        #[arg(allow_negative_numbers = true)]
        width: i32,
        #[arg(allow_negative_numbers = true)]
        height: i32,
    },
    /// Center the configured window size on the primary display.
    Center,
    /// Apply title, size and position from the config, then show.
    Apply,
    /// Print the configured resize bounds as frame sizes.
    Limits,
    /// Print the effective configuration as JSON.
    Config,
}

impl Command {
    /// Whether the command operates on a window and needs `--hwnd`.
    pub fn needs_window(&self) -> bool {
        !matches!(self, Self::Config)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
