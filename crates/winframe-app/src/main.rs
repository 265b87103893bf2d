mod cli;
mod commands;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use winframe_common::{ConfigError, PlatformError, WinframeError};
use winframe_config::WinframeConfig;
use winframe_platform::{Window, WindowHandle};

const DEFAULT_DIRECTIVE: &str = "winframe=info";

/// Expand a bare level into a directive scoped to the winframe crates.
fn log_directive(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("winframe={level}")
    }
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_DIRECTIVE.parse().unwrap()),
            ),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&str>) -> Result<WinframeConfig, ConfigError> {
    match path {
        Some(p) => winframe_config::load_config_from(Path::new(p)),
        None => winframe_config::load_config(),
    }
}

fn run(args: cli::Args, config: WinframeConfig) -> Result<(), WinframeError> {
    if !args.command.needs_window() {
        println!("{}", winframe_config::config_to_json(&config));
        return Ok(());
    }

    let handle: WindowHandle = args
        .hwnd
        .as_deref()
        .ok_or_else(|| PlatformError::InvalidHandle("--hwnd is required".into()))?
        .parse()?;

    let native = winframe_platform::system_native()?;
    let window = Window::new(native, handle, Arc::new(config.window));

    tracing::debug!(%handle, command = ?args.command, "executing");
    if let Some(output) = commands::execute(&window, &args.command)? {
        println!("{output}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is loaded before the subscriber exists so its logging level can
    // seed the filter; load failures are reported once logging is up.
    let loaded = load_config(args.config.as_deref());

    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => log_directive(level),
        (None, Ok(config)) => log_directive(&config.logging.level),
        (None, Err(_)) => DEFAULT_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        WinframeConfig::default()
    });
    tracing::debug!(title = %config.window.title, "config loaded");

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("winframe: {e}");
            ExitCode::FAILURE
        }
    }
}
