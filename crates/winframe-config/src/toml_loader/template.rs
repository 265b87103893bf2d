//! Default TOML config template written on first run.

/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> String {
    r##"# winframe configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
title = "winframe"
# Client-area size in pixels; the window frame is added on top.
width = 800
height = 600
# Optional resize bounds (client-area pixels).
# min_width = 320
# min_height = 240
# max_width = 3840
# max_height = 2160

[logging]
# A bare level (trace, debug, info, warn, error) or a full tracing
# filter directive such as "winframe_platform=debug,info".
level = "info"
"##
    .to_string()
}
