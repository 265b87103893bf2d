//! Window section validation.
//!
//! `width` and `height` are not checked here; they reach the OS as given.

use crate::schema::WinframeConfig;

use super::helpers::{validate_non_negative, validate_ordered};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &WinframeConfig) {
    let window = &config.window;

    if window.title.contains('\0') {
        errors.push("window.title must not contain NUL characters".into());
    }

    validate_non_negative(errors, "window.min_width", window.min_width);
    validate_non_negative(errors, "window.min_height", window.min_height);
    validate_non_negative(errors, "window.max_width", window.max_width);
    validate_non_negative(errors, "window.max_height", window.max_height);

    validate_ordered(
        errors,
        "window.min_width",
        window.min_width,
        "window.max_width",
        window.max_width,
    );
    validate_ordered(
        errors,
        "window.min_height",
        window.min_height,
        "window.max_height",
        window.max_height,
    );
}
