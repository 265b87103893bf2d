//! Shared bound-validation helpers.

/// Push an error if an optional bound is negative.
pub(crate) fn validate_non_negative(errors: &mut Vec<String>, name: &str, value: Option<i32>) {
    if let Some(v) = value {
        if v < 0 {
            errors.push(format!("{name} = {v} is negative"));
        }
    }
}

/// Push an error if both bounds are set and `min` exceeds `max`.
pub(crate) fn validate_ordered(
    errors: &mut Vec<String>,
    min_name: &str,
    min: Option<i32>,
    max_name: &str,
    max: Option<i32>,
) {
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            errors.push(format!("{min_name} = {lo} exceeds {max_name} = {hi}"));
        }
    }
}
