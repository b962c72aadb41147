//! Input normalizer: turns a raw number or string into a validated measurement.
//!
//! Text goes through three steps before bounds are checked:
//!
//! 1. trim surrounding Unicode whitespace
//! 2. translate non-ASCII decimal digits to ASCII (see [`crate::utils::digits`])
//! 3. match the decimal grammar and parse as `f64`
//!
//! Native numbers skip straight to the bounds check.

use crate::config::SortingPolicy;
use crate::domain::{Field, RawValue};
use crate::utils::digits::to_ascii_digits;
use crate::utils::error::{PackageError, Result};
use regex::Regex;
use std::sync::LazyLock;

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("decimal grammar is a valid regex")
});

static NON_FINITE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[+-]?(inf|infinity|nan)$").expect("non-finite grammar is a valid regex")
});

/// Normalize `raw` for `field` against the default policy.
pub fn normalize(raw: impl Into<RawValue>, field: Field) -> Result<f64> {
    normalize_with(&raw.into(), field, &SortingPolicy::default())
}

pub fn normalize_with(raw: &RawValue, field: Field, policy: &SortingPolicy) -> Result<f64> {
    let name = field.as_str();
    let (value, shown) = match raw {
        RawValue::Number(v) => (*v, format_number(*v)),
        RawValue::Text(text) => {
            let shown = display_text(text);
            (parse_text(name, text, &shown)?, shown)
        }
        other => return Err(PackageError::invalid_type(name, other.type_name())),
    };

    check_bounds(field, value, shown, policy)
}

fn parse_text(name: &str, text: &str, shown: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PackageError::invalid_format(name, shown));
    }

    let ascii = to_ascii_digits(trimmed);
    if NON_FINITE_WORD.is_match(&ascii) {
        return Err(PackageError::non_finite(name, shown));
    }
    if !DECIMAL.is_match(&ascii) {
        return Err(PackageError::invalid_format(name, shown));
    }

    let value: f64 = ascii
        .parse()
        .map_err(|_| PackageError::invalid_format(name, shown))?;

    // The grammar excludes inf/nan words, so an infinite result means the
    // literal's magnitude saturated during parsing.
    if value.is_infinite() {
        return Err(PackageError::overflow(name, shown));
    }

    Ok(value)
}

fn check_bounds(field: Field, value: f64, shown: String, policy: &SortingPolicy) -> Result<f64> {
    let name = field.as_str();

    if !value.is_finite() {
        return Err(PackageError::non_finite(name, shown));
    }

    // Zero and negatives are out of bounds whatever the policy says.
    if value <= 0.0 || value <= policy.min_value {
        let floor = policy.min_value.max(0.0);
        let reason = format!("Must be greater than {}", format_number(floor));
        return Err(PackageError::out_of_bounds(name, shown, &reason));
    }

    let max = policy.max_for(field);
    if max.is_nan() || value > max {
        let reason = format!(
            "Exceeds maximum limit of {}{}",
            format_number(max),
            field.unit()
        );
        return Err(PackageError::out_of_bounds(name, shown, &reason));
    }

    Ok(value)
}

fn display_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        format!("{:?}", text)
    } else {
        trimmed.to_string()
    }
}

/// Plain notation for everyday magnitudes, scientific for tiny or huge ones.
pub(crate) fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}
