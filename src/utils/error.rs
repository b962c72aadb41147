use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a raw input was refused by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    InvalidFormat,
    InvalidType,
    NonFinite,
    OutOfBounds,
    Overflow,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "InvalidFormat",
            ErrorKind::InvalidType => "InvalidType",
            ErrorKind::NonFinite => "NonFinite",
            ErrorKind::OutOfBounds => "OutOfBounds",
            ErrorKind::Overflow => "Overflow",
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorKind::InvalidFormat => 2,
            ErrorKind::InvalidType => 3,
            ErrorKind::NonFinite => 4,
            ErrorKind::OutOfBounds => 5,
            ErrorKind::Overflow => 6,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{message}")]
pub struct PackageError {
    pub kind: ErrorKind,
    pub field: String,
    pub value: String,
    pub message: String,
}

impl PackageError {
    pub fn new(kind: ErrorKind, field: &str, value: impl Into<String>, reason: &str) -> Self {
        let value = value.into();
        let message = format!("Invalid {}: {}. {}", field, value, reason);
        Self {
            kind,
            field: field.to_string(),
            value,
            message,
        }
    }

    pub fn invalid_format(field: &str, value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidFormat, field, value, "Must be a valid number")
    }

    pub fn invalid_type(field: &str, type_name: &str) -> Self {
        Self::new(
            ErrorKind::InvalidType,
            field,
            format!("<{}>", type_name),
            "Must be a valid number",
        )
    }

    pub fn non_finite(field: &str, value: impl Into<String>) -> Self {
        Self::new(ErrorKind::NonFinite, field, value, "Must be a finite number")
    }

    pub fn overflow(field: &str, value: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Overflow,
            field,
            value,
            "Magnitude too large to represent",
        )
    }

    pub fn out_of_bounds(field: &str, value: impl Into<String>, reason: &str) -> Self {
        Self::new(ErrorKind::OutOfBounds, field, value, reason)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PackageError>;
