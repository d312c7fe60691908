//! Coercion error codes following a structured numbering system
//!
//! Error code ranges:
//! - GQLD0001-GQLD0099: Format errors (grammar, calendar validity, non-text input)
//! - GQLD0100-GQLD0199: Type errors (unsupported value representation)
//! - GQLD0400-GQLD0499: Configuration errors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a format error (0001-0099)
    pub const fn is_format_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a type error (0100-0199)
    pub const fn is_type_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a configuration error (0400-0499)
    pub const fn is_config_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GQLD{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert(
        1,
        ErrorInfo::new("Invalid date/time format")
            .with_help("Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS[.fffffffff]][Z|+HH:MM]"),
    );
    map.insert(
        2,
        ErrorInfo::new("Date/time component out of range")
            .with_help("Check month, day (including leap years), hour, minute, second and offset"),
    );
    map.insert(
        3,
        ErrorInfo::new("Expected a string value").with_help("Date values must be sent as ISO-8601 strings"),
    );

    map.insert(100, ErrorInfo::new("Unsupported value for Date serialization"));

    map.insert(400, ErrorInfo::new("Invalid coercion configuration"));

    map
});

/// Invalid date/time format
pub const GQLD0001: ErrorCode = ErrorCode::new(1);
/// Date/time component out of range
pub const GQLD0002: ErrorCode = ErrorCode::new(2);
/// Expected a string value
pub const GQLD0003: ErrorCode = ErrorCode::new(3);
/// Unsupported value for Date serialization
pub const GQLD0100: ErrorCode = ErrorCode::new(100);
/// Invalid coercion configuration
pub const GQLD0400: ErrorCode = ErrorCode::new(400);
