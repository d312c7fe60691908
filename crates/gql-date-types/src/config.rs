//! Coercer configuration

use crate::error::ConfigError;
use crate::normalize::MAX_OFFSET_MINUTES;
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Options for [`DateValueCoercer`](crate::DateValueCoercer)
///
/// The defaults read offset-less text as UTC and pass serialized text
/// through untouched.
///
/// ```
/// use gql_date_types::DateCoercionConfig;
///
/// let config = DateCoercionConfig::from_json(r#"{"unqualifiedOffsetMinutes": 60}"#).unwrap();
/// assert_eq!(config.unqualified_offset_minutes(), 60);
/// assert!(!config.validate_serialized_text());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DateCoercionConfig {
    /// Fixed offset applied to text that carries none, in minutes east of UTC
    unqualified_offset_minutes: i16,
    /// Check `Text` values against the Date grammar before serializing
    validate_serialized_text: bool,
}

impl DateCoercionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration from JSON, then validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let minutes = self.unqualified_offset_minutes;
        if minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::OffsetOutOfRange { minutes });
        }
        Ok(())
    }

    /// Set the offset used for text without one
    pub fn with_unqualified_offset(mut self, minutes: i16) -> Result<Self, ConfigError> {
        self.unqualified_offset_minutes = minutes;
        self.validate()?;
        Ok(self)
    }

    pub fn with_serialized_text_validation(mut self, enabled: bool) -> Self {
        self.validate_serialized_text = enabled;
        self
    }

    pub fn unqualified_offset_minutes(&self) -> i16 {
        self.unqualified_offset_minutes
    }

    pub fn validate_serialized_text(&self) -> bool {
        self.validate_serialized_text
    }

    /// The offset for text without one, as a chrono offset
    pub fn unqualified_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(i32::from(self.unqualified_offset_minutes) * 60)
            .unwrap_or_else(|| Utc.fix())
    }
}
