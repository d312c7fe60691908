//! Scalar value coercion
//!
//! A scalar coercer converts between the wire/text form of a leaf value and
//! its runtime representation, in three directions:
//! - `serialize`: resolved field value -> response text
//! - `parse_value`: variable value supplied at execution time -> runtime value
//! - `parse_literal`: value written inline in the query -> runtime value
//!
//! Literals and variables go through the same routine, so a value coerces
//! identically however the client supplies it.

use crate::config::DateCoercionConfig;
use crate::error::{CoercionError, CoercionResult, ConfigError};
use crate::instant::Instant;
use crate::normalize::text_to_instant;
use crate::value::{InputValue, OutputValue};
use chrono::Datelike;
use gql_date_ast::ValueNode;
use gql_date_parser::{format_date, parse_date_literal};
use log::debug;

/// Conversion capability of a scalar type
///
/// Implementations hold only immutable configuration and may be shared by
/// concurrently executing queries.
pub trait ValueCoercer: Send + Sync {
    /// Runtime representation produced by the parse operations
    type Output;

    /// Scalar type name as it appears in the schema
    fn name(&self) -> &str;

    /// Schema description of the scalar
    fn description(&self) -> Option<&str> {
        None
    }

    /// Convert a resolved value to its response text
    fn serialize(&self, value: &OutputValue) -> CoercionResult<String>;

    /// Convert a variable value
    fn parse_value(&self, value: &InputValue) -> CoercionResult<Self::Output>;

    /// Convert an inline literal
    fn parse_literal(&self, node: &ValueNode) -> CoercionResult<Self::Output>;
}

const DATE_DESCRIPTION: &str =
    "The `Date` scalar type represents a year, month and day in accordance with the ISO-8601 standard.";

/// Coercer for the `Date` scalar
///
/// Serializes to `YYYY-MM-DD`. Parses ISO-8601 dates and date-times into a
/// UTC [`Instant`] using a fixed grammar; the host locale, culture and time
/// zone never influence the result.
#[derive(Debug, Clone, Default)]
pub struct DateValueCoercer {
    config: DateCoercionConfig,
}

impl DateValueCoercer {
    /// Create a coercer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a coercer with a validated configuration
    pub fn with_config(config: DateCoercionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DateCoercionConfig {
        &self.config
    }

    fn parse_text(&self, text: &str) -> CoercionResult<Instant> {
        text_to_instant(text, self.config.unqualified_offset())
    }
}

impl ValueCoercer for DateValueCoercer {
    type Output = Instant;

    fn name(&self) -> &str {
        "Date"
    }

    fn description(&self) -> Option<&str> {
        Some(DATE_DESCRIPTION)
    }

    fn serialize(&self, value: &OutputValue) -> CoercionResult<String> {
        match value {
            OutputValue::Text(text) => {
                if self.config.validate_serialized_text() {
                    parse_date_literal(text).map_err(|e| {
                        debug!("Refusing to serialize {:?} as Date: {}", text, e);
                        CoercionError::grammar(text, &e)
                    })?;
                }
                Ok(text.clone())
            }
            // calendar fields as stored, whatever the kind
            OutputValue::DateTime(value) => {
                let date = value.date();
                Ok(format_date(date.year(), date.month(), date.day()))
            }
            OutputValue::Other(found) => {
                debug!("Cannot serialize {} as Date", found);
                Err(CoercionError::unsupported(found.as_str()))
            }
        }
    }

    fn parse_value(&self, value: &InputValue) -> CoercionResult<Instant> {
        match value.as_str() {
            Some(text) => self.parse_text(text),
            None => {
                debug!("Date variable is {}, not a string", value.kind_name());
                Err(CoercionError::not_text(value.kind_name()))
            }
        }
    }

    fn parse_literal(&self, node: &ValueNode) -> CoercionResult<Instant> {
        match node.as_str() {
            Some(text) => self.parse_text(text),
            None => {
                debug!("Date literal is {}, not a string", node.kind_name());
                Err(CoercionError::not_text(node.kind_name()))
            }
        }
    }
}
