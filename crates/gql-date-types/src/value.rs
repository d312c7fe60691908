//! Value shapes exchanged with the executor
//!
//! The executor hands the coercer dynamically-typed values. Instead of
//! inspecting arbitrary types at runtime, every shape the coercer can meet is
//! a variant of a closed enum:
//! - [`InputValue`]: a variable value as received from the client (JSON)
//! - [`OutputValue`]: a resolved field value about to be serialized

use crate::instant::{Instant, YEAR_RANGE};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zone designator carried by a [`DateTimeValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateTimeKind {
    /// No zone information
    #[default]
    Unspecified,
    /// Wall clock of some local zone
    Local,
    /// Wall clock in UTC
    Utc,
}

/// A calendar date and time-of-day with a zone designator
///
/// This is the resolver-side date/time representation. Years are limited to
/// 1..=9999 so the date always formats as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTimeValue {
    date: NaiveDate,
    time: NaiveTime,
    kind: DateTimeKind,
}

impl DateTimeValue {
    /// Create a value; `None` when the year is outside 1..=9999
    pub fn new(date: NaiveDate, time: NaiveTime, kind: DateTimeKind) -> Option<Self> {
        YEAR_RANGE
            .contains(&date.year())
            .then_some(Self { date, time, kind })
    }

    /// Create from components, milliseconds included
    #[allow(clippy::too_many_arguments)]
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        kind: DateTimeKind,
    ) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond)?;
        Self::new(date, time, kind)
    }

    /// Midnight on a date, kind unspecified
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        Self::new(date, NaiveTime::MIN, DateTimeKind::Unspecified)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn kind(&self) -> DateTimeKind {
        self.kind
    }

    pub fn with_kind(mut self, kind: DateTimeKind) -> Self {
        self.kind = kind;
        self
    }
}

impl TryFrom<DateTime<Utc>> for DateTimeValue {
    type Error = DateTime<Utc>;

    /// Utc kind; fails with the input when the year is out of range
    fn try_from(datetime: DateTime<Utc>) -> Result<Self, Self::Error> {
        let naive = datetime.naive_utc();
        Self::new(naive.date(), naive.time(), DateTimeKind::Utc).ok_or(datetime)
    }
}

impl From<Instant> for DateTimeValue {
    /// Instants never leave the year range, so this cannot fail
    fn from(instant: Instant) -> Self {
        let naive = instant.as_datetime().naive_utc();
        Self {
            date: naive.date(),
            time: naive.time(),
            kind: DateTimeKind::Utc,
        }
    }
}

impl TryFrom<NaiveDateTime> for DateTimeValue {
    type Error = NaiveDateTime;

    /// Unspecified kind; fails with the input when the year is out of range
    fn try_from(naive: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::new(naive.date(), naive.time(), DateTimeKind::Unspecified).ok_or(naive)
    }
}

/// A variable value as received from the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<InputValue>),
    Object(IndexMap<String, InputValue>),
}

impl InputValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the value kind, as used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::List(_) => "List",
            Self::Object(_) => "Object",
        }
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<serde_json::Value> for InputValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// A resolved field value handed to `serialize`
#[derive(Debug, Clone, PartialEq)]
pub enum OutputValue {
    /// Pre-formatted text
    Text(String),
    /// Date/time value
    DateTime(DateTimeValue),
    /// Anything else; carries the value's type name
    Other(String),
}

impl OutputValue {
    /// Wrap a value of some other type, keeping only its type name
    pub fn other(type_name: impl Into<String>) -> Self {
        Self::Other(type_name.into())
    }

    /// Name of the value kind, as used in error messages
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Text(_) => "Text",
            Self::DateTime(_) => "DateTime",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for OutputValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OutputValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTimeValue> for OutputValue {
    fn from(value: DateTimeValue) -> Self {
        Self::DateTime(value)
    }
}

impl From<Instant> for OutputValue {
    fn from(instant: Instant) -> Self {
        Self::DateTime(instant.into())
    }
}

impl fmt::Display for OutputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{:?}", s),
            Self::DateTime(v) => write!(f, "{}T{} ({:?})", v.date, v.time, v.kind),
            Self::Other(name) => write!(f, "<{}>", name),
        }
    }
}
