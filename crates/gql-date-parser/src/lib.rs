//! Date/time grammar using Winnow
//!
//! This crate implements the fixed, locale-independent grammar accepted by the
//! Date scalar:
//!
//! ```text
//! literal  := date ( sep time offset? )?
//! date     := YYYY '-' MM '-' DD
//! sep      := 'T' | 't' | ' '
//! time     := hh ':' mm ( ':' ss ( '.' f{1,9} )? )?
//! offset   := 'Z' | 'z' | ('+' | '-') hh ( ':'? mm )?
//! ```
//!
//! Only ASCII digits are recognized. Nothing here reads process-wide locale or
//! timezone state, so the same text always yields the same literal.
//!
//! The parser checks *shape* only. Calendar validity (month range, days in
//! month, leap years, offset limits) is checked by the caller, which knows how
//! it wants to report range failures.

mod format;
mod grammar;
mod literal;

pub use format::{format_date, format_utc_datetime};
pub use grammar::parse_date_literal;
pub use literal::{Component, DateTimeLiteral, TimeOfDay};

use gql_date_diagnostics::Span;
use thiserror::Error;

/// Failure to match the date/time grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.expected, .found))]
pub struct GrammarError {
    /// Byte offset at which matching failed
    pub offset: usize,
    /// What the grammar expected at `offset`
    pub expected: Vec<String>,
    /// The character found at `offset`, `None` at end of input
    pub found: Option<char>,
}

impl GrammarError {
    /// Span of the offending character (empty at end of input)
    pub fn span(&self) -> Span {
        match self.found {
            Some(c) => Span::new(self.offset, self.offset + c.len_utf8()),
            None => Span::point(self.offset),
        }
    }
}

fn describe(expected: &[String], found: &Option<char>) -> String {
    let found = match found {
        Some(c) => format!("unexpected character {:?}", c),
        None => "unexpected end of input".to_string(),
    };
    if expected.is_empty() {
        found
    } else {
        format!("{}, expected {}", found, expected.join(" or "))
    }
}
