//! Diagnostics for Date scalar coercion
//!
//! This crate provides the reporting side of coercion failures:
//! structured error codes, byte spans into the offending input, and
//! [`Diagnostic`] values that an execution engine can attach to a
//! field-level error entry.

mod diagnostic;
mod error_code;
mod span;

pub use diagnostic::*;
pub use error_code::*;
pub use span::*;
