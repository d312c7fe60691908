//! ISO-8601 `Date` scalar for GraphQL servers
//!
//! This crate provides the `Date` scalar's value coercion:
//! - serializing resolved dates as `YYYY-MM-DD`
//! - parsing variables and inline literals into UTC instants
//! - format errors that point at the offending character
//!
//! Parsing uses a fixed grammar; the host's locale, culture and time zone
//! have no effect on the result.
//!
//! # Example
//!
//! ```
//! use gql_date::{DateValueCoercer, InputValue, ValueCoercer};
//!
//! let coercer = DateValueCoercer::new();
//! let instant = coercer
//!     .parse_value(&InputValue::string("2015-11-21T19:59:32.987+0200"))
//!     .unwrap();
//! assert_eq!(instant.to_iso8601(), "2015-11-21T17:59:32.987Z");
//! ```

// Re-export all public APIs from internal crates
pub use gql_date_ast as ast;
pub use gql_date_diagnostics as diagnostics;
pub use gql_date_parser as parser;
pub use gql_date_types as types;

// Convenience re-exports
pub use gql_date_ast::ValueNode;
pub use gql_date_diagnostics::{Diagnostic, ErrorCode};
pub use gql_date_parser::parse_date_literal;
pub use gql_date_types::{
    CoercionError, CoercionResult, DateCoercionConfig, DateTimeKind, DateTimeValue,
    DateValueCoercer, InputValue, Instant, OutputValue, ValueCoercer,
};
