//! Query-syntax literal value nodes
//!
//! The query parser lives outside this workspace. This crate only fixes the
//! shape of the literal nodes it hands to scalar coercers, so that
//! `parse_literal` has something concrete to match on.

mod value;

pub use value::*;
