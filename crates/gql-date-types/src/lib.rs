//! Date scalar type
//!
//! This crate defines the runtime side of the `Date` scalar:
//! - [`Instant`], the UTC-normalized internal representation
//! - the tagged input/output value shapes handed over by the executor
//! - the [`ValueCoercer`] capability and its [`DateValueCoercer`] implementation
//! - coercion errors and configuration

pub mod coercion;
pub mod config;
pub mod error;
pub mod instant;
mod normalize;
pub mod value;

pub use coercion::*;
pub use config::*;
pub use error::*;
pub use instant::*;
pub use value::*;
