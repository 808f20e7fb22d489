//! Core invoice record types and mandatory-field validation.
//!
//! The record mirrors the JSON shape consumed by downstream tooling
//! (camelCase field names, every field optional on the wire); the
//! validator, not the deserializer, reports what is missing.

mod error;
mod types;
mod validation;

pub use error::*;
pub use types::*;
pub use validation::*;
