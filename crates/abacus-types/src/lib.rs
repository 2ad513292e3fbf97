//! Abacus Types
//!
//! This crate defines the loosely-typed input values shared across the Abacus
//! workspace (currently `abacus-calculator` and `abacus-cli`). Calculator inputs
//! arrive from forms, JSON payloads and command lines, so a value can be a
//! number, a string, a boolean or a list of those.

#![deny(missing_docs)]

mod types;
pub use types::{InputRecord, InputValue};
