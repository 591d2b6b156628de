//! Email form domain layer
//!
//! Pure, I/O-free state for the dynamic email list: row values, per-row validation,
//! and submit evaluation. Parts of the API are only exercised by tests.

#![allow(dead_code)]

mod field;
mod form_state;

pub use field::*;
pub use form_state::*;
