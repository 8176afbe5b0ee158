//! Prelude module for calendar_diff crate.
//!
//! Re-exports the derive macros used across the crate.

pub use derive_more::Display;
