//! Error handling built on `thiserror` and `anyhow`.
//!
//! Domain errors describe the failures callers may want to match on, while
//! the operational helpers attach context and route errors to the log.

pub mod domain;
pub mod operational;

pub use {
    domain::{GenerationError, LibraryError, Result},
    operational::{ErrorReporter, ResultExt},
};
