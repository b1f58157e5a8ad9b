//! Error handling module
//!
//! Defines the site error type and its exit codes

pub mod types;

pub use types::*;
