//! Utility helpers

pub mod text;
