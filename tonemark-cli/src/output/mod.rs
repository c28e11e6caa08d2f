//! Output module
//!
//! The whole document is rendered in memory before anything is written, so a
//! failure never leaves partial JSON behind.

pub mod json;

pub use json::JsonWriter;
