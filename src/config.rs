//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to seed the playback
//! engine's startup defaults and helpers to load configuration from disk.

mod load;
mod schema;

pub use schema::*;
