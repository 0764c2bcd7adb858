//! Configuration loader and schema types.
//!
//! This module exposes the settings that tune splitting and export, and
//! helpers to load them from disk and the environment.

mod load;
mod schema;

pub use schema::*;
