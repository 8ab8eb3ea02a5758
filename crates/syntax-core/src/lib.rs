//! Syntax Core - Shared library for the Syntax beatgrid and deck tools

pub mod config;
pub mod grid;
pub mod music;
pub mod store;
pub mod types;

pub use types::*;
