//! routefinder CLI library.
//!
//! Command handlers and output formatting used by the `routefinder-cli`
//! binary. Handlers return the rendered text so they can be tested without
//! spawning the executable.

pub mod commands;
pub mod output;
