// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for evaluating recorded landmark frames.
//!
//! This module contains the command-line interface logic, including argument parsing,
//! console logging, and the `evaluate` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Evaluation command.
pub mod evaluate;

/// Console logging macros and verbosity flag.
pub mod logging;
