//! Command-line interface for Verity.
//!
//! A thin front end over the library: it loads a model bundle, runs the
//! classification pipeline, and prints results. All pipeline logic lives
//! in the library modules; this module only parses arguments and formats
//! output.

pub mod args;
pub mod commands;
