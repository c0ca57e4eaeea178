//! gasoscan-cli
//!
//! Command-line front end: configuration, input assembly, and output
//! rendering around the analyzer.

pub mod config;
pub mod input;
pub mod render;
