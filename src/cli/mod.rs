//! CLI command handlers

pub mod commands;

pub use commands::{inspect, print_error};
