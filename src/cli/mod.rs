//! CLI infrastructure: commands, console play, output formatting

pub mod commands;
pub mod console;
pub mod output;
