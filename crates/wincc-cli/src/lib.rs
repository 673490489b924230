//! CLI library components for the ECS to WinCC converter.

pub mod args;
pub mod commands;
pub mod config;
pub mod logging;
pub mod progress;
pub mod types;
