//! Shared pieces of the `pdt-studio` command-line tool.

pub mod commands;
pub mod config;

pub use config::StudioConfig;
