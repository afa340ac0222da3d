//! CLI commands

pub mod build;
pub mod export;
pub mod generate;
