//! Tally - A Rust-based arithmetic and greeting CLI toolkit
//!
//! This library provides two independent leaf modules: `utils` for the
//! greeting and basic numeric helpers, and `calculator` for the fallible
//! arithmetic surface. The config, output, and CLI plumbing around them
//! lives in the remaining modules.

pub mod calculator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod utils;

// Re-export core types for easier use
pub use config::Config;
pub use error::{AppError, AppResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
