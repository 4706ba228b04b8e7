//! CLI utilities for the PWA builder tools
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Progress indicators
//! - Interactive prompts behind an injectable trait
//! - Fatal error reporting with exit codes

#![warn(missing_docs)]

pub mod output;
pub mod progress;
pub mod prompt;
pub mod report;
