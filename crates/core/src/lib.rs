//! Core utilities for the PWA builder tools
//!
//! This crate provides shared functionality used by the project creator,
//! the icon generator and the build orchestrator:
//!
//! - **Error handling**: errors with codes, context and recovery suggestions
//! - **Configuration**: the `build-config.json` schema and loader
//! - **Process execution**: streamed or captured commands behind a runner trait
//! - **Filesystem**: recursive copies with exclusions, JSON read/write
//! - **Probes**: ordered candidate paths for installed toolchains
//! - **Validation**: app ID and package name rules
//!
//! # Example
//!
//! ```rust,no_run
//! use pwa_core::config::{load_config, CONFIG_FILE};
//! use pwa_core::validation::validate_app_id;
//!
//! let config = load_config(std::path::Path::new(CONFIG_FILE)).expect("config");
//! validate_app_id(&config.app_id).expect("valid app id");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod fs;
pub mod probe;
pub mod process;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

