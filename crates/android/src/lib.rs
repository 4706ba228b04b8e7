//! Android packaging for PWA projects
//!
//! This crate turns a PWA project into a debug APK:
//! - Web asset staging
//! - Capacitor configuration and CLI calls
//! - JDK / Android SDK discovery and Gradle property files
//! - `MainActivity` plugin registration
//! - Launcher icon installation
//! - The build pipeline tying the steps together

pub mod capacitor;
pub mod gradle;
pub mod launcher_icons;
pub mod main_activity;
pub mod pipeline;
pub mod properties;
pub mod staging;
pub mod toolchain;

pub use pipeline::{BuildOrchestrator, BuildReport, BuildStep, StepOutcome};
pub use toolchain::Toolchain;
