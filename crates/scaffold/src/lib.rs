//! Project scaffolding for the PWA builder
//!
//! Copies the template tree into a new project directory and stamps the
//! user's app name, ID and description into it:
//! - `build-config.json`: `appName`, `appId`, `appDescription`
//! - `package.json`: `name`, `description`
//! - `manifest.json`: `name`, `short_name`, `description`
//! - `index.html`: page title and welcome heading

#![warn(missing_docs)]

pub mod creator;
pub mod options;
pub mod patch;
pub mod template;

pub use creator::{CreatedProject, ProjectCreator, TEMPLATE_EXCLUDES};
pub use options::{collect_options, Presets, ProjectOptions};
