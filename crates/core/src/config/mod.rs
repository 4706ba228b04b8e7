//! Project configuration (`build-config.json`)
//!
//! Shared by the icon generator and the build orchestrator; the project
//! creator patches the raw JSON instead so unknown keys survive.

mod loader;
mod schema;

pub use loader::{load_config, CONFIG_FILE};
pub use schema::*;
