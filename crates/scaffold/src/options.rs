//! Project options and the questions that collect them

use pwa_cli::prompt::Prompt;
use pwa_core::Result;

/// Default project directory name
pub const DEFAULT_PROJECT_NAME: &str = "my-pwa-app";
/// Default app display name
pub const DEFAULT_APP_NAME: &str = "My PWA App";
/// Default app ID
pub const DEFAULT_APP_ID: &str = "com.example.myapp";
/// Default description
pub const DEFAULT_DESCRIPTION: &str = "A Progressive Web App";

/// The four user-supplied fields of a new project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    /// Directory name (and npm package name source)
    pub project_name: String,
    /// Display name
    pub app_name: String,
    /// Reverse-domain identifier
    pub app_id: String,
    /// Short description
    pub description: String,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            app_id: DEFAULT_APP_ID.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

/// Answers supplied up front (e.g. on the command line); those fields are
/// not asked for
#[derive(Debug, Clone, Default)]
pub struct Presets {
    /// Project name
    pub project_name: Option<String>,
    /// App display name
    pub app_name: Option<String>,
    /// App ID
    pub app_id: Option<String>,
    /// Description
    pub description: Option<String>,
}

/// Ask for every field without a preset, in the order
/// project name, app name, app ID, description
pub fn collect_options(prompt: &mut dyn Prompt, presets: &Presets) -> Result<ProjectOptions> {
    let mut ask = |preset: &Option<String>, question: &str, default: &str| -> Result<String> {
        match preset {
            Some(value) => Ok(value.clone()),
            None => prompt.ask(question, default),
        }
    };

    Ok(ProjectOptions {
        project_name: ask(&presets.project_name, "Project name", DEFAULT_PROJECT_NAME)?,
        app_name: ask(&presets.app_name, "App display name", DEFAULT_APP_NAME)?,
        app_id: ask(&presets.app_id, "App ID", DEFAULT_APP_ID)?,
        description: ask(&presets.description, "Description", DEFAULT_DESCRIPTION)?,
    })
}
