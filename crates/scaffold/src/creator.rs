//! New project creation

use crate::options::ProjectOptions;
use crate::patch;
use pwa_core::config::CONFIG_FILE;
use pwa_core::error::{Error, Result, ResultExt};
use pwa_core::fs::TreeCopier;
use pwa_core::validation::validate_app_id;
use std::path::{Path, PathBuf};

/// Template entries never copied into a new project (build artifacts)
pub const TEMPLATE_EXCLUDES: &[&str] = &["node_modules", "www", "android", "ios"];

/// Outcome of a successful [`ProjectCreator::create`]
#[derive(Debug, Clone)]
pub struct CreatedProject {
    /// The new project directory
    pub path: PathBuf,
    /// Number of template files copied
    pub files_copied: usize,
    /// Files patched with the project options, in patch order
    pub patched: Vec<PathBuf>,
}

/// Creates projects from a template directory
#[derive(Debug, Clone)]
pub struct ProjectCreator {
    template_dir: PathBuf,
    base_dir: PathBuf,
}

impl ProjectCreator {
    /// Projects are created as `<base_dir>/<project name>`
    pub fn new(template_dir: impl Into<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            base_dir: base_dir.into(),
        }
    }

    /// Template directory in use
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Where a project with this name would be created
    pub fn project_path(&self, project_name: &str) -> PathBuf {
        self.base_dir.join(project_name)
    }

    /// Create the project. Every precondition (app ID format, free
    /// destination, template present) is checked before anything is
    /// written.
    pub fn create(&self, options: &ProjectOptions) -> Result<CreatedProject> {
        validate_app_id(&options.app_id)?;

        if options.project_name.trim().is_empty() {
            return Err(Error::validation("Project name must not be empty"));
        }

        let project_path = self.project_path(&options.project_name);
        if project_path.exists() {
            return Err(Error::already_exists(&options.project_name));
        }

        if !self.template_dir.is_dir() {
            return Err(Error::directory_not_found(&self.template_dir)
                .with_context("Template directory not found")
                .with_suggestion(
                    "Pass --template <dir> or set PWA_TEMPLATE_DIR to the pwa-builder template",
                ));
        }

        std::fs::create_dir_all(&project_path)?;
        tracing::info!(path = %project_path.display(), "Created project directory");

        let files_copied = TreeCopier::new()
            .exclude(TEMPLATE_EXCLUDES)
            .copy(&self.template_dir, &project_path)
            .context("While copying template files")?;

        let config_path = project_path.join(CONFIG_FILE);
        let package_path = project_path.join("package.json");
        let manifest_path = project_path.join("manifest.json");
        let index_path = project_path.join("index.html");

        patch::patch_build_config(&config_path, options).context("While updating configuration")?;
        patch::patch_package_json(&package_path, options).context("While updating package.json")?;
        patch::patch_manifest(&manifest_path, options).context("While updating manifest.json")?;
        patch::patch_index_html(&index_path, options).context("While updating index.html")?;

        Ok(CreatedProject {
            path: project_path,
            files_copied,
            patched: vec![config_path, package_path, manifest_path, index_path],
        })
    }
}
