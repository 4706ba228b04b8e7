//! Textual patches applied to the copied template

use crate::options::ProjectOptions;
use pwa_core::error::{Error, Result};
use pwa_core::fs::{read_json, write_json};
use pwa_core::validation::package_name;
use serde_json::{Map, Value};
use std::path::Path;

/// Title shipped in the template's `index.html`
pub const TEMPLATE_TITLE: &str = "<title>My PWA App</title>";
/// Heading shipped in the template's `index.html`
pub const TEMPLATE_HEADING: &str = "<h1>Welcome to Your PWA</h1>";

/// Load a JSON object, let `edit` change it, write it back. Keys not
/// touched by `edit` keep their values and order.
pub fn patch_json<F>(path: &Path, edit: F) -> Result<()>
where
    F: FnOnce(&mut Map<String, Value>),
{
    let mut value = read_json(path)?;
    let object = value.as_object_mut().ok_or_else(|| {
        Error::invalid_format(format!("{} must contain a JSON object", path.display()))
    })?;
    edit(object);
    write_json(path, &value)?;
    tracing::debug!(path = %path.display(), "Patched JSON file");
    Ok(())
}

fn set(object: &mut Map<String, Value>, key: &str, value: &str) {
    object.insert(key.to_string(), Value::String(value.to_string()));
}

/// `build-config.json`: app name, ID and description
pub fn patch_build_config(path: &Path, options: &ProjectOptions) -> Result<()> {
    patch_json(path, |config| {
        set(config, "appName", &options.app_name);
        set(config, "appId", &options.app_id);
        set(config, "appDescription", &options.description);
    })
}

/// `package.json`: npm name derived from the project name, description
pub fn patch_package_json(path: &Path, options: &ProjectOptions) -> Result<()> {
    patch_json(path, |package| {
        set(package, "name", &package_name(&options.project_name));
        set(package, "description", &options.description);
    })
}

/// `manifest.json`: name, short name, description
pub fn patch_manifest(path: &Path, options: &ProjectOptions) -> Result<()> {
    patch_json(path, |manifest| {
        set(manifest, "name", &options.app_name);
        set(manifest, "short_name", &options.app_name);
        set(manifest, "description", &options.description);
    })
}

/// Replace the template title and heading (first occurrence of each)
pub fn render_index_html(html: &str, app_name: &str) -> String {
    html.replacen(TEMPLATE_TITLE, &format!("<title>{}</title>", app_name), 1)
        .replacen(TEMPLATE_HEADING, &format!("<h1>Welcome to {}</h1>", app_name), 1)
}

/// `index.html`: title and welcome heading
pub fn patch_index_html(path: &Path, options: &ProjectOptions) -> Result<()> {
    if !path.is_file() {
        return Err(Error::file_not_found(path));
    }
    let html = std::fs::read_to_string(path)?;
    std::fs::write(path, render_index_html(&html, &options.app_name))?;
    Ok(())
}
