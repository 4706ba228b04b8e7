//! Input validation
//!
//! Checks applied to user-supplied project fields before anything is
//! written to disk.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Component, Path, PathBuf};

/// Reverse-domain application identifier: two or more dot-separated
/// lowercase segments, each starting with a letter.
pub const APP_ID_PATTERN: &str = r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)+$";

static APP_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(APP_ID_PATTERN).expect("app id pattern is valid"));

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Whether `app_id` is a valid reverse-domain identifier
pub fn is_valid_app_id(app_id: &str) -> bool {
    APP_ID_RE.is_match(app_id)
}

/// Validate an app ID, returning a validation error with a usage hint
pub fn validate_app_id(app_id: &str) -> Result<()> {
    if is_valid_app_id(app_id) {
        Ok(())
    } else {
        Err(
            Error::invalid_format(format!("Invalid App ID format: \"{}\"", app_id))
                .with_suggestion("Use format like: com.yourname.appname"),
        )
    }
}

/// npm package name derived from a project name: lowercased, whitespace
/// runs collapsed to `-`
pub fn package_name(project_name: &str) -> String {
    WHITESPACE_RE
        .replace_all(&project_name.to_lowercase(), "-")
        .into_owned()
}

/// Validate a path taken from the project config. It must be relative,
/// must not step out through `..`, and must name something below the
/// project root (`""`, `.` and `./` name the root itself).
pub fn validate_project_path(field: &str, value: &str) -> Result<()> {
    let path = Path::new(value);
    let components: Vec<Component<'_>> = path.components().collect();

    let reason = if components
        .iter()
        .any(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
    {
        Some("must be relative to the project root")
    } else if components.iter().any(|c| matches!(c, Component::ParentDir)) {
        Some("must not contain `..`")
    } else if !components.iter().any(|c| matches!(c, Component::Normal(_))) {
        Some("must name a path inside the project root")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::invalid_format(format!("{} \"{}\" {}", field, value, reason))
            .with_suggestion("Use paths relative to the project root, such as \"www\" or \"js\"")),
        None => Ok(()),
    }
}

/// Project path with `.` components dropped, for comparing entries.
/// Only meaningful after [`validate_project_path`] accepted it.
pub fn normalize_project_path(value: &str) -> PathBuf {
    Path::new(value)
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}
