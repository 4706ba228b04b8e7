//! Configuration schema definitions

use crate::error::{Error, ErrorCode, Result};
use crate::validation::{normalize_project_path, validate_project_path};
use serde::{Deserialize, Deserializer, Serialize};

/// Root of `build-config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Display name of the app
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Reverse-domain application identifier
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// Short description
    #[serde(default = "default_app_description")]
    pub app_description: String,

    /// Source image for the icon generator
    #[serde(default = "default_source_icon")]
    pub source_icon: String,

    /// Staging directory handed to Capacitor. `null` and `""` mean `www`.
    #[serde(default = "default_web_dir", deserialize_with = "web_dir_or_default")]
    pub web_dir: String,

    /// Individual files copied into the staging directory
    #[serde(default = "default_files_to_copy", deserialize_with = "files_or_default")]
    pub files_to_copy: Vec<String>,

    /// Folders copied recursively into the staging directory
    #[serde(default = "default_folders_to_copy", deserialize_with = "folders_or_default")]
    pub folders_to_copy: Vec<String>,

    #[serde(default = "default_theme_color")]
    pub theme_color: String,

    #[serde(default = "default_background_color")]
    pub background_color: String,

    #[serde(default)]
    pub android: AndroidConfig,

    #[serde(default)]
    pub plugins: PluginsConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            app_id: default_app_id(),
            app_description: default_app_description(),
            source_icon: default_source_icon(),
            web_dir: default_web_dir(),
            files_to_copy: default_files_to_copy(),
            folders_to_copy: default_folders_to_copy(),
            theme_color: default_theme_color(),
            background_color: default_background_color(),
            android: AndroidConfig::default(),
            plugins: PluginsConfig::default(),
        }
    }
}

impl ProjectConfig {
    /// Java package path of the app (`com.example.app` -> `com/example/app`)
    pub fn package_path(&self) -> String {
        self.app_id.replace('.', "/")
    }

    /// Check the staging paths before the build deletes or copies anything.
    ///
    /// `webDir` is wiped on every build, so it must be a directory below the
    /// project root that does not overlap any copied entry.
    pub fn validate(&self) -> Result<()> {
        validate_project_path("webDir", &self.web_dir).map_err(invalid_config)?;
        for file in &self.files_to_copy {
            validate_project_path("filesToCopy entry", file).map_err(invalid_config)?;
        }
        for folder in &self.folders_to_copy {
            validate_project_path("foldersToCopy entry", folder).map_err(invalid_config)?;
        }

        let staging = normalize_project_path(&self.web_dir);
        let overlap = self
            .files_to_copy
            .iter()
            .chain(&self.folders_to_copy)
            .find(|entry| {
                let entry = normalize_project_path(entry);
                entry.starts_with(&staging) || staging.starts_with(&entry)
            });
        if let Some(entry) = overlap {
            return Err(Error::config(format!(
                "webDir \"{}\" overlaps the copied entry \"{}\"",
                self.web_dir, entry
            ))
            .with_suggestion("Point webDir at a directory that only holds build output, such as \"www\""));
        }
        Ok(())
    }
}

fn invalid_config(err: Error) -> Error {
    let mut config_err = Error::new(ErrorCode::ConfigError, err.message);
    config_err.suggestion = err.suggestion;
    config_err
}

fn web_dir_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|dir| !dir.is_empty()).unwrap_or_else(default_web_dir))
}

fn files_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_else(default_files_to_copy))
}

fn folders_or_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_else(default_folders_to_copy))
}

fn default_app_name() -> String {
    "My PWA App".to_string()
}

fn default_app_id() -> String {
    "com.example.myapp".to_string()
}

fn default_app_description() -> String {
    "A Progressive Web App".to_string()
}

fn default_source_icon() -> String {
    "source-icon.png".to_string()
}

fn default_web_dir() -> String {
    "www".to_string()
}

fn default_files_to_copy() -> Vec<String> {
    ["index.html", "manifest.json", "sw.js"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_folders_to_copy() -> Vec<String> {
    ["js", "styles", "icons", "assets"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_theme_color() -> String {
    "#4CAF50".to_string()
}

fn default_background_color() -> String {
    "#ffffff".to_string()
}

fn default_true() -> bool {
    true
}

/// Android overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidConfig {
    #[serde(default = "default_true")]
    pub allow_mixed_content: bool,

    #[serde(default = "default_true")]
    pub web_contents_debugging_enabled: bool,

    /// Extra JDK locations checked before the built-in list
    #[serde(default)]
    pub java_home_candidates: Vec<String>,

    /// Extra Android SDK locations checked before the built-in list
    #[serde(default)]
    pub sdk_candidates: Vec<String>,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            allow_mixed_content: true,
            web_contents_debugging_enabled: true,
            java_home_candidates: Vec::new(),
            sdk_candidates: Vec::new(),
        }
    }
}

/// Optional Capacitor plugins
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginsConfig {
    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub camera: CameraConfig,
}

/// Local notifications plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_small_icon")]
    pub small_icon: String,

    #[serde(default = "default_theme_color")]
    pub icon_color: String,

    #[serde(default = "default_sound")]
    pub sound: String,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            small_icon: default_small_icon(),
            icon_color: default_theme_color(),
            sound: default_sound(),
        }
    }
}

fn default_small_icon() -> String {
    "ic_stat_notification".to_string()
}

fn default_sound() -> String {
    "notification_sound.wav".to_string()
}

/// Camera plugin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default)]
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: ProjectConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert_eq!(config.web_dir, "www");
        assert_eq!(config.files_to_copy, vec!["index.html", "manifest.json", "sw.js"]);
        assert!(config.android.allow_mixed_content);
        assert!(!config.plugins.notifications.enabled);
    }

    #[test]
    fn test_camel_case_keys() {
        let config: ProjectConfig = serde_json::from_str(
            r#"{
                "appName": "Demo",
                "appId": "com.example.app",
                "filesToCopy": [],
                "foldersToCopy": [],
                "android": { "allowMixedContent": false },
                "plugins": { "notifications": { "enabled": true, "sound": "ping.wav" } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.app_name, "Demo");
        assert!(config.files_to_copy.is_empty());
        assert!(config.folders_to_copy.is_empty());
        assert!(!config.android.allow_mixed_content);
        assert!(config.android.web_contents_debugging_enabled);
        assert!(config.plugins.notifications.enabled);
        assert_eq!(config.plugins.notifications.sound, "ping.wav");
        assert_eq!(config.plugins.notifications.small_icon, "ic_stat_notification");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: ProjectConfig =
            serde_json::from_str(r#"{"appName": "X", "customKey": 42}"#).unwrap();
        assert_eq!(config.app_name, "X");
    }

    #[test]
    fn test_null_and_empty_fall_back_to_defaults() {
        let config: ProjectConfig = serde_json::from_str(
            r#"{"webDir": "", "filesToCopy": null, "foldersToCopy": null}"#,
        )
        .unwrap();
        assert_eq!(config.web_dir, "www");
        assert_eq!(config.files_to_copy, default_files_to_copy());
        assert_eq!(config.folders_to_copy, default_folders_to_copy());

        let config: ProjectConfig = serde_json::from_str(r#"{"webDir": null}"#).unwrap();
        assert_eq!(config.web_dir, "www");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_web_dir_at_root() {
        for web_dir in [".", "./", "..", "../www"] {
            let config = ProjectConfig {
                web_dir: web_dir.to_string(),
                ..ProjectConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::ConfigError, "{:?}", web_dir);
            assert!(err.message.starts_with("webDir"));
            assert!(err.suggestion.is_some());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_rejects_absolute_entries() {
        let config = ProjectConfig {
            files_to_copy: vec!["index.html".to_string(), "/tmp/notes.txt".to_string()],
            ..ProjectConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.contains("/tmp/notes.txt"));
    }

    #[test]
    fn test_validate_rejects_escaping_folder() {
        let config = ProjectConfig {
            folders_to_copy: vec!["../shared".to_string()],
            ..ProjectConfig::default()
        };
        assert!(config.validate().unwrap_err().message.contains("foldersToCopy entry"));
    }

    #[test]
    fn test_validate_rejects_overlapping_web_dir() {
        let config = ProjectConfig {
            web_dir: "./js".to_string(),
            ..ProjectConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("overlaps"));

        let config = ProjectConfig {
            web_dir: "www".to_string(),
            files_to_copy: vec!["www/index.html".to_string()],
            ..ProjectConfig::default()
        };
        assert!(config.validate().is_err());

        assert!(ProjectConfig::default().validate().is_ok());
    }

    #[test]
    fn test_package_path() {
        let config = ProjectConfig {
            app_id: "com.example.app".to_string(),
            ..ProjectConfig::default()
        };
        assert_eq!(config.package_path(), "com/example/app");
    }
}
