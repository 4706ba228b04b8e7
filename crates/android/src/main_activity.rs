//! `MainActivity.java` generation
//!
//! Capacitor plugins that are not auto-registered need a `registerPlugin`
//! call in the activity. The activity is regenerated on every build from the
//! plugin switches in `build-config.json`.

use pwa_core::config::ProjectConfig;
use pwa_core::error::Result;
use std::path::{Path, PathBuf};

/// A Capacitor plugin registered in `MainActivity`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plugin {
    /// `@capacitor/local-notifications`
    LocalNotifications,
    /// `@capacitor/camera`
    Camera,
}

impl Plugin {
    /// Fully qualified Java class
    pub fn class(&self) -> &'static str {
        match self {
            Plugin::LocalNotifications => {
                "com.capacitorjs.plugins.localnotifications.LocalNotificationsPlugin"
            }
            Plugin::Camera => "com.capacitorjs.plugins.camera.CameraPlugin",
        }
    }

    /// Simple class name
    pub fn simple_name(&self) -> &'static str {
        let class = self.class();
        class.rsplit('.').next().unwrap_or(class)
    }
}

/// Plugins enabled in the config, in registration order
pub fn enabled_plugins(config: &ProjectConfig) -> Vec<Plugin> {
    let mut plugins = Vec::new();
    if config.plugins.notifications.enabled {
        plugins.push(Plugin::LocalNotifications);
    }
    if config.plugins.camera.enabled {
        plugins.push(Plugin::Camera);
    }
    plugins
}

/// `android/app/src/main/java/<package path>/MainActivity.java`
pub fn main_activity_path(android_dir: &Path, config: &ProjectConfig) -> PathBuf {
    android_dir
        .join("app/src/main/java")
        .join(config.package_path())
        .join("MainActivity.java")
}

/// Java source of the activity
pub fn render_main_activity(config: &ProjectConfig) -> String {
    let plugins = enabled_plugins(config);
    let imports: Vec<String> = plugins
        .iter()
        .map(|p| format!("import {};", p.class()))
        .collect();
    let registrations: Vec<String> = plugins
        .iter()
        .map(|p| format!("        registerPlugin({}.class);", p.simple_name()))
        .collect();

    format!(
        "package {package};

import android.os.Bundle;
import com.getcapacitor.BridgeActivity;
{imports}

public class MainActivity extends BridgeActivity {{
    @Override
    public void onCreate(Bundle savedInstanceState) {{
        super.onCreate(savedInstanceState);

{registrations}
    }}
}}
",
        package = config.app_id,
        imports = imports.join("\n"),
        registrations = registrations.join("\n"),
    )
}

/// Write the activity, creating the package directories if needed.
/// Returns the file written.
pub fn write_main_activity(android_dir: &Path, config: &ProjectConfig) -> Result<PathBuf> {
    let path = main_activity_path(android_dir, config);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, render_main_activity(config))?;
    Ok(path)
}
