//! `gradle.properties` and `local.properties`

use pwa_core::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Gradle property selecting the JDK
pub const JAVA_HOME_KEY: &str = "org.gradle.java.home";

/// What [`configure_java_home`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JavaHomeOutcome {
    /// Appended the property pointing at this JDK
    Added(PathBuf),
    /// The file already sets the property
    AlreadyConfigured,
    /// No JDK was found, nothing written
    NotFound,
}

/// Path as written into a `.properties` file: backslashes doubled
pub fn escape_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "\\\\")
}

/// Append `org.gradle.java.home` to `gradle.properties` unless already set
pub fn configure_java_home(gradle_properties: &Path, java_home: Option<&Path>) -> Result<JavaHomeOutcome> {
    if !gradle_properties.is_file() {
        return Err(Error::file_not_found(gradle_properties));
    }
    let mut content = std::fs::read_to_string(gradle_properties)?;

    if content.contains(JAVA_HOME_KEY) {
        return Ok(JavaHomeOutcome::AlreadyConfigured);
    }
    let Some(java_home) = java_home else {
        return Ok(JavaHomeOutcome::NotFound);
    };

    content.push_str("\n# Set correct Java home for Android Gradle Plugin compatibility\n");
    content.push_str(&format!("{}={}\n", JAVA_HOME_KEY, escape_path(java_home)));
    std::fs::write(gradle_properties, content)?;

    tracing::debug!(java_home = %java_home.display(), "Configured Gradle Java home");
    Ok(JavaHomeOutcome::Added(java_home.to_path_buf()))
}

/// Contents of a generated `local.properties`
pub fn render_local_properties(sdk_dir: &Path) -> String {
    format!(
        "# This file was automatically generated by pwa-build\n\
         # Do not modify this file -- YOUR CHANGES WILL BE ERASED!\n\
         # This file should *NOT* be checked into Version Control Systems,\n\
         # as it contains information specific to your local configuration.\n\
         \n\
         # Location of the SDK. This is only used by Gradle.\n\
         sdk.dir={}\n",
        escape_path(sdk_dir)
    )
}

/// Overwrite `local.properties` with the SDK location
pub fn write_local_properties(local_properties: &Path, sdk_dir: &Path) -> Result<()> {
    std::fs::write(local_properties, render_local_properties(sdk_dir))?;
    Ok(())
}
