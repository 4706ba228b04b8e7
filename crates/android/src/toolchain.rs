//! JDK and Android SDK discovery
//!
//! Both are found through ordered [`ProbeList`]s: paths from
//! `build-config.json` first, then the environment (`JAVA_HOME`,
//! `ANDROID_HOME`, `ANDROID_SDK_ROOT`), then well-known install locations
//! for Windows, macOS and Linux.

use pwa_core::config::AndroidConfig;
use pwa_core::probe::{current_username, ProbeList};
use std::path::PathBuf;

/// Well-known JDK locations, in probe order
pub const JDK_CANDIDATES: [&str; 5] = [
    r"C:\Program Files\Android\Android Studio\jbr",
    r"C:\Program Files\Java\jdk-17",
    r"C:\Program Files\Java\jdk-11",
    "/usr/lib/jvm/java-17-openjdk-amd64",
    "/usr/lib/jvm/java-11-openjdk-amd64",
];

/// Environment variables naming an Android SDK, in probe order
pub const SDK_ENV_VARS: [&str; 2] = ["ANDROID_HOME", "ANDROID_SDK_ROOT"];

/// Where Android Studio is downloaded from
pub const ANDROID_STUDIO_URL: &str = "https://developer.android.com/studio";

/// Well-known Android SDK locations for `username`, in probe order
pub fn sdk_candidates(username: &str) -> Vec<String> {
    vec![
        format!(r"C:\Users\{username}\AppData\Local\Android\Sdk"),
        r"C:\Android\Sdk".to_string(),
        r"C:\Program Files\Android\Sdk".to_string(),
        r"C:\Program Files (x86)\Android\Sdk".to_string(),
        format!("/Users/{username}/Library/Android/sdk"),
        format!("/home/{username}/Android/Sdk"),
    ]
}

/// JDK probe list: configured paths, then `java_home`, then the defaults
pub fn jdk_probes(configured: &[String], java_home: Option<PathBuf>) -> ProbeList {
    ProbeList::new("jdk")
        .with_candidates(configured.iter().map(PathBuf::from))
        .with_candidates(java_home)
        .with_candidates(JDK_CANDIDATES)
}

/// SDK probe list: configured paths, then `env_sdks`, then the defaults
pub fn sdk_probes(configured: &[String], env_sdks: Vec<PathBuf>, username: &str) -> ProbeList {
    ProbeList::new("android-sdk")
        .with_candidates(configured.iter().map(PathBuf::from))
        .with_candidates(env_sdks)
        .with_candidates(sdk_candidates(username))
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Probe lists used by the build
#[derive(Debug, Clone)]
pub struct Toolchain {
    /// JDK candidates
    pub jdk: ProbeList,
    /// Android SDK candidates
    pub sdk: ProbeList,
}

impl Toolchain {
    /// Probe lists for this machine: config overrides, environment, then
    /// the built-in locations for the current user
    pub fn detect(android: &AndroidConfig) -> Self {
        let env_sdks = SDK_ENV_VARS.iter().filter_map(|name| env_path(name)).collect();
        Self {
            jdk: jdk_probes(&android.java_home_candidates, env_path("JAVA_HOME")),
            sdk: sdk_probes(&android.sdk_candidates, env_sdks, &current_username()),
        }
    }
}
