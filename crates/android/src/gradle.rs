//! Gradle wrapper invocations

use pwa_core::process::CommandSpec;
use std::path::{Path, PathBuf};

/// Debug APK produced by `assembleDebug`, relative to the project root
pub const DEBUG_APK: &str = "android/app/build/outputs/apk/debug/app-debug.apk";

/// File name of the wrapper script on this platform
pub fn wrapper_name() -> &'static str {
    if cfg!(windows) { "gradlew.bat" } else { "gradlew" }
}

/// Wrapper script inside the Android project
pub fn wrapper_path(android_dir: &Path) -> PathBuf {
    android_dir.join(wrapper_name())
}

/// Run a Gradle task through the wrapper with `android_dir` as working directory
pub fn task(android_dir: &Path, task: &str) -> CommandSpec {
    CommandSpec::new(wrapper_path(android_dir).display().to_string(), [task]).in_dir(android_dir)
}

/// Stop running daemons; output is captured
pub fn stop_daemons(android_dir: &Path) -> CommandSpec {
    task(android_dir, "--stop").captured()
}

/// Build the debug APK; output streams to the terminal
pub fn assemble_debug(android_dir: &Path) -> CommandSpec {
    task(android_dir, "assembleDebug")
}

/// Wrapper as typed in a shell opened in `android/`
fn shell_wrapper() -> &'static str {
    if cfg!(windows) { "gradlew.bat" } else { "./gradlew" }
}

/// Command a user can paste to build the APK by hand
pub fn build_command() -> String {
    format!("cd android && {} assembleDebug", shell_wrapper())
}

/// Command a user can paste to retry the Gradle step by hand
pub fn retry_command() -> String {
    let wrapper = shell_wrapper();
    format!("cd android && {wrapper} --stop && {wrapper} assembleDebug")
}
