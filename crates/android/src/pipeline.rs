//! The Android build pipeline
//!
//! Steps run in a fixed order. A step either fails the build (config
//! generation, Capacitor sync, APK assembly) or reports a
//! [`StepOutcome`] and lets the build continue. Outcomes are collected in a
//! [`BuildReport`].

use crate::capacitor::{self, CAPACITOR_CONFIG_FILE};
use crate::gradle::{self, DEBUG_APK};
use crate::launcher_icons::{install_launcher_icons, IconInstall};
use crate::main_activity::write_main_activity;
use crate::properties::{configure_java_home, write_local_properties, JavaHomeOutcome};
use crate::staging::{self, CopySummary, ANDROID_DIR};
use crate::toolchain::{Toolchain, ANDROID_STUDIO_URL};
use pwa_cli::output::{format_count, Status};
use pwa_cli::progress;
use pwa_core::config::ProjectConfig;
use pwa_core::error::{Error, ErrorCode, Result, ResultExt};
use pwa_core::process::{CommandResult, CommandRunner};
use std::fmt;
use std::path::{Path, PathBuf};

/// Pipeline steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStep {
    Clean,
    Stage,
    CopyFiles,
    CopyFolders,
    CapacitorConfig,
    AddPlatform,
    Sync,
    JavaHome,
    AndroidSdk,
    MainActivity,
    LauncherIcons,
    Gradle,
}

impl BuildStep {
    /// Every step, in order
    pub const ALL: [BuildStep; 12] = [
        BuildStep::Clean,
        BuildStep::Stage,
        BuildStep::CopyFiles,
        BuildStep::CopyFolders,
        BuildStep::CapacitorConfig,
        BuildStep::AddPlatform,
        BuildStep::Sync,
        BuildStep::JavaHome,
        BuildStep::AndroidSdk,
        BuildStep::MainActivity,
        BuildStep::LauncherIcons,
        BuildStep::Gradle,
    ];

    /// Human-readable step title
    pub fn title(&self) -> &'static str {
        match self {
            BuildStep::Clean => "Cleaning generated folders",
            BuildStep::Stage => "Preparing staging directory",
            BuildStep::CopyFiles => "Copying web files",
            BuildStep::CopyFolders => "Copying web folders",
            BuildStep::CapacitorConfig => "Generating Capacitor configuration",
            BuildStep::AddPlatform => "Adding Android platform",
            BuildStep::Sync => "Syncing with Capacitor",
            BuildStep::JavaHome => "Configuring Gradle Java home",
            BuildStep::AndroidSdk => "Configuring Android SDK",
            BuildStep::MainActivity => "Configuring MainActivity",
            BuildStep::LauncherIcons => "Installing launcher icons",
            BuildStep::Gradle => "Building debug APK",
        }
    }
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Result of a step that did not fail the build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Completed
    Done(String),
    /// Nothing to do
    Skipped(String),
    /// Problem reported, build continues
    Warned(String),
}

impl StepOutcome {
    /// Outcome message
    pub fn message(&self) -> &str {
        match self {
            StepOutcome::Done(msg) | StepOutcome::Skipped(msg) | StepOutcome::Warned(msg) => msg,
        }
    }

    /// Whether this outcome is a warning
    pub fn is_warning(&self) -> bool {
        matches!(self, StepOutcome::Warned(_))
    }

    fn print(&self) {
        match self {
            StepOutcome::Done(msg) => Status::success(msg),
            StepOutcome::Skipped(msg) => Status::info(msg),
            StepOutcome::Warned(msg) => Status::warning(msg),
        }
    }
}

/// Outcomes of a completed build
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    steps: Vec<(BuildStep, StepOutcome)>,
    apk: Option<PathBuf>,
}

impl BuildReport {
    fn record(&mut self, step: BuildStep, outcome: StepOutcome) {
        self.steps.push((step, outcome));
    }

    /// Outcomes in execution order
    pub fn steps(&self) -> &[(BuildStep, StepOutcome)] {
        &self.steps
    }

    /// Outcome of `step`, if it ran
    pub fn outcome(&self, step: BuildStep) -> Option<&StepOutcome> {
        self.steps.iter().find(|(s, _)| *s == step).map(|(_, o)| o)
    }

    /// Steps that finished with a warning
    pub fn warnings(&self) -> impl Iterator<Item = (BuildStep, &str)> + '_ {
        self.steps
            .iter()
            .filter(|(_, o)| o.is_warning())
            .map(|(s, o)| (*s, o.message()))
    }

    /// The Android SDK was not found, so `sdk.dir` was never written
    pub fn sdk_missing(&self) -> bool {
        self.outcome(BuildStep::AndroidSdk)
            .is_some_and(StepOutcome::is_warning)
    }

    /// Built APK, when the Gradle step ran
    pub fn apk(&self) -> Option<&Path> {
        self.apk.as_deref()
    }
}

/// Runs the build for one project directory
pub struct BuildOrchestrator<'a> {
    root: PathBuf,
    config: ProjectConfig,
    runner: &'a dyn CommandRunner,
    toolchain: Toolchain,
    skip_gradle: bool,
}

impl<'a> BuildOrchestrator<'a> {
    /// Orchestrator for the project at `root`, probing this machine for
    /// the JDK and SDK
    pub fn new(root: impl Into<PathBuf>, config: ProjectConfig, runner: &'a dyn CommandRunner) -> Self {
        let toolchain = Toolchain::detect(&config.android);
        Self {
            root: root.into(),
            config,
            runner,
            toolchain,
            skip_gradle: false,
        }
    }

    /// Replace the JDK/SDK probe lists
    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = toolchain;
        self
    }

    /// Stop before the Gradle step
    pub fn skip_gradle(mut self, skip: bool) -> Self {
        self.skip_gradle = skip;
        self
    }

    fn staging_dir(&self) -> PathBuf {
        self.root.join(&self.config.web_dir)
    }

    fn android_dir(&self) -> PathBuf {
        self.root.join(ANDROID_DIR)
    }

    fn steps(&self) -> Vec<BuildStep> {
        BuildStep::ALL
            .into_iter()
            .filter(|step| !(self.skip_gradle && *step == BuildStep::Gradle))
            .collect()
    }

    /// Run every step. Returns the first fatal error. An invalid config is
    /// rejected before anything on disk is touched.
    pub fn run(&self) -> Result<BuildReport> {
        self.config.validate()?;
        let steps = self.steps();
        let mut report = BuildReport::default();

        for (index, step) in steps.iter().enumerate() {
            Status::step(index + 1, steps.len(), step.title());
            let _span = tracing::info_span!("build_step", step = ?step).entered();

            let outcome = self.run_step(*step, &report)?;
            outcome.print();
            tracing::debug!(step = ?step, outcome = ?outcome, "Step finished");
            report.record(*step, outcome);
        }

        if !self.skip_gradle {
            report.apk = Some(self.root.join(DEBUG_APK));
        }
        Ok(report)
    }

    fn run_step(&self, step: BuildStep, report: &BuildReport) -> Result<StepOutcome> {
        match step {
            BuildStep::Clean => Ok(self.clean()),
            BuildStep::Stage => self.stage(),
            BuildStep::CopyFiles => self.copy_files(),
            BuildStep::CopyFolders => self.copy_folders(),
            BuildStep::CapacitorConfig => self.capacitor_config(),
            BuildStep::AddPlatform => Ok(self.add_platform()),
            BuildStep::Sync => self.sync(),
            BuildStep::JavaHome => Ok(self.java_home()),
            BuildStep::AndroidSdk => Ok(self.android_sdk()),
            BuildStep::MainActivity => Ok(self.main_activity()),
            BuildStep::LauncherIcons => Ok(self.launcher_icons()),
            BuildStep::Gradle => self.gradle(report),
        }
    }

    fn clean(&self) -> StepOutcome {
        match staging::clean(&self.root, &self.config.web_dir) {
            Ok(removed) if removed.is_empty() => StepOutcome::Skipped("Nothing to clean".to_string()),
            Ok(removed) => {
                let names: Vec<String> = removed
                    .iter()
                    .filter_map(|p| p.file_name())
                    .map(|n| format!("{}/", n.to_string_lossy()))
                    .collect();
                StepOutcome::Done(format!("Removed {}", names.join(", ")))
            }
            Err(e) => StepOutcome::Warned(format!("Clean warning: {}", e.message)),
        }
    }

    fn stage(&self) -> Result<StepOutcome> {
        staging::recreate(&self.staging_dir()).context("While creating the staging directory")?;
        Ok(StepOutcome::Done(format!("Created {}/", self.config.web_dir)))
    }

    fn copy_outcome(summary: CopySummary, singular: &str, plural: &str, suffix: &str) -> StepOutcome {
        for copied in &summary.copied {
            Status::detail(&format!("Copied {copied}{suffix}"));
        }
        let copied = format_count(summary.copied.len(), singular, plural);
        if summary.has_missing() {
            let missing: Vec<String> = summary.missing.iter().map(|m| format!("{m}{suffix}")).collect();
            StepOutcome::Warned(format!("Copied {copied}; missing {} (skipped)", missing.join(", ")))
        } else {
            StepOutcome::Done(format!("Copied {copied}"))
        }
    }

    fn copy_files(&self) -> Result<StepOutcome> {
        let summary = staging::copy_files(&self.root, &self.staging_dir(), &self.config.files_to_copy)
            .context("While copying web files")?;
        Ok(Self::copy_outcome(summary, "file", "files", ""))
    }

    fn copy_folders(&self) -> Result<StepOutcome> {
        let summary = staging::copy_folders(&self.root, &self.staging_dir(), &self.config.folders_to_copy)
            .context("While copying web folders")?;
        Ok(Self::copy_outcome(summary, "folder", "folders", "/"))
    }

    fn capacitor_config(&self) -> Result<StepOutcome> {
        let path = self.root.join(CAPACITOR_CONFIG_FILE);
        std::fs::write(&path, capacitor::render_capacitor_config(&self.config))
            .map_err(|e| {
                Error::platform(ErrorCode::CapacitorError, "Failed to generate Capacitor config")
                    .with_context(e.to_string())
                    .with_source(e)
            })?;
        Ok(StepOutcome::Done(format!("{CAPACITOR_CONFIG_FILE} generated")))
    }

    fn run_in_root(&self, spec: pwa_core::process::CommandSpec) -> Result<CommandResult> {
        self.runner.run(&spec.in_dir(&self.root))
    }

    fn add_platform(&self) -> StepOutcome {
        match self.run_in_root(capacitor::add_platform()) {
            Ok(result) if result.success => StepOutcome::Done("Android platform added".to_string()),
            Ok(result) => StepOutcome::Warned(format!(
                "Android platform may already exist (exit code {})",
                result.exit_code
            )),
            Err(e) => StepOutcome::Warned(format!("Android platform may already exist: {}", e.message)),
        }
    }

    fn sync(&self) -> Result<StepOutcome> {
        let result = self
            .run_in_root(capacitor::sync_platform())
            .with_suggestion("Install dependencies with `npm install` and retry")?;
        if !result.success {
            return Err(
                Error::platform(ErrorCode::CapacitorError, "Capacitor sync failed")
                    .with_context(format!("npx cap sync android exited with code {}", result.exit_code))
                    .with_suggestion("Install dependencies with `npm install` and retry"),
            );
        }
        Ok(StepOutcome::Done("Capacitor sync complete".to_string()))
    }

    fn java_home(&self) -> StepOutcome {
        let gradle_properties = self.android_dir().join("gradle.properties");
        let java_home = self.toolchain.jdk.resolve();
        match configure_java_home(&gradle_properties, java_home.as_deref()) {
            Ok(JavaHomeOutcome::Added(path)) => {
                StepOutcome::Done(format!("Added Java home: {}", path.display()))
            }
            Ok(JavaHomeOutcome::AlreadyConfigured) => {
                StepOutcome::Skipped("Java home already configured".to_string())
            }
            Ok(JavaHomeOutcome::NotFound) => {
                StepOutcome::Warned("No JDK found; Gradle will use its default Java".to_string())
            }
            Err(e) => StepOutcome::Warned(format!("Could not configure gradle.properties: {}", e.message)),
        }
    }

    fn android_sdk(&self) -> StepOutcome {
        let Some(sdk) = self.toolchain.sdk.resolve() else {
            Status::error("Android SDK not found. Please install Android Studio and SDK.");
            Status::hint("Common locations:");
            for candidate in self.toolchain.sdk.candidates() {
                Status::hint(&format!("  - {}", candidate.display()));
            }
            Status::hint(&format!("Install Android Studio from: {ANDROID_STUDIO_URL}"));
            return StepOutcome::Warned("Android SDK not found; local.properties not written".to_string());
        };

        let local_properties = self.android_dir().join("local.properties");
        match write_local_properties(&local_properties, &sdk) {
            Ok(()) => StepOutcome::Done(format!("Android SDK configured: {}", sdk.display())),
            Err(e) => StepOutcome::Warned(format!("Could not configure Android SDK: {}", e.message)),
        }
    }

    fn main_activity(&self) -> StepOutcome {
        match write_main_activity(&self.android_dir(), &self.config) {
            Ok(path) => {
                Status::detail(&path.display().to_string());
                StepOutcome::Done("MainActivity configured with plugins".to_string())
            }
            Err(e) => StepOutcome::Warned(format!("Could not configure MainActivity: {}", e.message)),
        }
    }

    fn launcher_icons(&self) -> StepOutcome {
        match install_launcher_icons(&self.root, &self.android_dir()) {
            Ok(IconInstall::NotGenerated) => StepOutcome::Skipped(
                "No generated launcher icons (run pwa-icons first to use your own)".to_string(),
            ),
            Ok(IconInstall::Installed(buckets)) => StepOutcome::Done(format!(
                "Installed {}",
                format_count(buckets.len(), "icon density", "icon densities")
            )),
            Err(e) => StepOutcome::Warned(format!("Could not install launcher icons: {}", e.message)),
        }
    }

    fn gradle(&self, report: &BuildReport) -> Result<StepOutcome> {
        let android_dir = self.android_dir();

        let spinner = progress::spinner("Stopping Gradle daemons...");
        let stopped = self.runner.run(&gradle::stop_daemons(&android_dir));
        spinner.finish_and_clear();
        match stopped {
            Ok(result) if !result.success => {
                tracing::debug!(
                    exit_code = result.exit_code,
                    output = %result.combined_output(),
                    "gradlew --stop failed (ignored)"
                );
            }
            Err(e) => tracing::debug!(error = %e.message, "gradlew --stop failed (ignored)"),
            Ok(_) => {}
        }

        Status::detail("Building debug APK...");
        let failure = match self.runner.run(&gradle::assemble_debug(&android_dir)) {
            Ok(result) if result.success => None,
            Ok(result) => Some(format!("gradlew assembleDebug exited with code {}", result.exit_code)),
            Err(e) => Some(e.to_string()),
        };

        if let Some(detail) = failure {
            let context = if report.sdk_missing() {
                format!("{detail}; the Android SDK was not found, so local.properties has no sdk.dir")
            } else {
                detail
            };
            return Err(Error::platform(ErrorCode::GradleError, "APK build failed")
                .with_context(context)
                .with_suggestion(format!("Try running: {}", gradle::retry_command())));
        }

        Ok(StepOutcome::Done("APK build complete".to_string()))
    }
}
