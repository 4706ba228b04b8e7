//! pwa-build
//!
//! Stages the web assets, generates the Capacitor Android project, points
//! Gradle at a JDK and the Android SDK, and assembles a debug APK.

use anyhow::Result;
use clap::Parser;
use pwa_android::gradle::{self, DEBUG_APK};
use pwa_android::BuildOrchestrator;
use pwa_cli::output::{format_duration, Status};
use pwa_cli::report::report_error;
use pwa_core::config::{load_config, CONFIG_FILE};
use pwa_core::error::exit_codes;
use pwa_core::fs::resolve;
use pwa_core::process::SystemRunner;
use pwa_telemetry::{TelemetryConfig, Timer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pwa-build")]
#[command(about = "Build an Android debug APK from a PWA project")]
#[command(version)]
struct Cli {
    /// Project directory
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Config file, relative to the project directory
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Stop after preparing the Android project, without running Gradle
    #[arg(long)]
    skip_gradle: bool,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }
    Status::set_quiet(cli.quiet);
    pwa_telemetry::init_with_config(TelemetryConfig::for_verbosity(cli.verbose))?;
    tracing::debug!(session = pwa_telemetry::session_id(), "pwa-build started");

    let exit_code = match run(&cli) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => report_error(&e),
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let timer = Timer::start("build");
    Status::header("PWA Builder");

    let cwd = std::env::current_dir()?;
    let root = match &cli.dir {
        Some(dir) => resolve(&cwd, dir),
        None => cwd,
    };

    let config = load_config(&resolve(&root, &cli.config))?;
    Status::info(&format!("Configuration loaded for: {}", config.app_name));

    let report = BuildOrchestrator::new(&root, config, &SystemRunner)
        .skip_gradle(cli.skip_gradle)
        .run()?;

    let warnings = report.warnings().count();
    let elapsed = timer.stop();

    println!();
    if report.apk().is_some() {
        Status::success(&format!("Build complete in {}", format_duration(elapsed)));
        Status::info(&format!("APK location: {DEBUG_APK}"));
        Status::detail("To install on your device:");
        Status::detail(&format!("adb install {DEBUG_APK}"));
    } else {
        Status::success(&format!(
            "Android project prepared in {} (Gradle skipped)",
            format_duration(elapsed)
        ));
        Status::detail(&format!("Build it with: {}", gradle::build_command()));
    }
    if warnings > 0 {
        Status::warning(&format!("Finished with {warnings} warning(s):"));
        for (step, message) in report.warnings() {
            Status::hint(&format!("{step}: {message}"));
        }
    }

    Ok(())
}
