//! pwa-icons
//!
//! Generates the PWA icon set and Android launcher icons from the source
//! icon named in `build-config.json`, then rewrites the manifest's icon list.

use anyhow::Result;
use clap::Parser;
use pwa_cli::output::{format_count, Status};
use pwa_cli::progress;
use pwa_cli::report::report_error;
use pwa_core::config::{load_config, ProjectConfig, CONFIG_FILE};
use pwa_core::error::exit_codes;
use pwa_core::fs::resolve;
use pwa_image::{update_manifest, IconGenerator, ManifestSeed, ANDROID_ICONS_DIR, PWA_ICONS_DIR};
use pwa_telemetry::TelemetryConfig;
use std::path::PathBuf;

/// Manifest rewritten with the new icon list
const MANIFEST_FILE: &str = "manifest.json";

#[derive(Parser)]
#[command(name = "pwa-icons")]
#[command(about = "Generate PWA and Android launcher icons")]
#[command(version)]
struct Cli {
    /// Project directory
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Config file, relative to the project directory
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

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
    tracing::debug!(session = pwa_telemetry::session_id(), "pwa-icons started");

    let exit_code = match run(&cli) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => report_error(&e),
    };

    std::process::exit(exit_code);
}

fn manifest_seed(config: &ProjectConfig) -> ManifestSeed {
    ManifestSeed {
        name: config.app_name.clone(),
        description: config.app_description.clone(),
        theme_color: config.theme_color.clone(),
        background_color: config.background_color.clone(),
    }
}

fn run(cli: &Cli) -> Result<()> {
    pwa_telemetry::timed_span!("generate_icons");
    Status::header("PWA Icon Generator");

    let cwd = std::env::current_dir()?;
    let root = match &cli.dir {
        Some(dir) => resolve(&cwd, dir),
        None => cwd,
    };
    let config = load_config(&resolve(&root, &cli.config))?;

    let generator = IconGenerator::new(&root, &config.source_icon);
    generator.check_source().map_err(pwa_core::Error::from)?;
    Status::info(&format!("Source icon: {}", config.source_icon));

    let plan = generator.plan();
    let pb = progress::progress_bar(plan.len() as u64, "Generating icons");
    let written = match generator.generate(|_| pb.inc(1)) {
        Ok(written) => written,
        Err(e) => {
            progress::finish_error(&pb, "Icon generation failed");
            return Err(pwa_core::Error::from(e).into());
        }
    };
    progress::finish_success(&pb, &format_count(written.len(), "icon", "icons"));

    Status::success(&format!("PWA icons written to {PWA_ICONS_DIR}/"));
    Status::success(&format!("Android launcher icons written to {ANDROID_ICONS_DIR}/"));

    let update = update_manifest(&root.join(MANIFEST_FILE), &manifest_seed(&config))
        .map_err(pwa_core::Error::from)?;
    if update.created {
        Status::success(&format!("Created {MANIFEST_FILE} with {} icons", update.icons));
    } else {
        Status::success(&format!("Updated {MANIFEST_FILE} with {} icons", update.icons));
    }

    Ok(())
}
