//! create-pwa-app
//!
//! Asks for a project name, app name, app ID and description, then copies
//! the PWA template into a new directory and stamps those values into it.

use anyhow::Result;
use clap::Parser;
use pwa_cli::output::{format_count, Status};
use pwa_cli::prompt::{Prompt, ScriptedPrompt, TerminalPrompt};
use pwa_cli::report::report_error;
use pwa_core::error::exit_codes;
use pwa_scaffold::template::locate_template;
use pwa_scaffold::{collect_options, Presets, ProjectCreator};
use pwa_telemetry::TelemetryConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "create-pwa-app")]
#[command(about = "Create a new PWA project ready to package for Android")]
#[command(version)]
struct Cli {
    /// Project (directory) name
    #[arg(long)]
    name: Option<String>,

    /// App display name
    #[arg(long)]
    app_name: Option<String>,

    /// App ID in reverse-domain form, e.g. com.example.myapp
    #[arg(long)]
    app_id: Option<String>,

    /// Short app description
    #[arg(long)]
    description: Option<String>,

    /// Use defaults for every value not given on the command line
    #[arg(short, long)]
    yes: bool,

    /// Template directory
    #[arg(long, env = "PWA_TEMPLATE_DIR")]
    template: Option<PathBuf>,

    /// Directory to create the project in
    #[arg(long)]
    dir: Option<PathBuf>,

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
    tracing::debug!(session = pwa_telemetry::session_id(), "create-pwa-app started");

    let exit_code = match run(&cli) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => report_error(&e),
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    pwa_telemetry::timed_span!("create_project");
    Status::header("Create PWA App");

    let presets = Presets {
        project_name: cli.name.clone(),
        app_name: cli.app_name.clone(),
        app_id: cli.app_id.clone(),
        description: cli.description.clone(),
    };
    let mut prompt: Box<dyn Prompt> = if cli.yes {
        Box::new(ScriptedPrompt::new(Vec::<String>::new()))
    } else {
        Box::new(TerminalPrompt::new())
    };
    let options = collect_options(prompt.as_mut(), &presets)?;

    let cwd = std::env::current_dir()?;
    let base = cli.dir.clone().unwrap_or_else(|| cwd.clone());
    let template = locate_template(cli.template.as_deref(), &cwd);
    tracing::debug!(template = %template.display(), base = %base.display(), "Resolved directories");

    let creator = ProjectCreator::new(template, base);
    let created = creator.create(&options)?;

    Status::success(&format!("Project created at {}", created.path.display()));
    Status::detail(&format!(
        "{} copied, {} updated",
        format_count(created.files_copied, "file", "files"),
        format_count(created.patched.len(), "file", "files")
    ));

    Status::subheader("Next steps:");
    for step in [
        format!("cd {}", options.project_name),
        "npm install".to_string(),
        "npm run serve      # preview in the browser".to_string(),
        "npm run build      # build the Android APK".to_string(),
    ] {
        Status::detail(&step);
    }

    Ok(())
}
