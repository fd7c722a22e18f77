mod cli_modes;
mod render;
#[cfg(test)]
mod tests;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use dayline_core::Config;
use render::{ColorMode, RenderOptions, Renderer};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Journal bullets and location visits on a timeline of the day
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Prints the notes and locations directories
    #[arg(long, short, exclusive = true)]
    pub path: bool,
    /// Imports Google Takeout "Semantic Location History" JSON files
    /// (e.g. `dayline --import 2025_AUGUST.json 2025_SEPTEMBER.json`)
    #[arg(long, num_args(1..), exclusive = true)]
    pub import: Option<Vec<PathBuf>>,

    /// Day to show: `YYYY-MM-DD`, `today` or `yesterday`. Defaults to the
    /// date in the note's file name, or today.
    #[arg(long)]
    pub on: Option<String>,
    /// Reads the day from this Markdown note instead of the notes directory
    #[arg(long)]
    pub note: Option<PathBuf>,
    /// Reads location visits from this JSON file instead of the locations directory
    #[arg(long)]
    pub locations: Option<PathBuf>,

    /// Shows what was happening at a time of day (e.g. `14:30`, `2:30pm`)
    #[arg(long, conflicts_with = "scrub")]
    pub at: Option<String>,
    /// Shows what was happening at a scrubber position, 0 (06:00) to 100 (23:00)
    #[arg(long, allow_negative_numbers = true)]
    pub scrub: Option<f64>,
    /// Lists every bullet active at `--at`/`--scrub`, not just the first
    #[arg(long)]
    pub all: bool,

    /// Prints JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Enables debug logging (otherwise `RUST_LOG` is honoured)
    #[arg(long, short)]
    pub verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dayline: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // try_init: a subscriber may already be installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.date_format.clone(),
        use_color: cli.color.use_color(),
    }));

    if cli.path {
        renderer.print_info(&format!("notes: {}", config.notes_dir.display()));
        renderer.print_info(&format!("locations: {}", config.locations_dir.display()));
        return Ok(());
    }

    if let Some(files) = &cli.import {
        return cli_modes::import_mode(files, &config, &renderer);
    }

    let now = Local::now().naive_local();
    let day = cli_modes::load_day(&cli, &config, now.date())?;
    if cli.at.is_some() || cli.scrub.is_some() {
        cli_modes::query_mode(&cli, &day, &renderer)
    } else {
        cli_modes::show_mode(&cli, &day, now, &renderer)
    }
}
