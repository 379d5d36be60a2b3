use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io;
use std::path::PathBuf;

use runtools::config::AppConfig;
use runtools::display::render_display;
use runtools::export::{self, ExportFormat};
use runtools::logging::init_logging;
use runtools::session::run_session;
use runtools::{CalculationRequest, Calculator, DistancePreset};

/// RunTools - Running Pace Calculator
///
/// Derives training pace zones and race predictions from a 10K time, and
/// converts between distance, time and pace.
#[derive(Parser)]
#[command(name = "runtools")]
#[command(author = "RunTools Contributors")]
#[command(version)]
#[command(about = "Running pace, zone and race time calculator", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity of log output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print the exportable report in this format instead of the display
    #[arg(short = 'f', long, global = true)]
    format: Option<ExportFormat>,

    /// Write the exportable report to a file
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Training zones and race predictions from a 10K time
    Zone {
        /// 10K time (mm:ss or h:mm:ss)
        time_10k: String,
    },

    /// Pace needed to cover a distance in a given time
    Pace {
        /// Distance in km
        #[arg(short, long, required_unless_present = "preset", conflicts_with = "preset")]
        distance: Option<String>,

        /// Standard distance (5k, 10k, half, marathon)
        #[arg(short, long)]
        preset: Option<DistancePreset>,

        /// Finish time (mm:ss or h:mm:ss)
        time: String,
    },

    /// Finish time for a distance at a given pace
    Time {
        /// Distance in km
        #[arg(short, long, required_unless_present = "preset", conflicts_with = "preset")]
        distance: Option<String>,

        /// Standard distance (5k, 10k, half, marathon)
        #[arg(short, long)]
        preset: Option<DistancePreset>,

        /// Pace per km (mm:ss)
        pace: String,
    },

    /// Distance covered in a given time at a given pace
    Distance {
        /// Elapsed time (mm:ss or h:mm:ss)
        time: String,

        /// Pace per km (mm:ss)
        pace: String,
    },

    /// Interactive session reading commands from stdin
    Session,
}

fn distance_input(distance: Option<String>, preset: Option<DistancePreset>) -> String {
    match preset {
        Some(preset) => preset.km().to_string(),
        None => distance.unwrap_or_default(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref());
    config.logging.level = config.logging.level.raised_by(cli.verbose);
    if cli.no_color {
        config.output.color = false;
    }
    if !config.output.color {
        colored::control::set_override(false);
    }

    init_logging(&config.logging)?;

    let request = match cli.command {
        Commands::Zone { time_10k } => CalculationRequest::Zone { time_10k },
        Commands::Pace {
            distance,
            preset,
            time,
        } => CalculationRequest::Pace {
            distance: distance_input(distance, preset),
            time,
        },
        Commands::Time {
            distance,
            preset,
            pace,
        } => CalculationRequest::Time {
            distance: distance_input(distance, preset),
            pace,
        },
        Commands::Distance { time, pace } => CalculationRequest::Distance { time, pace },
        Commands::Session => {
            let stdin = io::stdin();
            return run_session(stdin.lock(), io::stdout(), &config.output)
                .context("Session terminated unexpectedly");
        }
    };

    let mut calculator = Calculator::new();
    let result = match calculator.calculate(request) {
        Ok(result) => result,
        Err(err) if err.is_input_error() => {
            eprintln!("{} {}", "✗".red().bold(), err.user_message().red());
            std::process::exit(2);
        }
        Err(err) => return Err(err.into()),
    };

    if let Some(path) = &cli.output {
        let format = cli.format.unwrap_or(config.output.format);
        export::export_to_file(result, format, path)
            .with_context(|| format!("Failed to export to {}", path.display()))?;
        eprintln!(
            "{}",
            format!("✓ Results exported to {}", path.display()).green()
        );
    } else if let Some(format) = cli.format {
        print!("{}", export::render(result, format)?);
    } else {
        print!("{}", render_display(result, &config.output));
    }

    Ok(())
}
