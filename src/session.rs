//! Interactive calculator session
//!
//! Reads one command per line and keeps a single `Calculator` for the whole
//! session, so `show` and `export` act on the last successful result.

use crate::calculator::Calculator;
use crate::config::OutputSettings;
use crate::display::render_display;
use crate::export::ExportFormat;
use crate::models::{CalculationMode, CalculationRequest, DistancePreset};
use std::io::{self, BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  zone <10k-time>             training zones and race predictions
  pace <distance> <time>      pace for a distance and time
  time <distance> <pace>      finish time for a distance and pace
  distance <time> <pace>      distance covered at a pace
  mode <zone|pace|time|distance>  select a calculator
  calc <inputs...>            calculate with the selected calculator's inputs
  show                        show the last result
  export [text|json|csv]      print the last result for copying
  reset                       clear the last result
  help
  quit

Distances are in km, or one of 5k, 10k, half, marathon.";

/// One parsed session line
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Calculate(CalculationRequest),
    /// Raw inputs for whichever mode is selected
    Inputs(Vec<String>),
    Mode(CalculationMode),
    Show,
    Export(ExportFormat),
    Reset,
    Help,
    Quit,
}

/// Accept a preset name wherever a distance is expected
fn resolve_distance(arg: &str) -> String {
    match arg.parse::<DistancePreset>() {
        Ok(preset) => preset.km().to_string(),
        Err(_) => arg.to_string(),
    }
}

impl SessionCommand {
    /// Parse a command line. `Ok(None)` means a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match (command.to_lowercase().as_str(), args) {
            ("zone" | "zones", [time]) => SessionCommand::Calculate(CalculationRequest::Zone {
                time_10k: time.to_string(),
            }),
            ("pace", [distance, time]) => SessionCommand::Calculate(CalculationRequest::Pace {
                distance: resolve_distance(distance),
                time: time.to_string(),
            }),
            ("time", [distance, pace]) => SessionCommand::Calculate(CalculationRequest::Time {
                distance: resolve_distance(distance),
                pace: pace.to_string(),
            }),
            ("distance", [time, pace]) => {
                SessionCommand::Calculate(CalculationRequest::Distance {
                    time: time.to_string(),
                    pace: pace.to_string(),
                })
            }
            ("calc" | "go", inputs) if !inputs.is_empty() => {
                SessionCommand::Inputs(inputs.iter().map(|input| input.to_string()).collect())
            }
            ("mode", [mode]) => SessionCommand::Mode(mode.parse()?),
            ("show", []) => SessionCommand::Show,
            ("export" | "copy", []) => SessionCommand::Export(ExportFormat::Text),
            ("export" | "copy", [format]) => {
                SessionCommand::Export(format.parse().map_err(|e| format!("{}", e))?)
            }
            ("reset", []) => SessionCommand::Reset,
            ("help" | "?", _) => SessionCommand::Help,
            ("quit" | "exit", []) => SessionCommand::Quit,
            (other, _) => {
                return Err(format!("Unrecognized command '{}' (try 'help')", other));
            }
        };

        Ok(Some(command))
    }
}

/// Run a session until `quit` or end of input
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    settings: &OutputSettings,
) -> io::Result<()> {
    let mut calculator = Calculator::new();

    writeln!(output, "runtools session, type 'help' for commands")?;

    for line in input.lines() {
        let line = line?;

        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };
        debug!(?command, "Session command");

        match command {
            SessionCommand::Calculate(request) => match calculator.calculate(request) {
                Ok(result) => write!(output, "{}", render_display(result, settings))?,
                Err(err) => writeln!(output, "{}", err.user_message())?,
            },
            SessionCommand::Inputs(mut inputs) => {
                if matches!(calculator.mode(), CalculationMode::Pace | CalculationMode::Time) {
                    if let Some(distance) = inputs.first_mut() {
                        *distance = resolve_distance(distance);
                    }
                }
                let inputs: Vec<&str> = inputs.iter().map(String::as_str).collect();
                match calculator.calculate_inputs(&inputs) {
                    Ok(result) => write!(output, "{}", render_display(result, settings))?,
                    Err(err) => writeln!(output, "{}", err.user_message())?,
                }
            }
            SessionCommand::Mode(mode) => {
                calculator.set_mode(mode);
                writeln!(output, "Mode: {}", mode)?;
            }
            SessionCommand::Show => match calculator.current() {
                Some(result) => write!(output, "{}", render_display(result, settings))?,
                None => writeln!(output, "No result yet")?,
            },
            SessionCommand::Export(format) => match calculator.export(format) {
                Ok(text) => writeln!(output, "{}", text.trim_end())?,
                Err(err) => writeln!(output, "{}", err.user_message())?,
            },
            SessionCommand::Reset => {
                calculator.reset();
                writeln!(output, "Cleared")?;
            }
            SessionCommand::Help => writeln!(output, "{}", HELP)?,
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}
