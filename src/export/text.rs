use crate::models::CalculationResult;
use crate::time::seconds_to_pace;
use std::fmt::Write;

/// Render a calculation result as the plain-text report used for copying.
///
/// Inputs come first, then every computed field, one labelled line each.
pub fn render_text(result: &CalculationResult) -> String {
    let mut text = String::new();

    // Writing into a String cannot fail
    let _ = write_report(&mut text, result);

    text
}

fn write_report(out: &mut String, result: &CalculationResult) -> std::fmt::Result {
    match result {
        CalculationResult::Zone {
            time_input,
            threshold_pace,
            zones,
            races,
        } => {
            writeln!(out, "RUNTOOLS - ZONE CALCULATOR")?;
            writeln!(out)?;
            writeln!(out, "10K Time: {}", time_input)?;
            writeln!(out, "Threshold Pace: {}/km", seconds_to_pace(*threshold_pace))?;
            writeln!(out)?;

            writeln!(out, "TRAINING ZONES")?;
            for zone in zones {
                writeln!(
                    out,
                    "{}: {} – {} — {}",
                    zone.name, zone.lower, zone.upper, zone.description
                )?;
            }

            writeln!(out)?;
            writeln!(out, "RACE PREDICTIONS")?;
            for race in races {
                writeln!(out, "{}: {}/km ({})", race.name, race.pace, race.total_time())?;
            }
        }
        CalculationResult::Pace {
            distance_label,
            time,
            pace,
            ..
        } => {
            writeln!(out, "RUNTOOLS - PACE CALCULATOR")?;
            writeln!(out)?;
            writeln!(out, "Distance: {}", distance_label)?;
            writeln!(out, "Time: {}", time)?;
            writeln!(out, "Pace: {}/km", pace)?;
        }
        CalculationResult::Time {
            distance_label,
            pace,
            total_time,
            ..
        } => {
            writeln!(out, "RUNTOOLS - TIME CALCULATOR")?;
            writeln!(out)?;
            writeln!(out, "Distance: {}", distance_label)?;
            writeln!(out, "Pace: {}/km", pace)?;
            writeln!(out, "Total Time: {}", total_time)?;
        }
        CalculationResult::Distance {
            time,
            pace,
            distance_label,
            ..
        } => {
            writeln!(out, "RUNTOOLS - DISTANCE CALCULATOR")?;
            writeln!(out)?;
            writeln!(out, "Total Time: {}", time)?;
            writeln!(out, "Pace: {}/km", pace)?;
            writeln!(out, "Distance: {}", distance_label)?;
        }
    }

    Ok(())
}
