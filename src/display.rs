//! Terminal rendering of calculation results
//!
//! This is the on-screen counterpart of the plain-text export: zone results
//! become tables, conversions become a short labelled block.

use crate::config::OutputSettings;
use crate::models::CalculationResult;
use colored::*;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Render a result for the terminal
pub fn render_display(result: &CalculationResult, settings: &OutputSettings) -> String {
    match result {
        CalculationResult::Zone {
            time_input,
            zones,
            races,
            ..
        } => {
            let threshold = result.threshold_pace_display().unwrap_or_default();

            let mut zone_table = Builder::default();
            if settings.show_descriptions {
                zone_table.push_record(["Zone", "Pace (/km)", "Purpose"]);
            } else {
                zone_table.push_record(["Zone", "Pace (/km)"]);
            }
            for zone in zones {
                let range = format!("{} – {}", zone.lower, zone.upper);
                if settings.show_descriptions {
                    zone_table.push_record([zone.name.clone(), range, zone.description.clone()]);
                } else {
                    zone_table.push_record([zone.name.clone(), range]);
                }
            }

            let mut race_table = Builder::default();
            race_table.push_record(["Race", "Pace (/km)", "Finish"]);
            for race in races {
                race_table.push_record([race.name.clone(), race.pace.clone(), race.total_time()]);
            }

            let zone_table = zone_table.build().with(Style::rounded()).to_string();
            let race_table = race_table.build().with(Style::rounded()).to_string();

            format!(
                "{}\n  10K Time: {}\n  Threshold Pace: {}/km\n\n{}\n{}\n\n{}\n{}\n",
                "Zone Calculator".green().bold(),
                time_input.bold(),
                threshold.bold(),
                "Training Zones".cyan().bold(),
                zone_table,
                "Race Predictions".cyan().bold(),
                race_table,
            )
        }
        CalculationResult::Pace {
            distance_label,
            time,
            pace,
            ..
        } => format!(
            "{}\n  Distance: {}\n  Time: {}\n  Pace: {}\n",
            "Pace Calculator".green().bold(),
            distance_label,
            time,
            format!("{}/km", pace).bold(),
        ),
        CalculationResult::Time {
            distance_label,
            pace,
            total_time,
            ..
        } => format!(
            "{}\n  Distance: {}\n  Pace: {}/km\n  Total Time: {}\n",
            "Time Calculator".green().bold(),
            distance_label,
            pace,
            total_time.bold(),
        ),
        CalculationResult::Distance {
            time,
            pace,
            distance_label,
            ..
        } => format!(
            "{}\n  Total Time: {}\n  Pace: {}/km\n  Distance: {}\n",
            "Distance Calculator".green().bold(),
            time,
            pace,
            distance_label.bold(),
        ),
    }
}
