use super::ExportError;
use crate::models::CalculationResult;
use crate::time::seconds_to_pace;

/// Render a calculation result as two-column `field,value` CSV
pub fn render_csv(result: &CalculationResult) -> Result<String, ExportError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    let to_export_error = |e: ::csv::Error| ExportError::SerializationError(e.to_string());

    writer.write_record(["field", "value"]).map_err(to_export_error)?;
    for (field, value) in rows(result) {
        writer
            .write_record([field.as_str(), value.as_str()])
            .map_err(to_export_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::SerializationError(e.to_string()))
}

fn rows(result: &CalculationResult) -> Vec<(String, String)> {
    match result {
        CalculationResult::Zone {
            time_input,
            threshold_pace,
            zones,
            races,
        } => {
            let mut rows = vec![
                ("10K Time".to_string(), time_input.clone()),
                (
                    "Threshold Pace".to_string(),
                    format!("{}/km", seconds_to_pace(*threshold_pace)),
                ),
            ];
            rows.extend(
                zones
                    .iter()
                    .map(|z| {
                        (
                            z.name.clone(),
                            format!("{} – {} — {}", z.lower, z.upper, z.description),
                        )
                    }),
            );
            rows.extend(
                races
                    .iter()
                    .map(|r| (r.name.clone(), format!("{}/km ({})", r.pace, r.total_time()))),
            );
            rows
        }
        CalculationResult::Pace {
            distance_label,
            time,
            pace,
            ..
        } => vec![
            ("Distance".to_string(), distance_label.clone()),
            ("Time".to_string(), time.clone()),
            ("Pace".to_string(), format!("{}/km", pace)),
        ],
        CalculationResult::Time {
            distance_label,
            pace,
            total_time,
            ..
        } => vec![
            ("Distance".to_string(), distance_label.clone()),
            ("Pace".to_string(), format!("{}/km", pace)),
            ("Total Time".to_string(), total_time.clone()),
        ],
        CalculationResult::Distance {
            time,
            pace,
            distance_label,
            ..
        } => vec![
            ("Total Time".to_string(), time.clone()),
            ("Pace".to_string(), format!("{}/km", pace)),
            ("Distance".to_string(), distance_label.clone()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Calculator;
    use crate::models::CalculationRequest;

    #[test]
    fn test_time_csv() {
        let result = Calculator::compute(&CalculationRequest::Time {
            distance: "42.195".to_string(),
            pace: "6:00".to_string(),
        })
        .unwrap();

        assert_eq!(
            render_csv(&result).unwrap(),
            "field,value\nDistance,Marathon\nPace,6:00/km\nTotal Time,4:13:10\n"
        );
    }

    #[test]
    fn test_zone_csv_has_row_per_field() {
        let result = Calculator::compute(&CalculationRequest::Zone {
            time_10k: "40:00".to_string(),
        })
        .unwrap();

        let csv = render_csv(&result).unwrap();
        // header + 2 inputs + 7 zones + 4 races
        assert_eq!(csv.lines().count(), 14);
        assert!(csv.contains("Z1 – Recovery,5:36 – 5:00 — Recovery and active rest\n"));
        // descriptions containing commas are quoted
        assert!(csv.contains("Z4 – Threshold,\"4:04 – 3:48 — Lactate tolerance, race pace\"\n"));
        assert!(csv.contains("Half Marathon,4:07/km (1:26:55)"));
    }
}
