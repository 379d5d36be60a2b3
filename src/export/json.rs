use super::ExportError;
use crate::models::CalculationResult;

/// Render a calculation result as pretty-printed JSON
pub fn render_json(result: &CalculationResult) -> Result<String, ExportError> {
    serde_json::to_string_pretty(result).map_err(|e| ExportError::SerializationError(e.to_string()))
}

/// Read back a result previously rendered with [`render_json`]
pub fn parse_json(json: &str) -> Result<CalculationResult, ExportError> {
    serde_json::from_str(json).map_err(|e| ExportError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Calculator;
    use crate::models::CalculationRequest;

    #[test]
    fn test_zone_json_shape() {
        let result = Calculator::compute(&CalculationRequest::Zone {
            time_10k: "50:00".to_string(),
        })
        .unwrap();

        let json = render_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["mode"], "zone");
        assert_eq!(value["time_input"], "50:00");
        assert_eq!(value["zones"].as_array().unwrap().len(), 7);
        assert_eq!(value["races"][3]["name"], "Marathon");
    }

    #[test]
    fn test_json_reads_back() {
        let result = Calculator::compute(&CalculationRequest::Distance {
            time: "42:00".to_string(),
            pace: "4:12".to_string(),
        })
        .unwrap();

        let json = render_json(&result).unwrap();
        assert_eq!(parse_json(&json).unwrap(), result);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_json("{\"mode\": \"sprint\"}"),
            Err(ExportError::SerializationError(_))
        ));
    }
}
