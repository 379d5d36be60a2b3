use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::time::{seconds_to_pace, seconds_to_time};

/// Calculator modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    /// Training zones and race predictions from a 10K time
    #[default]
    Zone,
    /// Pace from distance and time
    Pace,
    /// Finish time from distance and pace
    Time,
    /// Distance from time and pace
    Distance,
}

impl CalculationMode {
    pub const ALL: [CalculationMode; 4] = [
        CalculationMode::Zone,
        CalculationMode::Pace,
        CalculationMode::Time,
        CalculationMode::Distance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationMode::Zone => "zone",
            CalculationMode::Pace => "pace",
            CalculationMode::Time => "time",
            CalculationMode::Distance => "distance",
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CalculationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zone" | "zones" => Ok(CalculationMode::Zone),
            "pace" => Ok(CalculationMode::Pace),
            "time" => Ok(CalculationMode::Time),
            "distance" => Ok(CalculationMode::Distance),
            _ => Err(format!("Invalid calculation mode: {}", s)),
        }
    }
}

/// Standard race distances offered as presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistancePreset {
    FiveK,
    TenK,
    HalfMarathon,
    Marathon,
}

impl DistancePreset {
    pub const ALL: [DistancePreset; 4] = [
        DistancePreset::FiveK,
        DistancePreset::TenK,
        DistancePreset::HalfMarathon,
        DistancePreset::Marathon,
    ];

    /// Distance in kilometers
    pub fn km(&self) -> Decimal {
        match self {
            DistancePreset::FiveK => dec!(5),
            DistancePreset::TenK => dec!(10),
            DistancePreset::HalfMarathon => dec!(21.0975),
            DistancePreset::Marathon => dec!(42.195),
        }
    }

    /// Common name used as the distance label
    pub fn name(&self) -> &'static str {
        match self {
            DistancePreset::FiveK => "5K",
            DistancePreset::TenK => "10K",
            DistancePreset::HalfMarathon => "Half Marathon",
            DistancePreset::Marathon => "Marathon",
        }
    }

    /// Find the preset with exactly this distance
    pub fn from_km(km: Decimal) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.km() == km)
    }
}

impl fmt::Display for DistancePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DistancePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "5k" | "5" => Ok(DistancePreset::FiveK),
            "10k" | "10" => Ok(DistancePreset::TenK),
            "half" | "halfmarathon" | "21.0975" => Ok(DistancePreset::HalfMarathon),
            "marathon" | "full" | "42.195" => Ok(DistancePreset::Marathon),
            _ => Err(format!("Invalid distance preset: {}", s)),
        }
    }
}

/// Label a distance for display: the preset name when it matches one,
/// otherwise the value in kilometers without trailing zeros.
pub fn distance_label(km: Decimal) -> String {
    match DistancePreset::from_km(km) {
        Some(preset) => preset.name().to_string(),
        None => format!("{} km", km.normalize()),
    }
}

/// One computed training zone.
///
/// `lower` is the slower end of the range and is listed first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    /// Slower bound, `M:SS` per km
    pub lower: String,
    /// Faster bound, `M:SS` per km
    pub upper: String,
    pub description: String,
}

/// Predicted race pace and finish time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RacePrediction {
    pub name: String,
    pub distance_km: Decimal,
    /// Predicted pace, `M:SS` per km
    pub pace: String,
    /// Predicted finish time in seconds
    pub total_seconds: Decimal,
}

impl RacePrediction {
    /// Finish time formatted as `M:SS` or `H:MM:SS`
    pub fn total_time(&self) -> String {
        seconds_to_time(self.total_seconds)
    }
}

/// Raw inputs for one calculation, exactly as read from the input controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CalculationRequest {
    Zone { time_10k: String },
    Pace { distance: String, time: String },
    Time { distance: String, pace: String },
    Distance { time: String, pace: String },
}

impl CalculationRequest {
    pub fn mode(&self) -> CalculationMode {
        match self {
            CalculationRequest::Zone { .. } => CalculationMode::Zone,
            CalculationRequest::Pace { .. } => CalculationMode::Pace,
            CalculationRequest::Time { .. } => CalculationMode::Time,
            CalculationRequest::Distance { .. } => CalculationMode::Distance,
        }
    }
}

/// Outcome of a successful calculation, one variant per mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CalculationResult {
    Zone {
        time_input: String,
        /// Seconds per kilometer
        threshold_pace: Decimal,
        zones: Vec<Zone>,
        races: Vec<RacePrediction>,
    },
    Pace {
        distance: Decimal,
        distance_label: String,
        time: String,
        pace: String,
    },
    Time {
        distance: Decimal,
        distance_label: String,
        pace: String,
        total_time: String,
    },
    Distance {
        time: String,
        pace: String,
        distance: Decimal,
        distance_label: String,
    },
}

impl CalculationResult {
    pub fn mode(&self) -> CalculationMode {
        match self {
            CalculationResult::Zone { .. } => CalculationMode::Zone,
            CalculationResult::Pace { .. } => CalculationMode::Pace,
            CalculationResult::Time { .. } => CalculationMode::Time,
            CalculationResult::Distance { .. } => CalculationMode::Distance,
        }
    }

    /// Threshold pace as `M:SS`, for zone results only
    pub fn threshold_pace_display(&self) -> Option<String> {
        match self {
            CalculationResult::Zone { threshold_pace, .. } => Some(seconds_to_pace(*threshold_pace)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("zone".parse::<CalculationMode>().unwrap(), CalculationMode::Zone);
        assert_eq!("Distance".parse::<CalculationMode>().unwrap(), CalculationMode::Distance);
        assert!("speed".parse::<CalculationMode>().is_err());
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(DistancePreset::from_km(dec!(21.0975)), Some(DistancePreset::HalfMarathon));
        assert_eq!(DistancePreset::from_km(dec!(10.0)), Some(DistancePreset::TenK));
        assert_eq!(DistancePreset::from_km(dec!(21.1)), None);
        assert_eq!("half-marathon".parse::<DistancePreset>().unwrap(), DistancePreset::HalfMarathon);
        assert_eq!("5K".parse::<DistancePreset>().unwrap(), DistancePreset::FiveK);
    }

    #[test]
    fn test_distance_labels() {
        assert_eq!(distance_label(dec!(5)), "5K");
        assert_eq!(distance_label(dec!(42.195)), "Marathon");
        assert_eq!(distance_label(dec!(7.50)), "7.5 km");
        assert_eq!(distance_label(dec!(12)), "12 km");
    }

    #[test]
    fn test_result_serializes_with_mode_tag() {
        let result = CalculationResult::Pace {
            distance: dec!(10),
            distance_label: "10K".to_string(),
            time: "45:00".to_string(),
            pace: "4:30".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mode"], "pace");
        assert_eq!(json["pace"], "4:30");
        assert_eq!(result.mode(), CalculationMode::Pace);
    }
}
