//! Race pace and finish time prediction
//!
//! Predictions scale the threshold pace by an endurance factor chosen from
//! the race distance: shorter races are run faster than threshold, longer
//! ones slower.

use crate::models::{DistancePreset, RacePrediction};
use crate::time::seconds_to_pace;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Predicted pace and total time for one race
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RacePace {
    /// Pace, `M:SS` per km
    pub pace: String,
    /// Finish time in seconds
    pub total_seconds: Decimal,
}

pub struct RacePredictor;

impl RacePredictor {
    /// Endurance multiplier for a race distance in km.
    ///
    /// Band boundaries belong to the shorter band, so exactly 5 km is 0.92.
    pub fn race_multiplier(distance_km: Decimal) -> Decimal {
        if distance_km <= dec!(5) {
            dec!(0.92)
        } else if distance_km <= dec!(10) {
            dec!(0.97)
        } else if distance_km <= dec!(21.0975) {
            dec!(1.03)
        } else {
            dec!(1.08)
        }
    }

    /// Estimate race pace and finish time from a threshold pace (s/km)
    pub fn estimate_race_pace(threshold_pace: Decimal, distance_km: Decimal) -> RacePace {
        let race_pace = threshold_pace * Self::race_multiplier(distance_km);

        RacePace {
            pace: seconds_to_pace(race_pace),
            total_seconds: race_pace * distance_km,
        }
    }

    /// Predictions for 5K, 10K, half marathon and marathon
    pub fn predict_races(threshold_pace: Decimal) -> Vec<RacePrediction> {
        DistancePreset::ALL
            .iter()
            .map(|preset| {
                let RacePace { pace, total_seconds } =
                    Self::estimate_race_pace(threshold_pace, preset.km());
                RacePrediction {
                    name: preset.name().to_string(),
                    distance_km: preset.km(),
                    pace,
                    total_seconds,
                }
            })
            .collect()
    }
}
