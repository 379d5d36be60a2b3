use crate::models::Zone;
use crate::time::{seconds_to_pace, time_to_seconds};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Static description of one training zone.
///
/// Multipliers scale the threshold pace. Pace is time per km, so the
/// `upper` multiplier gives the slower (numerically larger) pace, which is
/// printed as the lower end of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneDefinition {
    pub name: &'static str,
    pub upper_multiplier: Decimal,
    pub lower_multiplier: Decimal,
    pub description: &'static str,
}

/// Seven pace zones, slowest to fastest
pub const ZONE_DEFINITIONS: [ZoneDefinition; 7] = [
    ZoneDefinition {
        name: "Z1 – Recovery",
        upper_multiplier: dec!(1.40),
        lower_multiplier: dec!(1.25),
        description: "Recovery and active rest",
    },
    ZoneDefinition {
        name: "Z2 – Slow Bottom",
        upper_multiplier: dec!(1.25),
        lower_multiplier: dec!(1.12),
        description: "Aerobic endurance",
    },
    ZoneDefinition {
        name: "Z3 – Medium Cross-Country",
        upper_multiplier: dec!(1.12),
        lower_multiplier: dec!(1.02),
        description: "Aerobic capacity",
    },
    ZoneDefinition {
        name: "Z4 – Threshold",
        upper_multiplier: dec!(1.02),
        lower_multiplier: dec!(0.95),
        description: "Lactate tolerance, race pace",
    },
    ZoneDefinition {
        name: "Z5 – VO2 Max",
        upper_multiplier: dec!(0.95),
        lower_multiplier: dec!(0.88),
        description: "Speed development",
    },
    ZoneDefinition {
        name: "Z6 – Anaerobic",
        upper_multiplier: dec!(0.88),
        lower_multiplier: dec!(0.80),
        description: "Power and endurance",
    },
    ZoneDefinition {
        name: "Z7 – Sprint",
        upper_multiplier: dec!(0.80),
        lower_multiplier: dec!(0.70),
        description: "Maximum speed",
    },
];

/// Zone calculation from a threshold pace
pub struct ZoneCalculator;

impl ZoneCalculator {
    /// Threshold pace (seconds per km) from a validated 10K time string
    pub fn calculate_threshold_pace(time_10k: &str) -> Decimal {
        time_to_seconds(time_10k) / dec!(10)
    }

    /// Calculate the seven pace zones for a threshold pace in seconds per km
    ///
    /// Zones come back in table order, Recovery first.
    pub fn calculate_zones(threshold_pace: Decimal) -> Vec<Zone> {
        ZONE_DEFINITIONS
            .iter()
            .map(|definition| Self::zone_for(definition, threshold_pace))
            .collect()
    }

    fn zone_for(definition: &ZoneDefinition, threshold_pace: Decimal) -> Zone {
        Zone {
            name: definition.name.to_string(),
            lower: seconds_to_pace(threshold_pace * definition.upper_multiplier),
            upper: seconds_to_pace(threshold_pace * definition.lower_multiplier),
            description: definition.description.to_string(),
        }
    }
}
