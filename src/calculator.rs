//! Calculation orchestrator
//!
//! `Calculator` validates the raw strings of one request, runs the zone,
//! race and conversion helpers, and keeps the last successful result for
//! display and export. A failed calculation clears the held result.

use crate::error::{InputField, Result, RunToolsError};
use crate::export::{self, ExportError, ExportFormat};
use crate::models::{distance_label, CalculationMode, CalculationRequest, CalculationResult};
use crate::races::RacePredictor;
use crate::time::{parse_time, seconds_to_pace, seconds_to_time};
use crate::zones::ZoneCalculator;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tracing::{debug, warn};

/// Parse a distance in km. Only plain, strictly positive decimals pass.
///
/// Digit separators (`1_0`) and exponents are rejected.
pub fn parse_distance(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
    {
        return None;
    }

    Decimal::from_str(text)
        .ok()
        .filter(|distance| *distance > Decimal::ZERO)
}

/// The input group reported when a mode's inputs are rejected
fn input_field(mode: CalculationMode) -> InputField {
    match mode {
        CalculationMode::Zone => InputField::Time10k,
        CalculationMode::Pace => InputField::PaceInputs,
        CalculationMode::Time => InputField::TimeInputs,
        CalculationMode::Distance => InputField::DistanceInputs,
    }
}

/// Per-session calculator state
#[derive(Debug, Default)]
pub struct Calculator {
    mode: CalculationMode,
    current: Option<CalculationResult>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> CalculationMode {
        self.mode
    }

    /// Switch mode. Switching always discards the held result.
    pub fn set_mode(&mut self, mode: CalculationMode) {
        debug!(from = %self.mode, to = %mode, "Switching calculator mode");
        self.mode = mode;
        self.reset();
    }

    /// The last successful result, if any
    pub fn current(&self) -> Option<&CalculationResult> {
        self.current.as_ref()
    }

    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Build a request for the selected mode from its raw inputs, in the
    /// order the mode's form shows them.
    ///
    /// A wrong number of inputs is reported against the mode's input group.
    pub fn request_for_mode(&self, inputs: &[&str]) -> Result<CalculationRequest> {
        let request = match (self.mode, inputs) {
            (CalculationMode::Zone, [time_10k]) => CalculationRequest::Zone {
                time_10k: time_10k.to_string(),
            },
            (CalculationMode::Pace, [distance, time]) => CalculationRequest::Pace {
                distance: distance.to_string(),
                time: time.to_string(),
            },
            (CalculationMode::Time, [distance, pace]) => CalculationRequest::Time {
                distance: distance.to_string(),
                pace: pace.to_string(),
            },
            (CalculationMode::Distance, [time, pace]) => CalculationRequest::Distance {
                time: time.to_string(),
                pace: pace.to_string(),
            },
            (mode, _) => return Err(RunToolsError::invalid(input_field(mode))),
        };

        Ok(request)
    }

    /// Calculate with the selected mode's raw inputs
    pub fn calculate_inputs(&mut self, inputs: &[&str]) -> Result<&CalculationResult> {
        match self.request_for_mode(inputs) {
            Ok(request) => self.calculate(request),
            Err(err) => {
                self.current = None;
                warn!(mode = %self.mode, error = %err, "Calculation rejected");
                Err(err)
            }
        }
    }

    /// Run one calculation and keep its result.
    ///
    /// The request's mode becomes the selected mode. The previous result is
    /// dropped before validation, so on error the calculator holds nothing.
    pub fn calculate(&mut self, request: CalculationRequest) -> Result<&CalculationResult> {
        self.current = None;
        self.mode = request.mode();

        match Self::compute(&request) {
            Ok(result) => {
                debug!(mode = %self.mode, ?result, "Calculation completed");
                Ok(&*self.current.insert(result))
            }
            Err(err) => {
                warn!(mode = %self.mode, error = %err, "Calculation rejected");
                Err(err)
            }
        }
    }

    /// Export the held result
    pub fn export(&self, format: ExportFormat) -> Result<String> {
        let result = self.current.as_ref().ok_or(ExportError::NoResult)?;
        Ok(export::render(result, format)?)
    }

    /// Pure calculation without touching any session state
    pub fn compute(request: &CalculationRequest) -> Result<CalculationResult> {
        match request {
            CalculationRequest::Zone { time_10k } => Self::compute_zones(time_10k),
            CalculationRequest::Pace { distance, time } => Self::compute_pace(distance, time),
            CalculationRequest::Time { distance, pace } => Self::compute_time(distance, pace),
            CalculationRequest::Distance { time, pace } => Self::compute_distance(time, pace),
        }
    }

    fn compute_zones(time_10k: &str) -> Result<CalculationResult> {
        let time_input = time_10k.trim();
        if parse_time(time_input, true).is_none() {
            return Err(RunToolsError::invalid(InputField::Time10k));
        }

        let threshold_pace = ZoneCalculator::calculate_threshold_pace(time_input);

        Ok(CalculationResult::Zone {
            time_input: time_input.to_string(),
            threshold_pace,
            zones: ZoneCalculator::calculate_zones(threshold_pace),
            races: RacePredictor::predict_races(threshold_pace),
        })
    }

    fn compute_pace(distance: &str, time: &str) -> Result<CalculationResult> {
        let invalid = || RunToolsError::invalid(InputField::PaceInputs);
        let time = time.trim();

        let distance = parse_distance(distance).ok_or_else(invalid)?;
        let total_seconds = parse_time(time, true).ok_or_else(invalid)?;
        let pace_seconds = total_seconds.checked_div(distance).ok_or_else(invalid)?;

        Ok(CalculationResult::Pace {
            distance,
            distance_label: distance_label(distance),
            time: time.to_string(),
            pace: seconds_to_pace(pace_seconds),
        })
    }

    fn compute_time(distance: &str, pace: &str) -> Result<CalculationResult> {
        let invalid = || RunToolsError::invalid(InputField::TimeInputs);
        let pace = pace.trim();

        let distance = parse_distance(distance).ok_or_else(invalid)?;
        let pace_seconds = parse_time(pace, false).ok_or_else(invalid)?;
        let total_seconds = pace_seconds.checked_mul(distance).ok_or_else(invalid)?;

        Ok(CalculationResult::Time {
            distance,
            distance_label: distance_label(distance),
            pace: pace.to_string(),
            total_time: seconds_to_time(total_seconds),
        })
    }

    fn compute_distance(time: &str, pace: &str) -> Result<CalculationResult> {
        let invalid = || RunToolsError::invalid(InputField::DistanceInputs);
        let (time, pace) = (time.trim(), pace.trim());

        let total_seconds = parse_time(time, true).ok_or_else(invalid)?;
        let pace_seconds = parse_time(pace, false).ok_or_else(invalid)?;
        // A zero pace would divide by zero
        let distance = total_seconds.checked_div(pace_seconds).ok_or_else(invalid)?;

        let rounded = distance.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        Ok(CalculationResult::Distance {
            time: time.to_string(),
            pace: pace.to_string(),
            distance,
            distance_label: format!("{:.2} km", rounded),
        })
    }
}
