//! Time string parsing, validation and formatting
//!
//! Times travel through the calculator as `Decimal` seconds. Text forms are
//! `M:SS` / `MM:SS` for paces and short durations, and `H:MM:SS` for
//! durations of an hour or more. All conversions back to text floor to whole
//! seconds.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Parse a single `:`-separated component as a non-negative integer.
///
/// Only ASCII digits are accepted, so signs, exponents, decimal points and
/// surrounding whitespace all fail.
fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Parse a time string into total seconds.
///
/// Accepts `mm:ss` always and `hh:mm:ss` only when `allow_hours` is set.
/// Seconds must be below 60, and so must minutes in the three-part form.
/// The minutes of a two-part value are unbounded (`75:00` is 75 minutes).
pub fn parse_time(text: &str, allow_hours: bool) -> Option<Decimal> {
    let components = text
        .split(':')
        .map(parse_component)
        .collect::<Option<Vec<u64>>>()?;

    let total = match components.as_slice() {
        [mm, ss] if *ss < SECONDS_PER_MINUTE => {
            mm.checked_mul(SECONDS_PER_MINUTE)?.checked_add(*ss)?
        }
        [hh, mm, ss] if allow_hours && *mm < 60 && *ss < SECONDS_PER_MINUTE => hh
            .checked_mul(SECONDS_PER_HOUR)?
            .checked_add(mm * SECONDS_PER_MINUTE + ss)?,
        _ => return None,
    };

    Some(Decimal::from(total))
}

/// Check whether `text` is a well-formed time string.
///
/// This is a total predicate: malformed input yields `false`, never a panic.
pub fn validate_time(text: &str, allow_hours: bool) -> bool {
    parse_time(text, allow_hours).is_some()
}

/// Convert an already validated time string to seconds.
///
/// Input that does not validate converts to zero.
pub fn time_to_seconds(text: &str) -> Decimal {
    parse_time(text, true).unwrap_or(Decimal::ZERO)
}

/// Floor to whole seconds; negative values clamp to zero.
fn whole_seconds(seconds: Decimal) -> Decimal {
    seconds.floor().max(Decimal::ZERO)
}

/// Split whole seconds into a quotient and a remainder below `unit`.
///
/// The quotient may exceed `u64`; the remainder never does.
fn split_seconds(whole: Decimal, unit: u64) -> (Decimal, u64) {
    let unit = Decimal::from(unit);
    let quotient = (whole / unit).floor();
    let remainder = (whole % unit).to_u64().unwrap_or(0);
    (quotient, remainder)
}

/// Format seconds as a per-kilometer pace, `M:SS`.
///
/// Paces never carry an hours field, however slow.
pub fn seconds_to_pace(seconds: Decimal) -> String {
    let (minutes, secs) = split_seconds(whole_seconds(seconds), SECONDS_PER_MINUTE);
    format!("{}:{:02}", minutes, secs)
}

/// Format seconds as a duration, `M:SS` below an hour and `H:MM:SS` above.
pub fn seconds_to_time(seconds: Decimal) -> String {
    let whole = whole_seconds(seconds);
    if whole < Decimal::from(SECONDS_PER_HOUR) {
        return seconds_to_pace(seconds);
    }

    let (hours, within_hour) = split_seconds(whole, SECONDS_PER_HOUR);
    format!(
        "{}:{:02}:{:02}",
        hours,
        within_hour / SECONDS_PER_MINUTE,
        within_hour % SECONDS_PER_MINUTE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_accepts_common_forms() {
        assert!(validate_time("9:30", true));
        assert!(validate_time("45:00", true));
        assert!(validate_time("1:02:03", true));
        assert!(validate_time("0:00", false));
        assert!(validate_time("75:00", false));
    }

    #[test]
    fn test_validate_component_count() {
        assert!(!validate_time("45", true));
        assert!(!validate_time("1:02:03", false));
        assert!(!validate_time("1:02:03:04", true));
        assert!(!validate_time("", true));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(!validate_time("12:75", true));
        assert!(!validate_time("12:60", true));
        assert!(!validate_time("1:60:00", true));
        assert!(!validate_time("1:00:60", true));
        assert!(validate_time("1:59:59", true));
    }

    #[test]
    fn test_validate_rejects_malformed_components() {
        assert!(!validate_time("ab:cd", true));
        assert!(!validate_time("-5:00", true));
        assert!(!validate_time("+5:00", true));
        assert!(!validate_time("5:", true));
        assert!(!validate_time(":30", true));
        assert!(!validate_time("1e1:00", true));
        assert!(!validate_time("4.5:00", true));
        assert!(!validate_time(" 4:00", true));
        assert!(!validate_time("99999999999999999999:00", true));
    }

    #[test]
    fn test_time_to_seconds() {
        assert_eq!(time_to_seconds("40:00"), dec!(2400));
        assert_eq!(time_to_seconds("1:02:03"), dec!(3723));
        assert_eq!(time_to_seconds("0:07"), dec!(7));
        assert_eq!(time_to_seconds("garbage"), Decimal::ZERO);
    }

    #[test]
    fn test_seconds_to_pace_floors() {
        assert_eq!(seconds_to_pace(dec!(270)), "4:30");
        assert_eq!(seconds_to_pace(dec!(232.8)), "3:52");
        assert_eq!(seconds_to_pace(dec!(59.999)), "0:59");
        assert_eq!(seconds_to_pace(dec!(4500)), "75:00");
        assert_eq!(seconds_to_pace(dec!(-3)), "0:00");
    }

    #[test]
    fn test_seconds_to_time() {
        assert_eq!(seconds_to_time(dec!(2328)), "38:48");
        assert_eq!(seconds_to_time(dec!(3599.9)), "59:59");
        assert_eq!(seconds_to_time(dec!(3600)), "1:00:00");
        assert_eq!(seconds_to_time(dec!(5405.5)), "1:30:05");
        assert_eq!(seconds_to_time(dec!(36061)), "10:01:01");
    }

    #[test]
    fn test_formatting_beyond_u64_range() {
        // 3e22 s is 8333333333333333333 h 20 min
        assert_eq!(
            seconds_to_time(dec!(30000000000000000000000)),
            "8333333333333333333:20:00"
        );
        assert_eq!(
            seconds_to_pace(dec!(359900000000000000000)),
            "5998333333333333333:20"
        );
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_pace_round_trip(d in 0u64..3600u64) {
            let text = seconds_to_pace(Decimal::from(d));
            prop_assert!(validate_time(&text, false));
            prop_assert_eq!(time_to_seconds(&text), Decimal::from(d));
        }

        #[test]
        fn test_time_round_trip(d in 3600u64..360_000u64) {
            let text = seconds_to_time(Decimal::from(d));
            prop_assert!(validate_time(&text, true));
            prop_assert_eq!(time_to_seconds(&text), Decimal::from(d));
        }

        #[test]
        fn test_validate_never_panics(text in ".{0,16}", allow_hours in any::<bool>()) {
            let _ = validate_time(&text, allow_hours);
        }
    }
}
