//! Clock-string conversion.
//!
//! Pure, stateless conversion between 12-hour clock labels (`H:MM AM|PM`)
//! and integer minutes since midnight. [`format`] is the total inverse of
//! [`parse`] for every whole minute in `[0, 1440)`.

use thiserror::Error;

/// Minutes in a day; valid inputs to [`format`] are `[0, MINUTES_PER_DAY)`.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A malformed clock-string input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid clock time '{text}': {reason}")]
pub struct ParseError {
    /// The offending input.
    pub text: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl ParseError {
    fn new(text: &str, reason: &'static str) -> Self {
        Self {
            text: text.to_string(),
            reason,
        }
    }
}

/// Parses a 12-hour clock label into minutes since midnight.
///
/// Accepts `H:MM AM` / `H:MM PM` with hour 1–12 and a two-digit minute
/// 00–59. The meridiem is case-insensitive. `12:xx AM` is the midnight
/// hour, `12:xx PM` the noon hour.
///
/// # Examples
///
/// ```
/// use dayplan::clock;
///
/// assert_eq!(clock::parse("7:00 AM").unwrap(), 420);
/// assert_eq!(clock::parse("12:30 PM").unwrap(), 750);
/// assert_eq!(clock::parse("12:00 AM").unwrap(), 0);
/// ```
pub fn parse(text: &str) -> Result<i64, ParseError> {
    let trimmed = text.trim();
    let (time, meridiem) = trimmed
        .split_once(' ')
        .ok_or_else(|| ParseError::new(text, "expected 'H:MM AM|PM'"))?;

    let pm = if meridiem.eq_ignore_ascii_case("AM") {
        false
    } else if meridiem.eq_ignore_ascii_case("PM") {
        true
    } else {
        return Err(ParseError::new(text, "meridiem must be AM or PM"));
    };

    let (hour_text, minute_text) = time
        .split_once(':')
        .ok_or_else(|| ParseError::new(text, "expected 'H:MM AM|PM'"))?;

    // i64::parse accepts a leading sign, which the grammar does not.
    if hour_text.is_empty() || !hour_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(text, "hour is not a number"));
    }
    let hour: i64 = hour_text
        .parse()
        .map_err(|_| ParseError::new(text, "hour is not a number"))?;
    if !(1..=12).contains(&hour) {
        return Err(ParseError::new(text, "hour must be 1-12"));
    }

    if minute_text.len() != 2 {
        return Err(ParseError::new(text, "minute must be two digits"));
    }
    if !minute_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(text, "minute is not a number"));
    }
    let minute: i64 = minute_text
        .parse()
        .map_err(|_| ParseError::new(text, "minute is not a number"))?;
    if !(0..=59).contains(&minute) {
        return Err(ParseError::new(text, "minute must be 00-59"));
    }

    let hour24 = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    Ok(hour24 * 60 + minute)
}

/// Renders minutes since midnight as a 12-hour clock label.
///
/// Inverse of [`parse`]: `parse(&format(m)) == m` for every `m` in
/// `[0, 1440)`.
pub fn format(minutes: i64) -> String {
    let hour24 = minutes.div_euclid(60) % 24;
    let minute = minutes.rem_euclid(60);
    let suffix = if hour24 < 12 { "AM" } else { "PM" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{minute:02} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse("7:00 AM").unwrap(), 420);
        assert_eq!(parse("11:00 PM").unwrap(), 1380);
        assert_eq!(parse("12:30 PM").unwrap(), 750);
        assert_eq!(parse("1:05 PM").unwrap(), 785);
    }

    #[test]
    fn test_parse_midnight_and_noon() {
        assert_eq!(parse("12:00 AM").unwrap(), 0);
        assert_eq!(parse("12:59 AM").unwrap(), 59);
        assert_eq!(parse("12:00 PM").unwrap(), 720);
    }

    #[test]
    fn test_parse_case_insensitive_meridiem() {
        assert_eq!(parse("7:00 am").unwrap(), 420);
        assert_eq!(parse("7:00 pm").unwrap(), 1140);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse("").is_err());
        assert!(parse("7:00").is_err());
        assert!(parse("700 AM").is_err());
        assert!(parse("13:00 AM").is_err());
        assert!(parse("0:30 PM").is_err());
        assert!(parse("7:60 AM").is_err());
        assert!(parse("7:0 AM").is_err());
        assert!(parse("7:000 AM").is_err());
        assert!(parse("7:00 XM").is_err());
        assert!(parse("x:00 AM").is_err());
        assert!(parse("7:xx PM").is_err());
        // Signed numerals parse as i64 but do not match the grammar.
        assert!(parse("+7:00 AM").is_err());
        assert!(parse("-7:00 AM").is_err());
        assert!(parse("7:+0 AM").is_err());
        assert!(parse("7:-5 AM").is_err());
    }

    #[test]
    fn test_format_basic() {
        assert_eq!(format(0), "12:00 AM");
        assert_eq!(format(420), "7:00 AM");
        assert_eq!(format(720), "12:00 PM");
        assert_eq!(format(750), "12:30 PM");
        assert_eq!(format(1439), "11:59 PM");
    }

    #[test]
    fn test_round_trip_every_minute() {
        for m in 0..MINUTES_PER_DAY {
            let label = format(m);
            assert_eq!(parse(&label).unwrap(), m, "round trip failed for {label}");
        }
    }
}
