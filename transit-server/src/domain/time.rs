//! Time-of-day representation.
//!
//! All scheduling arithmetic is done in integer seconds since midnight.
//! Floating point only ever appears where walking distances are converted
//! to durations, and that conversion floors to whole seconds.

use std::fmt;

use chrono::NaiveTime;

/// Error returned when parsing an invalid time of day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A time of day in seconds since midnight.
///
/// Input times must lie within a single service day: parsing rejects
/// anything at or past `24:00:00`. Values past midnight can still arise
/// from arithmetic (a walk that starts at `23:59:00` ends the next day)
/// and display in the GTFS style, e.g. `24:10:00`.
///
/// # Examples
///
/// ```
/// use transit_server::domain::TimeOfDay;
///
/// let eight = TimeOfDay::parse("08:00:00").unwrap();
/// assert_eq!(eight.as_seconds(), 8 * 3600);
/// assert_eq!(eight.to_string(), "08:00:00");
///
/// // Short form is accepted too
/// assert_eq!(TimeOfDay::parse("08:00").unwrap(), eight);
///
/// // Past the end of the service day is rejected
/// assert!(TimeOfDay::parse("24:00:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Construct from a raw seconds-since-midnight count.
    ///
    /// No upper bound is enforced here; this is the constructor used for
    /// computed arrivals, which may legitimately pass midnight.
    pub fn from_seconds(seconds: u32) -> Self {
        TimeOfDay(seconds)
    }

    /// Parse a `HH:MM:SS` or `HH:MM` time of day.
    ///
    /// # Errors
    ///
    /// Returns `Err` for malformed input or times at or past `24:00:00`.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let parsed = NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .map_err(|_| TimeError::new(s, "expected HH:MM:SS or HH:MM within 00:00-23:59"))?;

        use chrono::Timelike;
        Ok(TimeOfDay(parsed.num_seconds_from_midnight()))
    }

    /// Returns the time as seconds since midnight.
    pub fn as_seconds(&self) -> u32 {
        self.0
    }

    /// Returns this time shifted forward by a duration in seconds.
    ///
    /// Saturates at `u32::MAX` rather than wrapping: a feed with an
    /// absurd transfer duration must not reorder dominance comparisons.
    pub fn plus_seconds(&self, seconds: u32) -> TimeOfDay {
        TimeOfDay(self.0.saturating_add(seconds))
    }

    /// Seconds elapsed from `earlier` to `self`, or `None` if `earlier`
    /// is actually later.
    pub fn seconds_since(&self, earlier: TimeOfDay) -> Option<u32> {
        self.0.checked_sub(earlier.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.0 / 3600;
        let m = (self.0 % 3600) / 60;
        let s = self.0 % 60;
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_form() {
        let t = TimeOfDay::parse("08:10:30").unwrap();
        assert_eq!(t.as_seconds(), 8 * 3600 + 10 * 60 + 30);
    }

    #[test]
    fn parse_short_form() {
        let t = TimeOfDay::parse("08:10").unwrap();
        assert_eq!(t.as_seconds(), 8 * 3600 + 10 * 60);
    }

    #[test]
    fn parse_midnight() {
        let t = TimeOfDay::parse("00:00:00").unwrap();
        assert_eq!(t.as_seconds(), 0);
    }

    #[test]
    fn reject_end_of_day_and_beyond() {
        assert!(TimeOfDay::parse("24:00:00").is_err());
        assert!(TimeOfDay::parse("25:30:00").is_err());
    }

    #[test]
    fn reject_malformed() {
        assert!(TimeOfDay::parse("").is_err());
        assert!(TimeOfDay::parse("8am").is_err());
        assert!(TimeOfDay::parse("08:61:00").is_err());
        assert!(TimeOfDay::parse("notatime").is_err());
    }

    #[test]
    fn display_round_trip() {
        let t = TimeOfDay::parse("09:05:07").unwrap();
        assert_eq!(t.to_string(), "09:05:07");
    }

    #[test]
    fn display_past_midnight() {
        // 23:59:00 plus a 20 minute walk lands past the end of the day
        let t = TimeOfDay::parse("23:59:00").unwrap().plus_seconds(20 * 60);
        assert_eq!(t.to_string(), "24:19:00");
    }

    #[test]
    fn ordering_matches_seconds() {
        let a = TimeOfDay::parse("08:00:00").unwrap();
        let b = TimeOfDay::parse("08:00:01").unwrap();
        assert!(a < b);
        assert_eq!(a, TimeOfDay::from_seconds(8 * 3600));
    }

    #[test]
    fn plus_seconds_saturates() {
        let t = TimeOfDay::from_seconds(u32::MAX - 10).plus_seconds(100);
        assert_eq!(t.as_seconds(), u32::MAX);
        // Still later than any sane time, never wrapped to early morning
        assert!(t > TimeOfDay::parse("23:59:59").unwrap());
    }

    #[test]
    fn seconds_since() {
        let a = TimeOfDay::parse("08:00:00").unwrap();
        let b = TimeOfDay::parse("08:05:00").unwrap();
        assert_eq!(b.seconds_since(a), Some(300));
        assert_eq!(a.seconds_since(b), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-day second count survives a display/parse round trip.
        #[test]
        fn display_parse_round_trip(secs in 0u32..86_400) {
            let t = TimeOfDay::from_seconds(secs);
            let reparsed = TimeOfDay::parse(&t.to_string()).unwrap();
            prop_assert_eq!(reparsed, t);
        }

        /// plus_seconds is consistent with raw second arithmetic.
        #[test]
        fn plus_seconds_adds(base in 0u32..86_400, add in 0u32..10_000) {
            let t = TimeOfDay::from_seconds(base).plus_seconds(add);
            prop_assert_eq!(t.as_seconds(), base + add);
        }
    }
}
