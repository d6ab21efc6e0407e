use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use thiserror::Error;

const SECONDS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;
const SECONDS_PER_HOUR: u64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;

/// A rotation interval as an hours/minutes/seconds triple.
///
/// Fields are independent counters, not clock digits: `TimeValue::new(0, 90, 0)`
/// is a valid value meaning ninety minutes. [`TimeValue::normalize`] folds a
/// value into canonical form where minutes and seconds are below sixty.
/// Equality compares total seconds, so the two representations of ninety
/// minutes compare equal either way.
#[derive(Debug, Clone, Copy)]
pub struct TimeValue {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// A string did not match the `(<H>h)?(<M>m)?(<S>s?)?` duration grammar.
///
/// Distinct from a parsed zero duration: callers that need "no duration"
/// model it as an `Option`, never as zero seconds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse time string {0:?}")]
pub struct ParseTimeError(pub String);

impl TimeValue {
    /// Direct construction. No validation, no normalization.
    pub const fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Constructs a normalized value from a second count.
    pub const fn from_total_seconds(total: u64) -> Self {
        let hours = total / SECONDS_PER_HOUR;
        let rest = total % SECONDS_PER_HOUR;
        Self {
            hours,
            minutes: rest / SECONDS_PER_MINUTE,
            seconds: rest % SECONDS_PER_MINUTE,
        }
    }

    pub const fn total_seconds(&self) -> u64 {
        self.seconds + SECONDS_PER_MINUTE * self.minutes + SECONDS_PER_HOUR * self.hours
    }

    pub const fn set(&mut self, hours: u64, minutes: u64, seconds: u64) {
        self.hours = hours;
        self.minutes = minutes;
        self.seconds = seconds;
    }

    /// Redistributes the total into canonical hours/minutes/seconds.
    /// No-op for a zero value.
    pub const fn normalize(&mut self) {
        let total = self.total_seconds();
        if total == 0 {
            return;
        }
        *self = Self::from_total_seconds(total);
    }

    /// Non-mutating [`TimeValue::normalize`].
    pub const fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

impl PartialEq for TimeValue {
    fn eq(&self, other: &Self) -> bool {
        self.total_seconds() == other.total_seconds()
    }
}

impl Eq for TimeValue {}

impl Hash for TimeValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_seconds().hash(state);
    }
}

/// Canonical serialized form: always normalized, all three components
/// emitted even when zero, e.g. `1h30m0s`.
impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.normalized();
        write!(f, "{}h{}m{}s", t.hours, t.minutes, t.seconds)
    }
}

impl FromStr for TimeValue {
    type Err = ParseTimeError;

    /// Parses the compact grammar `(<H>h)?(<M>m)?(<S>s?)?`: unit groups in
    /// that fixed order, each optional, at least one required. A trailing
    /// number with no suffix means seconds, so `"90"` and `"90s"` are the
    /// same value. Whitespace anywhere is a parse failure; the caller strips
    /// it beforehand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Ranks order the unit groups; each consumed group moves the floor up
        // so `30m2h` cannot parse.
        const HOURS: u8 = 1;
        const MINUTES: u8 = 2;
        const SECONDS: u8 = 3;

        let err = || ParseTimeError(s.to_string());

        let mut value = Self::new(0, 0, 0);
        let mut floor = 0u8;
        let mut rest = s;
        let mut found_group = false;

        while !rest.is_empty() {
            let digits = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if digits == 0 {
                return Err(err());
            }
            let number: u64 = rest[..digits].parse().map_err(|_| err())?;
            match rest.as_bytes().get(digits) {
                Some(b'h') if floor < HOURS => {
                    value.hours = number;
                    floor = HOURS;
                    rest = &rest[digits + 1..];
                }
                Some(b'm') if floor < MINUTES => {
                    value.minutes = number;
                    floor = MINUTES;
                    rest = &rest[digits + 1..];
                }
                Some(b's') if floor < SECONDS && rest.len() == digits + 1 => {
                    value.seconds = number;
                    rest = "";
                }
                None if floor < SECONDS => {
                    value.seconds = number;
                    rest = "";
                }
                _ => return Err(err()),
            }
            found_group = true;
        }

        if !found_group {
            return Err(err());
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::TimeValue;

    #[test]
    fn parses_all_three_groups() {
        let t: TimeValue = "1h30m45s".parse().unwrap();
        assert_eq!(t.total_seconds(), 5445);
    }

    #[test]
    fn bare_number_is_seconds() {
        let t: TimeValue = "90".parse().unwrap();
        assert_eq!(t.total_seconds(), 90);
        assert_eq!(t, "90s".parse().unwrap());
    }

    #[test]
    fn skipped_groups_are_allowed() {
        let t: TimeValue = "2h45".parse().unwrap();
        assert_eq!(t.total_seconds(), 2 * 3600 + 45);
    }

    #[test]
    fn out_of_order_groups_are_rejected() {
        assert!("30m2h".parse::<TimeValue>().is_err());
        assert!("5s1m".parse::<TimeValue>().is_err());
    }

    #[test]
    fn junk_is_rejected() {
        assert!("".parse::<TimeValue>().is_err());
        assert!("abc".parse::<TimeValue>().is_err());
        assert!("h".parse::<TimeValue>().is_err());
        assert!(" 1m".parse::<TimeValue>().is_err());
        assert!("1m ".parse::<TimeValue>().is_err());
        assert!("1s30".parse::<TimeValue>().is_err());
    }
}
