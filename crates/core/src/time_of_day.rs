use std::{fmt, str::FromStr};

use crate::errors::ExpansionError;

/// Wall-clock hour and minute parsed from a template time label.
///
/// Labels are read as 24-hour times; `AM`/`PM` markers are dropped without
/// shifting the hour, so `"02:00 PM"` is 02:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour <= 23 && minute <= 59).then_some(Self { hour, minute })
    }
}

impl FromStr for TimeOfDay {
    type Err = ExpansionError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let invalid = || ExpansionError::InvalidTimeFormat(label.to_string());

        let cleaned = strip_meridiem(label);
        // Components past the minute (e.g. seconds) are ignored
        let mut parts = cleaned.trim().split(':');
        let (Some(hour), Some(minute)) = (parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let hour = hour.trim().parse::<u32>().map_err(|_| invalid())?;
        let minute = minute.trim().parse::<u32>().map_err(|_| invalid())?;

        Self::new(hour, minute).ok_or_else(invalid)
    }
}

/// Removes every `AM` / `PM` marker in a single left-to-right pass.
fn strip_meridiem(label: &str) -> String {
    let mut cleaned = String::with_capacity(label.len());
    let mut rest = label;

    while let Some(c) = rest.chars().next() {
        if rest.starts_with("AM") || rest.starts_with("PM") {
            rest = &rest[2..];
        } else {
            cleaned.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    cleaned
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meridiem_markers_are_removed_in_one_pass() {
        assert_eq!(strip_meridiem("09:00AM"), "09:00");
        assert_eq!(strip_meridiem("02:30 PM"), "02:30 ");
        assert_eq!(strip_meridiem("PAMM"), "PM");
        assert_eq!(strip_meridiem("AAMM"), "AM");
    }
}
