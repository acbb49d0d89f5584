use chrono::{Datelike, NaiveDate, Weekday};

/// Canonical weekday keys accepted in a weekly template, indexed from Sunday.
pub const CANONICAL_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Resolve a template key to a weekday.
///
/// Accepts the canonical abbreviations and the full English names. Matching
/// is case-sensitive.
pub fn parse_weekday(key: &str) -> Option<Weekday> {
    match key {
        "Sun" | "Sunday" => Some(Weekday::Sun),
        "Mon" | "Monday" => Some(Weekday::Mon),
        "Tue" | "Tuesday" => Some(Weekday::Tue),
        "Wed" | "Wednesday" => Some(Weekday::Wed),
        "Thu" | "Thursday" => Some(Weekday::Thu),
        "Fri" | "Friday" => Some(Weekday::Fri),
        "Sat" | "Saturday" => Some(Weekday::Sat),
        _ => None,
    }
}

/// Position of `weekday` in the Sunday-first canonical ordering (Sun = 0).
pub fn canonical_index(weekday: Weekday) -> u32 {
    weekday.num_days_from_sunday()
}

/// Days to move forward from `from` to reach the next `target`, in `0..=6`.
///
/// Zero when `from` already falls on `target`.
pub fn days_until(from: NaiveDate, target: Weekday) -> u32 {
    (canonical_index(target) + 7 - canonical_index(from.weekday())) % 7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_keys_round_trip_in_order() {
        for (index, key) in CANONICAL_WEEKDAYS.iter().enumerate() {
            let weekday = parse_weekday(key).unwrap();
            assert_eq!(canonical_index(weekday) as usize, index);
        }
    }

    #[test]
    fn lowercase_keys_are_rejected() {
        assert_eq!(parse_weekday("mon"), None);
        assert_eq!(parse_weekday("MONDAY"), None);
    }
}
