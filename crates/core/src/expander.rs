//! # Slot Expander
//!
//! Turns a [`WeeklyTemplate`] into concrete, dated booking slots covering a
//! fixed number of weeks starting from a reference date.
//!
//! For every weekday key and every week offset `o` in `0..horizon_weeks`, the
//! occurrence date is the first date on or after the reference date that falls
//! on that weekday, moved forward by `7 * o` days. Each time label under the
//! weekday then yields one slot on that date.
//!
//! The hour and minute of a label are used directly as UTC components. The
//! timezone label travels with every slot but does not shift the instant.

use chrono::{DateTime, Days, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::ExpansionError, template::WeeklyTemplate, weekday::days_until};

pub const DEFAULT_HORIZON_WEEKS: u32 = 12;
pub const DEFAULT_SLOT_DURATION_MINUTES: u32 = 60;
/// Largest horizon accepted from configuration (ten years).
pub const MAX_HORIZON_WEEKS: u32 = 520;

/// Upper bound on the up-front allocation; larger expansions grow as needed.
const MAX_PREALLOCATED_SLOTS: usize = 16 * 1024;

/// Horizon and slot length used by [`expand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Number of consecutive weeks to generate
    pub horizon_weeks: u32,
    /// Length of every generated slot
    pub slot_duration_minutes: u32,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            horizon_weeks: DEFAULT_HORIZON_WEEKS,
            slot_duration_minutes: DEFAULT_SLOT_DURATION_MINUTES,
        }
    }
}

impl ExpansionConfig {
    pub fn slot_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.slot_duration_minutes))
    }
}

/// One concrete slot produced from a (weekday, week offset, time label) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSlot {
    /// Local anchor date of the occurrence
    pub date: NaiveDate,
    pub timezone: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_booked: bool,
}

/// Expand `template` over `config.horizon_weeks` weeks from `reference_date`.
///
/// All weekday keys and time labels are validated before any slot is built,
/// so an error never comes with partial output. Slots are grouped by weekday
/// (Sunday first), then by week offset, then by time of day.
///
/// # Errors
///
/// * [`ExpansionError::InvalidWeekday`] - a key is not a known weekday name
/// * [`ExpansionError::InvalidTimeFormat`] - a label is not a valid `HH:MM`
/// * [`ExpansionError::DateOutOfRange`] - an occurrence date cannot be represented
pub fn expand(
    template: &WeeklyTemplate,
    reference_date: NaiveDate,
    timezone: &str,
    config: &ExpansionConfig,
) -> Result<Vec<GeneratedSlot>, ExpansionError> {
    let days = template.resolve()?;
    let duration = config.slot_duration();

    // Last occurrence of every weekday, plus one day for slots ending after
    // midnight, must be representable before anything is generated.
    if let Some(last_week) = u64::from(config.horizon_weeks).checked_sub(1) {
        for day in &days {
            let last_offset = u64::from(days_until(reference_date, day.weekday)) + last_week * 7;
            reference_date
                .checked_add_days(Days::new(last_offset + 1))
                .ok_or(ExpansionError::DateOutOfRange(reference_date, last_offset))?;
        }
    }

    let capacity = template
        .slot_count()
        .checked_mul(config.horizon_weeks as usize)
        .map_or(MAX_PREALLOCATED_SLOTS, |count| count.min(MAX_PREALLOCATED_SLOTS));
    let mut slots = Vec::with_capacity(capacity);

    for day in &days {
        let first_offset = u64::from(days_until(reference_date, day.weekday));

        for week in 0..u64::from(config.horizon_weeks) {
            let offset = first_offset + week * 7;
            let date = reference_date
                .checked_add_days(Days::new(offset))
                .ok_or(ExpansionError::DateOutOfRange(reference_date, offset))?;

            for entry in &day.entries {
                let start_time = date
                    .and_hms_opt(entry.time.hour, entry.time.minute, 0)
                    .ok_or_else(|| ExpansionError::InvalidTimeFormat(entry.label.clone()))?
                    .and_utc();
                let end_time = start_time
                    .checked_add_signed(duration)
                    .ok_or(ExpansionError::DateOutOfRange(reference_date, offset))?;

                slots.push(GeneratedSlot {
                    date,
                    timezone: timezone.to_string(),
                    start_time,
                    end_time,
                    is_booked: !entry.available,
                });
            }
        }
    }

    Ok(slots)
}
