use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::{
    errors::ExpansionError,
    time_of_day::TimeOfDay,
    weekday::{canonical_index, parse_weekday},
};

/// Time label → availability flag for one weekday.
pub type DayAvailability = BTreeMap<String, bool>;

/// Repeating weekly availability pattern supplied when a room is created.
///
/// Serialized as a plain JSON object: `{ "Tue": { "14:00": true } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyTemplate(pub BTreeMap<String, DayAvailability>);

/// A template entry whose weekday key and time label have both been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub time: TimeOfDay,
    pub label: String,
    pub available: bool,
}

/// All entries of one weekday key, ordered by time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDay {
    pub key: String,
    pub weekday: Weekday,
    pub entries: Vec<ResolvedEntry>,
}

impl WeeklyTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder helper, mostly for tests and fixtures.
    pub fn with_slot(mut self, day: &str, label: &str, available: bool) -> Self {
        self.0
            .entry(day.to_string())
            .or_default()
            .insert(label.to_string(), available);
        self
    }

    /// Number of time labels across all weekday keys.
    pub fn slot_count(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    /// Parse every weekday key and time label up front.
    ///
    /// The first malformed key or label fails the whole template. Days come
    /// back in Sunday-first order (ties broken by key text); entries within
    /// a day are ordered by time, then by label text.
    pub fn resolve(&self) -> Result<Vec<ResolvedDay>, ExpansionError> {
        let mut days = self
            .0
            .iter()
            .map(|(key, slots)| -> Result<ResolvedDay, ExpansionError> {
                let weekday =
                    parse_weekday(key).ok_or_else(|| ExpansionError::InvalidWeekday(key.clone()))?;

                let mut entries = slots
                    .iter()
                    .map(|(label, &available)| -> Result<ResolvedEntry, ExpansionError> {
                        Ok(ResolvedEntry {
                            time: label.parse()?,
                            label: label.clone(),
                            available,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                entries.sort_by(|a, b| a.time.cmp(&b.time).then_with(|| a.label.cmp(&b.label)));

                Ok(ResolvedDay {
                    key: key.clone(),
                    weekday,
                    entries,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        days.sort_by(|a, b| {
            canonical_index(a.weekday)
                .cmp(&canonical_index(b.weekday))
                .then_with(|| a.key.cmp(&b.key))
        });

        Ok(days)
    }
}

