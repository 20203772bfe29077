use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::validation::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One of the full hours an organizer may offer, 09:00 through 18:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u8);

impl TimeOfDay {
    pub const FIRST_HOUR: u8 = 9;
    pub const LAST_HOUR: u8 = 18;

    /// Every selectable time, earliest first.
    pub const ALL: [TimeOfDay; 10] = [
        TimeOfDay(9),
        TimeOfDay(10),
        TimeOfDay(11),
        TimeOfDay(12),
        TimeOfDay(13),
        TimeOfDay(14),
        TimeOfDay(15),
        TimeOfDay(16),
        TimeOfDay(17),
        TimeOfDay(18),
    ];

    pub fn from_hour(hour: u8) -> Option<Self> {
        (Self::FIRST_HOUR..=Self::LAST_HOUR)
            .contains(&hour)
            .then_some(TimeOfDay(hour))
    }

    pub fn hour(self) -> u8 {
        self.0
    }

    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TimeOfDay::ALL
            .iter()
            .copied()
            .find(|t| t.to_string() == trimmed)
            .ok_or_else(|| ValidationError::UnsupportedTime(trimmed.to_string()))
    }
}

/// A single candidate meeting slot.
///
/// Ordering is by date first, then time of day, which is also the order of the
/// canonical `"YYYY-MM-DD HH:MM"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    date: NaiveDate,
    time: TimeOfDay,
}

impl SlotKey {
    pub fn new(date: NaiveDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Build a slot from the raw date picker and time selector values.
    pub fn from_parts(date: &str, time: &str) -> Result<Self, ValidationError> {
        let date = parse_date(date)?;
        let time = time.parse::<TimeOfDay>()?;
        Ok(Self::new(date, time))
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Canonical identity key, e.g. `2026-03-01 14:00`.
    pub fn to_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format(DATE_FORMAT), self.time)
    }
}

impl FromStr for SlotKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidSlotKey(s.to_string());
        let (date, time) = s.trim().split_once(' ').ok_or_else(invalid)?;
        SlotKey::from_parts(date, time).map_err(|_| invalid())
    }
}

impl Serialize for SlotKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a `YYYY-MM-DD` date picker value.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Split a canonical slot string into its date and time halves.
///
/// Splits on the first space only; a string without a space yields an empty time part.
pub fn parse_group(key: &str) -> (&str, &str) {
    key.split_once(' ').unwrap_or((key, ""))
}

/// Slots sharing one calendar date, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    pub date: String,
    pub weekday: String,
    pub slots: Vec<SlotKey>,
}

/// Group an ordered slot list into runs of the same date.
///
/// Input order is kept; a date only appears once if its slots are contiguous,
/// which holds for any sorted or published list.
pub fn group_by_date(slots: &[SlotKey]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    for slot in slots {
        let key = slot.to_key();
        let (date, _) = parse_group(&key);
        match groups.last_mut() {
            Some(group) if group.date == date => group.slots.push(*slot),
            _ => groups.push(DateGroup {
                date: date.to_string(),
                weekday: slot.date().format("%a").to_string(),
                slots: vec![*slot],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_group_splits_on_first_space() {
        assert_eq!(parse_group("2026-03-01 14:00"), ("2026-03-01", "14:00"));
        assert_eq!(parse_group("2026-03-01"), ("2026-03-01", ""));
    }

    #[test]
    fn time_of_day_rejects_off_grid_values() {
        assert!("08:00".parse::<TimeOfDay>().is_err());
        assert!("19:00".parse::<TimeOfDay>().is_err());
        assert!("9:00".parse::<TimeOfDay>().is_err());
        assert!("09:30".parse::<TimeOfDay>().is_err());
        assert_eq!("09:00".parse::<TimeOfDay>().unwrap().hour(), 9);
    }

    #[test]
    fn from_hour_matches_enumeration() {
        let hours: Vec<u8> = TimeOfDay::ALL.iter().map(|t| t.hour()).collect();
        assert_eq!(hours, (9..=18).collect::<Vec<u8>>());
        assert!(TimeOfDay::from_hour(8).is_none());
        assert_eq!(TimeOfDay::from_hour(18), Some(TimeOfDay::ALL[9]));
    }
}
