use chrono::NaiveDate;

use super::slot::{SlotKey, TimeOfDay};
use super::validation::ValidationError;

/// Result of adding a batch of times for one date to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Number of times the organizer selected.
    pub requested: usize,
    /// Number of those that were not already in the draft.
    pub added: usize,
}

impl AddOutcome {
    pub fn duplicates(&self) -> usize {
        self.requested - self.added
    }
}

/// The organizer's uncommitted candidate slots, kept unique and sorted.
#[derive(Debug, Clone, Default)]
pub struct DraftSlotSet {
    slots: Vec<SlotKey>,
}

impl DraftSlotSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, date: NaiveDate, times: &[TimeOfDay]) -> Result<AddOutcome, ValidationError> {
        if times.is_empty() {
            return Err(ValidationError::NoTimeSelected);
        }

        let mut added = 0;
        for &time in times {
            let slot = SlotKey::new(date, time);
            if !self.slots.contains(&slot) {
                self.slots.push(slot);
                added += 1;
            }
        }
        self.slots.sort();

        Ok(AddOutcome { requested: times.len(), added })
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Owned copy of the current draft in slot order.
    pub fn snapshot(&self) -> Vec<SlotKey> {
        self.slots.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotKey> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[SlotKey] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
