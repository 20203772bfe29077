use std::collections::HashSet;

use super::ledger::{Submission, VoteLedger};
use super::slot::SlotKey;
use super::validation::ValidationError;

/// The published poll: a title, a frozen slot list and the votes cast against it.
///
/// `Event::default()` is the unpublished state. A new event only comes from
/// [`Event::publish`], which always starts with an empty ledger.
#[derive(Debug, Clone, Default)]
pub struct Event {
    title: String,
    slots: Vec<SlotKey>,
    votes: VoteLedger,
}

impl Event {
    pub fn publish(title: &str, slots: &[SlotKey]) -> Result<Event, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if slots.is_empty() {
            return Err(ValidationError::EmptySlots);
        }

        // First occurrence wins, order preserved.
        let mut seen = HashSet::with_capacity(slots.len());
        let slots = slots
            .iter()
            .filter(|slot| seen.insert(slot.to_key()))
            .copied()
            .collect();

        Ok(Event {
            title: title.to_string(),
            slots,
            votes: VoteLedger::new(),
        })
    }

    pub fn is_published(&self) -> bool {
        !self.title.is_empty() && !self.slots.is_empty()
    }

    /// Record a voter's availability against this event's slot list.
    pub fn submit(&mut self, voter_name: &str, selections: Vec<bool>) -> Result<Submission, ValidationError> {
        if !self.is_published() {
            return Err(ValidationError::NotPublished);
        }
        self.votes.submit(self.slots.len(), voter_name, selections)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slots(&self) -> &[SlotKey] {
        &self.slots
    }

    pub fn votes(&self) -> &VoteLedger {
        &self.votes
    }
}
