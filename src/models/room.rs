use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;

use super::draft::{AddOutcome, DraftSlotSet};
use super::event::Event;
use super::ledger::Submission;
use super::slot::{SlotKey, TimeOfDay};
use super::tally::{self, TallyReport};
use super::validation::ValidationError;

/// All mutable poll state: the organizer's draft and the live event.
///
/// `revision` counts publishes so a vote form rendered against an older slot
/// layout can be told apart from one rendered against the current layout.
#[derive(Debug, Default)]
pub struct PollRoom {
    draft: DraftSlotSet,
    event: Event,
    revision: u64,
}

impl PollRoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_slots(&mut self, date: NaiveDate, times: &[TimeOfDay]) -> Result<AddOutcome, ValidationError> {
        self.draft.add(date, times)
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Replace the live event with the current draft and empty the draft.
    ///
    /// Votes on the previous event are dropped. On error nothing changes.
    pub fn publish(&mut self, title: &str) -> Result<&Event, ValidationError> {
        let event = Event::publish(title, self.draft.as_slice())?;
        self.event = event;
        self.draft.clear();
        self.revision += 1;
        Ok(&self.event)
    }

    /// Record a vote. `revision`, when given, must be the revision the form was rendered at.
    pub fn submit_vote(
        &mut self,
        voter_name: &str,
        selections: Vec<bool>,
        revision: Option<u64>,
    ) -> Result<Submission, ValidationError> {
        self.check_revision(revision)?;
        self.event.submit(voter_name, selections)
    }

    pub fn check_revision(&self, revision: Option<u64>) -> Result<(), ValidationError> {
        match revision {
            Some(seen) if seen != self.revision => {
                Err(ValidationError::StaleEvent { expected: self.revision, actual: seen })
            }
            _ => Ok(()),
        }
    }

    /// Turn a set of chosen slots into an availability vector for the live event.
    pub fn selections_from(&self, chosen: &[SlotKey]) -> Result<Vec<bool>, ValidationError> {
        let slots = self.event.slots();
        if let Some(unknown) = chosen.iter().find(|slot| !slots.contains(*slot)) {
            return Err(ValidationError::UnknownSlot(unknown.to_key()));
        }
        Ok(slots.iter().map(|slot| chosen.contains(slot)).collect())
    }

    pub fn tally(&self) -> TallyReport {
        tally::tally(&self.event)
    }

    pub fn draft(&self) -> &DraftSlotSet {
        &self.draft
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Shared handle to the single poll room, cloned into every actix worker.
#[derive(Clone, Default)]
pub struct RoomHandle {
    room: Arc<Mutex<PollRoom>>,
}

impl RoomHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the room. A poisoned lock is recovered since every mutator is all-or-nothing.
    pub fn lock(&self) -> MutexGuard<'_, PollRoom> {
        self.room.lock().unwrap_or_else(|e| e.into_inner())
    }
}
