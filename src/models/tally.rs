use serde::Serialize;

use super::event::Event;
use super::slot::SlotKey;

/// Votes received by one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotCount {
    pub slot: SlotKey,
    pub count: usize,
}

/// The recommended slot and its vote count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BestSlot {
    pub slot: SlotKey,
    pub count: usize,
}

/// Per-slot counts aligned with the published slot order, plus the best slot.
///
/// The default value is the empty report returned when nobody has voted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TallyReport {
    pub voter_count: usize,
    pub counts: Vec<SlotCount>,
    pub best: Option<BestSlot>,
}

impl TallyReport {
    pub fn is_empty(&self) -> bool {
        self.voter_count == 0
    }

    pub fn per_slot_count(&self) -> Vec<usize> {
        self.counts.iter().map(|c| c.count).collect()
    }
}

/// Count availability per slot and pick the best one.
///
/// Ties go to the earliest slot in published order.
pub fn tally(event: &Event) -> TallyReport {
    let votes = event.votes();
    if votes.is_empty() {
        return TallyReport::default();
    }

    let counts: Vec<SlotCount> = event
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| SlotCount {
            slot: *slot,
            count: votes
                .iter()
                .filter(|ballot| ballot.selections.get(i).copied().unwrap_or(false))
                .count(),
        })
        .collect();

    let mut best: Option<BestSlot> = None;
    for entry in &counts {
        match best {
            Some(current) if entry.count <= current.count => {}
            _ => best = Some(BestSlot { slot: entry.slot, count: entry.count }),
        }
    }

    TallyReport { voter_count: votes.len(), counts, best }
}
