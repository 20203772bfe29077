pub mod draft;
pub mod event;
pub mod ledger;
pub mod room;
pub mod slot;
pub mod tally;
pub mod validation;

pub use draft::{AddOutcome, DraftSlotSet};
pub use event::Event;
pub use ledger::{Ballot, Submission, VoteLedger};
pub use room::{PollRoom, RoomHandle};
pub use slot::{DateGroup, SlotKey, TimeOfDay};
pub use tally::{BestSlot, SlotCount, TallyReport, tally};
pub use validation::ValidationError;
