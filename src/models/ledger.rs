use serde::Serialize;

use super::validation::ValidationError;

/// One voter's availability, aligned with the published slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ballot {
    pub voter: String,
    pub selections: Vec<bool>,
}

/// Whether a submission created a new entry or replaced an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Recorded,
    Replaced,
}

impl Submission {
    pub fn as_str(self) -> &'static str {
        match self {
            Submission::Recorded => "recorded",
            Submission::Replaced => "replaced",
        }
    }
}

/// Voter name to availability vector. Voters are kept in first-submission order.
#[derive(Debug, Clone, Default)]
pub struct VoteLedger {
    ballots: Vec<Ballot>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `selections` for `voter_name`, replacing any earlier ballot under that name.
    ///
    /// `slot_count` is the length of the published slot list the vector must line up with.
    pub fn submit(
        &mut self,
        slot_count: usize,
        voter_name: &str,
        selections: Vec<bool>,
    ) -> Result<Submission, ValidationError> {
        let voter = voter_name.trim();
        if voter.is_empty() {
            return Err(ValidationError::EmptyVoterName);
        }
        if selections.len() != slot_count {
            return Err(ValidationError::SelectionLength {
                expected: slot_count,
                actual: selections.len(),
            });
        }

        match self.ballots.iter_mut().find(|b| b.voter == voter) {
            Some(existing) => {
                existing.selections = selections;
                Ok(Submission::Replaced)
            }
            None => {
                self.ballots.push(Ballot { voter: voter.to_string(), selections });
                Ok(Submission::Recorded)
            }
        }
    }

    pub fn get(&self, voter_name: &str) -> Option<&[bool]> {
        self.ballots
            .iter()
            .find(|b| b.voter == voter_name)
            .map(|b| b.selections.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ballot> {
        self.ballots.iter()
    }

    pub fn len(&self) -> usize {
        self.ballots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ballots.is_empty()
    }
}
