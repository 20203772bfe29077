use std::fmt;

/// A user-correctable input problem raised by one of the poll mutators.
///
/// Every variant names the offending field so the page can point the user at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    EmptySlots,
    NoTimeSelected,
    EmptyVoterName,
    SelectionLength { expected: usize, actual: usize },
    InvalidDate(String),
    UnsupportedTime(String),
    InvalidSlotKey(String),
    TooLong { field: &'static str, max: usize },
    NotPublished,
    StaleEvent { expected: u64, actual: u64 },
    UnknownSlot(String),
}

impl ValidationError {
    /// Form field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyTitle => "title",
            ValidationError::EmptySlots => "slots",
            ValidationError::NoTimeSelected | ValidationError::UnsupportedTime(_) => "time",
            ValidationError::InvalidDate(_) => "date",
            ValidationError::EmptyVoterName => "voter_name",
            ValidationError::SelectionLength { .. } | ValidationError::UnknownSlot(_) => "selections",
            ValidationError::InvalidSlotKey(_) => "slot",
            ValidationError::TooLong { field, .. } => *field,
            ValidationError::NotPublished | ValidationError::StaleEvent { .. } => "event",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "Meeting title is required"),
            ValidationError::EmptySlots => write!(f, "Add at least one candidate slot before publishing"),
            ValidationError::NoTimeSelected => write!(f, "Select at least one time of day"),
            ValidationError::EmptyVoterName => write!(f, "Your name is required"),
            ValidationError::SelectionLength { expected, actual } => write!(
                f,
                "Expected {expected} availability answers but received {actual}"
            ),
            ValidationError::InvalidDate(value) => {
                write!(f, "Invalid date '{value}', expected YYYY-MM-DD")
            }
            ValidationError::UnsupportedTime(value) => {
                write!(f, "Unsupported time '{value}', pick a full hour between 09:00 and 18:00")
            }
            ValidationError::InvalidSlotKey(value) => {
                write!(f, "Invalid slot '{value}', expected YYYY-MM-DD HH:MM")
            }
            ValidationError::TooLong { field, max } => {
                write!(f, "{field} must be at most {max} characters")
            }
            ValidationError::NotPublished => write!(f, "No meeting has been published yet"),
            ValidationError::StaleEvent { .. } => write!(
                f,
                "The meeting was republished while you were voting, please review the new slots"
            ),
            ValidationError::UnknownSlot(value) => {
                write!(f, "Slot '{value}' is not part of the published meeting")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
