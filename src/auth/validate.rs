use crate::models::ValidationError;

pub const TITLE_MAX_LEN: usize = 200;
pub const VOTER_NAME_MAX_LEN: usize = 100;

/// Reject a value longer than `max` characters once trimmed.
pub fn validate_max_len(value: &str, field: &'static str, max: usize) -> Result<(), ValidationError> {
    if value.trim().chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    validate_max_len(title, "title", TITLE_MAX_LEN)
}

pub fn validate_voter_name(name: &str) -> Result<(), ValidationError> {
    validate_max_len(name, "voter_name", VOTER_NAME_MAX_LEN)
}
