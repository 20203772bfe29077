use actix_session::Session;

use crate::errors::AppError;

const ORGANIZER_KEY: &str = "organizer";
const FLASH_KEY: &str = "flash";
const VOTER_NAME_KEY: &str = "voter_name";

/// Whether this browser session unlocked the organizer pages.
pub fn is_organizer(session: &Session) -> bool {
    session.get::<bool>(ORGANIZER_KEY).unwrap_or(None).unwrap_or(false)
}

pub fn grant_organizer(session: &Session) -> Result<(), AppError> {
    session.renew();
    session.insert(ORGANIZER_KEY, true)?;
    Ok(())
}

pub fn revoke_organizer(session: &Session) {
    session.remove(ORGANIZER_KEY);
}

pub fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH_KEY, message) {
        log::warn!("Could not store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

/// Last name this browser voted under, used to prefill the vote form.
pub fn remembered_voter(session: &Session) -> Option<String> {
    session.get::<String>(VOTER_NAME_KEY).unwrap_or(None)
}

pub fn remember_voter(session: &Session, name: &str) {
    if let Err(e) = session.insert(VOTER_NAME_KEY, name) {
        log::warn!("Could not remember voter name: {e}");
    }
}
