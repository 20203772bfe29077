use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{is_organizer, take_flash};
use crate::config::AppConfig;

mod poll;

pub use poll::*;

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
    pub flash: Option<String>,
    pub is_organizer: bool,
    pub active_tab: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig, active_tab: &str) -> Self {
        Self {
            app_name: config.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
            flash: take_flash(session),
            is_organizer: is_organizer(session),
            active_tab: active_tab.to_string(),
        }
    }
}
