use actix_web::cookie::Key;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_APP_NAME: &str = "Meeting Time Poll";
pub const DEFAULT_PASSPHRASE: &str = "organizer";

/// Minimum `SESSION_KEY` length accepted by `Key::from`.
const SESSION_KEY_MIN_LEN: usize = 64;

/// Runtime configuration, read from the environment (and `.env` via dotenvy in `main`).
#[derive(Clone)]
pub struct AppConfig {
    pub bind: String,
    pub app_name: String,
    pub organizer_passphrase: String,
    pub session_key: Key,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from any name -> value lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind = lookup("SLOTPOLL_BIND")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let app_name = lookup("SLOTPOLL_APP_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        let organizer_passphrase = match lookup("SLOTPOLL_ORGANIZER_PASSPHRASE") {
            Some(val) if !val.is_empty() => val,
            _ => {
                log::warn!(
                    "No SLOTPOLL_ORGANIZER_PASSPHRASE set, using the default '{DEFAULT_PASSPHRASE}'"
                );
                DEFAULT_PASSPHRASE.to_string()
            }
        };

        let session_key = match lookup("SESSION_KEY") {
            Some(val) if val.len() >= SESSION_KEY_MIN_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {SESSION_KEY_MIN_LEN}+), generating random key",
                    val.len()
                );
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        };

        Self { bind, app_name, organizer_passphrase, session_key }
    }
}
