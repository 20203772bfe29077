//! Shared test infrastructure.
//!
//! - Slot and event builders for model tests
//! - A cookie jar and CSRF scraper for driving the HTTP handlers

#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test::TestRequest;
use chrono::NaiveDate;
use regex::Regex;

use slotpoll::config::AppConfig;
use slotpoll::models::{Event, SlotKey, TimeOfDay};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const PASSPHRASE: &str = "correct horse";
pub const TITLE: &str = "Q1 planning";

// ============================================================================
// MODEL BUILDERS
// ============================================================================

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn time(hour: u8) -> TimeOfDay {
    TimeOfDay::from_hour(hour).expect("allowed test hour")
}

/// Parse a canonical `YYYY-MM-DD HH:MM` slot.
pub fn slot(key: &str) -> SlotKey {
    key.parse().expect("valid test slot")
}

pub fn slots(keys: &[&str]) -> Vec<SlotKey> {
    keys.iter().map(|k| slot(k)).collect()
}

pub fn published(keys: &[&str]) -> Event {
    Event::publish(TITLE, &slots(keys)).expect("publish test event")
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

/// Config with a fixed passphrase and a throwaway session key.
pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|name| match name {
        "SLOTPOLL_ORGANIZER_PASSPHRASE" => Some(PASSPHRASE.to_string()),
        _ => None,
    })
}

/// Minimal browser cookie store: the latest cookie of each name wins.
#[derive(Default)]
pub struct CookieJar {
    cookies: Vec<Cookie<'static>>,
}

impl CookieJar {
    pub fn update<B>(&mut self, resp: &ServiceResponse<B>) {
        for cookie in resp.response().cookies() {
            let cookie = cookie.into_owned();
            self.cookies.retain(|c| c.name() != cookie.name());
            self.cookies.push(cookie);
        }
    }

    pub fn apply(&self, mut req: TestRequest) -> TestRequest {
        for cookie in &self.cookies {
            req = req.cookie(cookie.clone());
        }
        req
    }
}

/// Pull the CSRF token out of a rendered form.
pub fn extract_csrf_token(html: &str) -> Option<String> {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("valid regex");
    re.captures(html).map(|c| c[1].to_string())
}

/// Urlencoded POST request; repeated keys are kept in order.
pub fn form_post(uri: &str, pairs: &[(&str, &str)]) -> TestRequest {
    let body = serde_urlencoded::to_string(pairs).expect("encode form");
    TestRequest::post()
        .uri(uri)
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload(body)
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
