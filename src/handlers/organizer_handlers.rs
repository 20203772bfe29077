use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::{Local, NaiveDate};

use crate::auth::passphrase::OrganizerGate;
use crate::auth::rate_limit::RateLimiter;
use crate::auth::session::{grant_organizer, is_organizer, revoke_organizer, set_flash};
use crate::auth::csrf;
use crate::auth::validate::validate_title;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::slot::{self, group_by_date};
use crate::models::{AddOutcome, RoomHandle, TimeOfDay, ValidationError};
use crate::templates_structs::{
    DateGroupView, LiveEventSummary, OrganizeTemplate, PageContext, UnlockTemplate,
};

use super::forms::{CsrfOnly, FormPairs, PublishForm, UnlockForm};

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

fn render_unlock(session: &Session, config: &AppConfig, error: Option<String>) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, config, "organize");
    render(UnlockTemplate { ctx, error })
}

/// Render the organizer page. `title_value` overrides the prefilled title.
fn render_index(
    session: &Session,
    config: &AppConfig,
    room: &RoomHandle,
    title_value: Option<String>,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let (draft_groups, draft_count, live, current_title) = {
        let room = room.lock();
        let draft = room.draft();
        let event = room.event();
        let live = event.is_published().then(|| LiveEventSummary {
            title: event.title().to_string(),
            slot_count: event.slots().len(),
            voter_count: event.votes().len(),
            revision: room.revision(),
        });
        (
            DateGroupView::from_groups(group_by_date(draft.as_slice()), |_| false),
            draft.len(),
            live,
            event.title().to_string(),
        )
    };

    let ctx = PageContext::build(session, config, "organize");
    let tmpl = OrganizeTemplate {
        ctx,
        title_value: title_value.unwrap_or(current_title),
        today: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        times: TimeOfDay::ALL.iter().map(|t| t.label()).collect(),
        draft_groups,
        draft_count,
        live,
        errors,
    };
    render(tmpl)
}

/// GET /organize/unlock
pub async fn unlock_page(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    if is_organizer(&session) {
        return Ok(redirect("/organize"));
    }
    render_unlock(&session, &config, None)
}

/// POST /organize/unlock
pub async fn unlock_submit(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    session: Session,
    gate: web::Data<OrganizerGate>,
    limiter: web::Data<RateLimiter>,
    form: web::Form<UnlockForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED));

    if limiter.is_blocked(ip) {
        log::warn!("Organizer unlock blocked for {ip}");
        return render_unlock(
            &session,
            &config,
            Some("Too many failed attempts. Please try again later.".to_string()),
        );
    }

    if !gate.verify(&form.passphrase) {
        limiter.record_failure(ip);
        log::warn!("Failed organizer unlock from {ip}");
        return render_unlock(&session, &config, Some("Incorrect passphrase".to_string()));
    }

    limiter.clear(ip);
    grant_organizer(&session)?;
    set_flash(&session, "Organizer mode unlocked");
    Ok(redirect("/organize"))
}

/// POST /organize/lock
pub async fn lock(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    revoke_organizer(&session);
    set_flash(&session, "Organizer mode locked");
    Ok(redirect("/vote"))
}

/// GET /organize
pub async fn index(
    config: web::Data<AppConfig>,
    room: web::Data<RoomHandle>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    render_index(&session, &config, &room, None, vec![])
}

fn parse_add_request(form: &FormPairs) -> Result<(NaiveDate, Vec<TimeOfDay>), ValidationError> {
    let date = slot::parse_date(form.first("date").unwrap_or(""))?;
    let times = form
        .all("time")
        .map(str::parse::<TimeOfDay>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok((date, times))
}

fn added_message(outcome: AddOutcome) -> String {
    if outcome.duplicates() == 0 {
        format!("Added {} slot(s) to the draft", outcome.added)
    } else {
        format!(
            "Added {} of {} slot(s), {} already in the draft",
            outcome.added,
            outcome.requested,
            outcome.duplicates()
        )
    }
}

/// POST /organize/slots: add the selected times on one date to the draft.
pub async fn add_slots(
    config: web::Data<AppConfig>,
    room: web::Data<RoomHandle>,
    session: Session,
    form: web::Form<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let form = FormPairs(form.into_inner());
    csrf::validate_csrf(&session, form.csrf_token())?;

    let result = parse_add_request(&form)
        .and_then(|(date, times)| room.lock().add_slots(date, &times));

    match result {
        Ok(outcome) => {
            set_flash(&session, &added_message(outcome));
            Ok(redirect("/organize"))
        }
        Err(e) => render_index(&session, &config, &room, None, vec![e.to_string()]),
    }
}

/// POST /organize/clear
pub async fn clear_draft(
    room: web::Data<RoomHandle>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    room.lock().clear_draft();
    set_flash(&session, "Draft cleared");
    Ok(redirect("/organize"))
}

/// POST /organize/publish: replace the live meeting with the draft.
pub async fn publish(
    config: web::Data<AppConfig>,
    room: web::Data<RoomHandle>,
    session: Session,
    form: web::Form<PublishForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let published = validate_title(&form.title).and_then(|()| {
        let mut room = room.lock();
        room.publish(&form.title)
            .map(|event| (event.title().to_string(), event.slots().len()))
    });

    match published {
        Ok((title, slot_count)) => {
            log::info!("Published meeting '{title}' with {slot_count} slot(s)");
            set_flash(
                &session,
                &format!("Meeting \"{title}\" published with {slot_count} slot(s)"),
            );
            Ok(redirect("/organize"))
        }
        Err(e) => render_index(
            &session,
            &config,
            &room,
            Some(form.title.clone()),
            vec![e.to_string()],
        ),
    }
}
