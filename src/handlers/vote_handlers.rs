use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::csrf;
use crate::auth::session::{remember_voter, remembered_voter, set_flash};
use crate::auth::validate::validate_voter_name;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::slot::group_by_date;
use crate::models::{PollRoom, RoomHandle, SlotKey, Submission, ValidationError};
use crate::templates_structs::{DateGroupView, PageContext, VoteTemplate};

use super::forms::FormPairs;

/// What the vote form shows, captured while the room is locked.
struct VoteForm {
    event_title: Option<String>,
    revision: u64,
    groups: Vec<DateGroupView>,
}

impl VoteForm {
    fn capture(room: &PollRoom, checked: impl Fn(&SlotKey) -> bool) -> Self {
        let event = room.event();
        if !event.is_published() {
            return Self { event_title: None, revision: room.revision(), groups: vec![] };
        }
        Self {
            event_title: Some(event.title().to_string()),
            revision: room.revision(),
            groups: DateGroupView::from_groups(group_by_date(event.slots()), checked),
        }
    }

    fn render(
        self,
        session: &Session,
        config: &AppConfig,
        voter_name: String,
        errors: Vec<String>,
    ) -> Result<HttpResponse, AppError> {
        let ctx = PageContext::build(session, config, "vote");
        render(VoteTemplate {
            ctx,
            event_title: self.event_title,
            revision: self.revision,
            groups: self.groups,
            voter_name,
            errors,
        })
    }
}

/// GET /vote
pub async fn page(
    config: web::Data<AppConfig>,
    room: web::Data<RoomHandle>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let voter_name = remembered_voter(&session).unwrap_or_default();

    let view = {
        let room = room.lock();
        let event = room.event();
        // Returning voters see their previous answers.
        let previous = event.votes().get(&voter_name);
        VoteForm::capture(&room, |slot| {
            previous
                .zip(event.slots().iter().position(|s| s == slot))
                .and_then(|(selections, i)| selections.get(i).copied())
                .unwrap_or(false)
        })
    };

    view.render(&session, &config, voter_name, vec![])
}

fn record_vote(
    room: &mut PollRoom,
    voter_name: &str,
    chosen: &[SlotKey],
    revision: Option<u64>,
) -> Result<Submission, ValidationError> {
    validate_voter_name(voter_name)?;
    // A stale form names slots from an older layout, so check before mapping them.
    room.check_revision(revision)?;
    let selections = room.selections_from(chosen)?;
    room.submit_vote(voter_name, selections, None)
}

/// POST /vote: one atomic submission of every checkbox on the form.
pub async fn submit(
    config: web::Data<AppConfig>,
    room: web::Data<RoomHandle>,
    session: Session,
    form: web::Form<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let form = FormPairs(form.into_inner());
    csrf::validate_csrf(&session, form.csrf_token())?;

    let voter_name = form.first("voter_name").unwrap_or("").trim().to_string();
    let revision = form.first("revision").and_then(|r| r.trim().parse::<u64>().ok());
    let chosen: Vec<&str> = form.all("slot").collect();

    let outcome = {
        let mut room = room.lock();
        let result = chosen
            .iter()
            .map(|key| key.parse::<SlotKey>())
            .collect::<Result<Vec<_>, _>>()
            .and_then(|slots| record_vote(&mut room, &voter_name, &slots, revision));
        match result {
            Ok(submission) => Ok((submission, room.event().votes().len())),
            Err(e) => {
                let view = VoteForm::capture(&room, |slot| chosen.contains(&slot.to_key().as_str()));
                Err((e, view))
            }
        }
    };

    match outcome {
        Ok((submission, voter_count)) => {
            log::info!(
                "Vote {} for '{voter_name}' ({voter_count} voter(s) total)",
                submission.as_str()
            );
            remember_voter(&session, &voter_name);
            let message = match submission {
                Submission::Recorded => format!("Thanks {voter_name}, your availability was recorded"),
                Submission::Replaced => format!("Thanks {voter_name}, your availability was updated"),
            };
            set_flash(&session, &message);
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/results"))
                .finish())
        }
        Err((e, view)) => view.render(&session, &config, voter_name, vec![e.to_string()]),
    }
}
