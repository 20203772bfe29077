use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::auth::validate::validate_voter_name;
use crate::errors::AppError;
use crate::models::{Ballot, RoomHandle, SlotKey, ValidationError};

#[derive(Serialize)]
pub struct ApiEventResponse {
    pub title: String,
    pub published: bool,
    pub revision: u64,
    pub slots: Vec<SlotKey>,
    pub votes: Vec<Ballot>,
}

#[derive(Deserialize)]
pub struct ApiVoteRequest {
    pub voter_name: String,
    pub selections: Vec<bool>,
    #[serde(default)]
    pub revision: Option<u64>,
}

#[derive(Serialize)]
pub struct ApiVoteResponse {
    pub status: &'static str,
    pub voter: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
    pub field: &'static str,
}

impl From<&ValidationError> for ApiErrorResponse {
    fn from(e: &ValidationError) -> Self {
        Self { error: e.to_string(), field: e.field() }
    }
}

/// GET /api/v1/event: the live event, slots in canonical form.
pub async fn event(room: web::Data<RoomHandle>) -> Result<HttpResponse, AppError> {
    let response = {
        let room = room.lock();
        let event = room.event();
        ApiEventResponse {
            title: event.title().to_string(),
            published: event.is_published(),
            revision: room.revision(),
            slots: event.slots().to_vec(),
            votes: event.votes().iter().cloned().collect(),
        }
    };
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/v1/tally: per-slot counts and the best slot (null with no votes).
pub async fn tally(room: web::Data<RoomHandle>) -> Result<HttpResponse, AppError> {
    let report = room.lock().tally();
    Ok(HttpResponse::Ok().json(report))
}

/// POST /api/v1/votes: submit a whole availability vector.
pub async fn submit_vote(
    room: web::Data<RoomHandle>,
    body: web::Json<ApiVoteRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let result = validate_voter_name(&body.voter_name).and_then(|()| {
        room.lock()
            .submit_vote(&body.voter_name, body.selections, body.revision)
    });

    match result {
        Ok(submission) => {
            let voter = body.voter_name.trim().to_string();
            log::info!("API vote {} for '{voter}'", submission.as_str());
            Ok(HttpResponse::Created().json(ApiVoteResponse { status: submission.as_str(), voter }))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiErrorResponse::from(&e))),
    }
}
