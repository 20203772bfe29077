pub mod poll;

use actix_web::{
    Error, HttpRequest, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    error::{InternalError, JsonPayloadError},
    http::{Method, header},
    middleware::Next,
    web,
};

use poll::ApiErrorResponse;

fn is_json(req: &ServiceRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

/// Votes posted to the API must be JSON. A plain cross-site form cannot set
/// that content type, so the check stands in for a CSRF token.
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if req.method() == Method::POST && !is_json(&req) {
        let response = HttpResponse::UnsupportedMediaType().json(ApiErrorResponse {
            error: "Votes must be sent as application/json".to_string(),
            field: "content_type",
        });
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Malformed or mistyped JSON bodies answer in the same shape as a rejected vote.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(ApiErrorResponse {
        error: err.to_string(),
        field: "body",
    });
    InternalError::from_response(err, response).into()
}

/// Mount the poll API under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .route("/event", web::get().to(poll::event))
            .route("/tally", web::get().to(poll::tally))
            .route("/votes", web::post().to(poll::submit_vote)),
    );
}
