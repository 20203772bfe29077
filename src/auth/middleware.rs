use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use super::session::is_organizer;

pub const UNLOCK_PATH: &str = "/organize/unlock";

/// Middleware function that lets only unlocked organizer sessions through.
/// Everyone else is redirected to the passphrase form.
pub async fn require_organizer(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if !is_organizer(&req.get_session()) {
        let response = HttpResponse::SeeOther()
            .insert_header(("Location", UNLOCK_PATH))
            .finish();
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}
