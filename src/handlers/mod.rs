pub mod api_v1;
pub mod forms;
pub mod organizer_handlers;
pub mod results_handlers;
pub mod vote_handlers;

use actix_web::{HttpResponse, web};

use crate::auth::middleware::{UNLOCK_PATH, require_organizer};

/// Register every poll route.
///
/// The unlock routes are registered before the `/organize` scope, which would
/// otherwise claim them and answer with the organizer redirect.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/",
        web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", "/vote"))
                .finish()
        }),
    )
    .route(UNLOCK_PATH, web::get().to(organizer_handlers::unlock_page))
    .route(UNLOCK_PATH, web::post().to(organizer_handlers::unlock_submit))
    .service(
        web::scope("/organize")
            .wrap(actix_web::middleware::from_fn(require_organizer))
            .route("", web::get().to(organizer_handlers::index))
            .route("/slots", web::post().to(organizer_handlers::add_slots))
            .route("/clear", web::post().to(organizer_handlers::clear_draft))
            .route("/publish", web::post().to(organizer_handlers::publish))
            .route("/lock", web::post().to(organizer_handlers::lock)),
    )
    .route("/vote", web::get().to(vote_handlers::page))
    .route("/vote", web::post().to(vote_handlers::submit))
    .route("/results", web::get().to(results_handlers::page))
    .configure(api_v1::configure);
}
