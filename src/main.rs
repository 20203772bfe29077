use actix_web::{App, HttpServer, middleware, web};

use slotpoll::auth::passphrase::OrganizerGate;
use slotpoll::auth::rate_limit::RateLimiter;
use slotpoll::config::AppConfig;
use slotpoll::models::RoomHandle;
use slotpoll::{handlers, session_middleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    let gate = OrganizerGate::from_passphrase(&config.organizer_passphrase)
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    // The poll lives only as long as the process.
    let room = RoomHandle::new();
    let limiter = RateLimiter::default();

    let bind = config.bind.clone();
    log::info!("Starting {} at http://{bind}", config.app_name);

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(config.session_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(room.clone()))
            .app_data(web::Data::new(gate.clone()))
            .app_data(web::Data::new(limiter.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind)?
    .run()
    .await
}
