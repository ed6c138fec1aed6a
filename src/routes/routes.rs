use actix_web::web;

use super::auth::auth_handlers;
use super::classes::classes_handlers;
use super::home;
use super::schedule::schedule_handlers;

/// Registers every endpoint; shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::welcome));
    auth_configure(cfg);
    api_configure(cfg);
    cfg.default_service(web::to(home::not_found));
}

pub fn auth_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .app_data(web::JsonConfig::default().error_handler(auth_handlers::json_error))
            .route("/register", web::post().to(auth_handlers::register))
            .route("/login", web::post().to(auth_handlers::login))
            .route("/logout", web::post().to(auth_handlers::logout))
    );
}

pub fn api_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::PathConfig::default().error_handler(home::path_error))
            .configure(classes_configure)
            .configure(schedule_configure)
    );
}

pub fn classes_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/classes")
            .route(web::get().to(classes_handlers::list_classes))
            .route(web::post().to(classes_handlers::create_class))
    )
    .service(
        web::resource("/classes/{id}")
            .route(web::get().to(classes_handlers::get_class))
            .route(web::put().to(classes_handlers::update_class))
            .route(web::delete().to(classes_handlers::delete_class))
    );
}

pub fn schedule_configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/schedule", web::get().to(schedule_handlers::get_schedule));
}
