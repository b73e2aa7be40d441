use actix_web::web;

pub mod docs;
pub mod notes;
pub mod upload_form;

/// Register every route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(notes::config)
        .configure(docs::config)
        .configure(upload_form::config);
}
