use actix_files::NamedFile;
use actix_web::web;

use crate::AppState;

/// Serve the HTML form that posts new notes to `/write`
async fn upload_form(data: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    let path = data.config.upload_form_path();
    NamedFile::open_async(&path).await.map_err(|e| {
        log::warn!("Upload form not available at {}: {}", path.display(), e);
        e.into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/UploadForm.html").route(web::get().to(upload_form)));
}
