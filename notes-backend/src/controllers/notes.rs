//! Notes REST API — CRUD over the note repository.
//!
//! `/notes/{note_name}` reads, updates and deletes single notes, `/notes`
//! lists every note with its text, and `/write` creates a note from form data.

use actix_multipart::form::{text::Text, MultipartForm, MultipartFormConfig};
use actix_web::http::StatusCode;
use actix_web::{web, Either, HttpMessage, HttpRequest, HttpResponse, ResponseError};
use notes_types::{CreateNoteForm, UpdateNoteRequest};

use crate::config::defaults::MAX_NOTE_BODY_BYTES;
use crate::notes::{file_ops, NoteError};
use crate::AppState;

impl ResponseError for NoteError {
    fn status_code(&self) -> StatusCode {
        match self {
            NoteError::NotFound(_) => StatusCode::NOT_FOUND,
            // An existing name is reported as 400, not 409
            NoteError::BadRequest(_) | NoteError::Conflict(_) | NoteError::InvalidName(_) => {
                StatusCode::BAD_REQUEST
            }
            NoteError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let NoteError::Io(e) = self {
            log::error!("[NOTES] Internal error: {}", e);
        }
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.user_message())
    }
}

fn check_name(state: &AppState, name: &str) -> Result<(), NoteError> {
    if state.config.strict_names && !file_ops::is_safe_note_name(name) {
        return Err(NoteError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn plain_text(status: StatusCode, body: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/plain; charset=utf-8")
        .body(body.into())
}

// --- Single note ---

/// Read a note's text
async fn get_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, NoteError> {
    let name = path.into_inner();
    check_name(&data, &name)?;

    let text = data.notes.get(&name).await?;
    Ok(plain_text(StatusCode::OK, text))
}

/// Only `application/json` bodies are read; anything else has no `text`.
fn parse_update(req: &HttpRequest, body: &[u8]) -> Option<String> {
    if req.content_type() != "application/json" {
        return None;
    }
    serde_json::from_slice::<UpdateNoteRequest>(body)
        .ok()
        .and_then(|update| update.text)
}

/// Replace a note's text. Existence is checked before the body is looked at.
async fn update_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, NoteError> {
    let name = path.into_inner();
    check_name(&data, &name)?;

    if !data.notes.exists(&name).await? {
        return Err(NoteError::NotFound(name));
    }

    // Unparseable or non-object bodies count as a missing `text`
    let text = parse_update(&req, &body)
        .ok_or_else(|| NoteError::BadRequest("Text is required".to_string()))?;

    data.notes.update(&name, &text).await?;
    Ok(plain_text(StatusCode::OK, "Note updated"))
}

async fn delete_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, NoteError> {
    let name = path.into_inner();
    check_name(&data, &name)?;

    data.notes.delete(&name).await?;
    Ok(plain_text(StatusCode::OK, "Note deleted"))
}

// --- List notes ---

/// Every note with its full text. Order is whatever the store yields.
async fn list_notes(data: web::Data<AppState>) -> Result<HttpResponse, NoteError> {
    let notes = data.notes.list().await?;
    Ok(HttpResponse::Ok().json(notes))
}

// --- Create note ---

/// Multipart variant of the create form (what the HTML upload form sends)
#[derive(Debug, MultipartForm)]
struct CreateNoteUpload {
    note_name: Option<Text<String>>,
    note: Option<Text<String>>,
}

impl From<CreateNoteUpload> for CreateNoteForm {
    fn from(upload: CreateNoteUpload) -> Self {
        Self {
            note_name: upload.note_name.map(Text::into_inner),
            note: upload.note.map(Text::into_inner),
        }
    }
}

/// Create a note from `note_name` and `note` fields (urlencoded or multipart)
async fn write_note(
    data: web::Data<AppState>,
    form: Either<web::Form<CreateNoteForm>, MultipartForm<CreateNoteUpload>>,
) -> Result<HttpResponse, NoteError> {
    let form: CreateNoteForm = match form {
        Either::Left(form) => form.into_inner(),
        Either::Right(upload) => upload.into_inner().into(),
    };

    let name = form
        .note_name
        .ok_or_else(|| NoteError::BadRequest("note_name is required".to_string()))?;
    let text = form
        .note
        .ok_or_else(|| NoteError::BadRequest("note is required".to_string()))?;
    check_name(&data, &name)?;

    match data.notes.create_if_absent(&name, &text).await {
        Ok(()) => Ok(plain_text(StatusCode::CREATED, "Note created")),
        Err(NoteError::Io(e)) => {
            log::error!("[NOTES] Error writing note {}: {}", name, e);
            Ok(plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Error creating note"))
        }
        Err(e) => Err(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/notes").route(web::get().to(list_notes)))
        .service(
            web::resource("/notes/{note_name}")
                .app_data(web::PayloadConfig::new(MAX_NOTE_BODY_BYTES))
                .route(web::get().to(get_note))
                .route(web::put().to(update_note))
                .route(web::delete().to(delete_note)),
        )
        .service(
            web::resource("/write")
                // Either buffers the whole body before trying each extractor
                .app_data(web::PayloadConfig::new(MAX_NOTE_BODY_BYTES))
                .app_data(web::FormConfig::default().limit(MAX_NOTE_BODY_BYTES))
                .app_data(
                    MultipartFormConfig::default()
                        .total_limit(MAX_NOTE_BODY_BYTES)
                        .memory_limit(MAX_NOTE_BODY_BYTES),
                )
                .route(web::post().to(write_note)),
        );
}
