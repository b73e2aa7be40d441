//! Error type shared by every note repository.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoteError {
    /// No regular file exists for the note name.
    #[error("Note not found: {0}")]
    NotFound(String),

    /// A required request field was missing.
    #[error("{0}")]
    BadRequest(String),

    /// Create was asked for a name that is already taken.
    #[error("Note already exists: {0}")]
    Conflict(String),

    /// Rejected by strict name checking before touching the filesystem.
    #[error("Invalid note name: {0}")]
    InvalidName(String),

    /// An I/O operation on the cache directory failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NoteError>;

impl NoteError {
    /// Short message returned to HTTP callers. I/O details are never exposed.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Not found".to_string(),
            Self::BadRequest(msg) => msg.clone(),
            Self::Conflict(_) => "Note already exists".to_string(),
            Self::InvalidName(_) => "Invalid note name".to_string(),
            Self::Io(_) => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_detail_is_hidden() {
        let e = NoteError::from(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert!(e.to_string().contains("disk on fire"));
        assert!(!e.user_message().contains("disk on fire"));
    }

    #[test]
    fn test_bad_request_message_passes_through() {
        let e = NoteError::BadRequest("Text is required".to_string());
        assert_eq!(e.user_message(), "Text is required");
        assert_eq!(NoteError::NotFound("x".into()).user_message(), "Not found");
    }
}
