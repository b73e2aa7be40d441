//! Shared wire types for the note cache service and its HTTP clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Request Types
// =====================================================

/// Body of `PUT /notes/{note_name}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    /// Replacement content. A missing field is rejected with 400.
    #[serde(default)]
    pub text: Option<String>,
}

/// Form fields of `POST /write`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateNoteForm {
    #[serde(default)]
    pub note_name: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

// =====================================================
// Domain Types
// =====================================================

/// A note as returned by `GET /notes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    pub text: String,
}

impl Note {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}
