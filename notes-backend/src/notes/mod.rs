//! Note storage — one plain-text file per note in the cache directory
//!
//! Handlers talk to a [`NoteRepository`]; the file-backed store is used in
//! production and the in-memory store for tests or throwaway instances.

pub mod error;
pub mod file_ops;
pub mod memory;
pub mod store;

use async_trait::async_trait;
use notes_types::Note;

pub use error::{NoteError, Result};
pub use memory::MemoryNoteStore;
pub use store::FileNoteStore;

/// Keyed text store addressed by note name.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// True if a note with this name exists.
    async fn exists(&self, name: &str) -> Result<bool>;

    /// Note text, or `NotFound`.
    async fn get(&self, name: &str) -> Result<String>;

    /// Overwrite an existing note. Never creates; `NotFound` if absent.
    async fn update(&self, name: &str, text: &str) -> Result<()>;

    /// Remove a note, or `NotFound`.
    async fn delete(&self, name: &str) -> Result<()>;

    /// Every note with its text. Order is unspecified.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Create a note only if the name is free, otherwise `Conflict`.
    async fn create_if_absent(&self, name: &str, text: &str) -> Result<()>;
}
