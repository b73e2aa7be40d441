//! In-process note store. Nothing touches disk; contents vanish on restart.

use super::{NoteError, NoteRepository, Result};
use async_trait::async_trait;
use notes_types::Note;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
pub struct MemoryNoteStore {
    notes: RwLock<HashMap<String, String>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteStore {
    async fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.notes.read().contains_key(name))
    }

    async fn get(&self, name: &str) -> Result<String> {
        self.notes
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| NoteError::NotFound(name.to_string()))
    }

    async fn update(&self, name: &str, text: &str) -> Result<()> {
        match self.notes.write().get_mut(name) {
            Some(existing) => {
                *existing = text.to_string();
                Ok(())
            }
            None => Err(NoteError::NotFound(name.to_string())),
        }
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.notes
            .write()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| NoteError::NotFound(name.to_string()))
    }

    async fn list(&self) -> Result<Vec<Note>> {
        Ok(self
            .notes
            .read()
            .iter()
            .map(|(name, text)| Note::new(name.clone(), text.clone()))
            .collect())
    }

    async fn create_if_absent(&self, name: &str, text: &str) -> Result<()> {
        let mut notes = self.notes.write();
        if notes.contains_key(name) {
            return Err(NoteError::Conflict(name.to_string()));
        }
        notes.insert(name.to_string(), text.to_string());
        Ok(())
    }
}
