//! FileNoteStore — notes as files directly under the cache directory
//!
//! File name = note name, file content = note text. Only regular files count
//! as notes; anything else in the directory is ignored.

use super::file_ops::{self, decode_text, is_missing, note_path};
use super::{NoteError, NoteRepository, Result};
use async_trait::async_trait;
use notes_types::Note;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub struct FileNoteStore {
    cache_dir: PathBuf,
}

impl FileNoteStore {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Get the cache directory path
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        note_path(&self.cache_dir, name)
    }

    async fn ensure_note(&self, name: &str, path: &Path) -> Result<()> {
        if file_ops::is_note_file(path).await? {
            Ok(())
        } else {
            Err(NoteError::NotFound(name.to_string()))
        }
    }
}

fn not_found_or_io(name: &str, e: io::Error) -> NoteError {
    if is_missing(&e) {
        NoteError::NotFound(name.to_string())
    } else {
        NoteError::Io(e)
    }
}

/// Fill a freshly created note. On failure the file is removed so the name is
/// free again and no truncated note is ever served.
async fn fill_new_note<W>(writer: &mut W, path: &Path, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written = match writer.write_all(text.as_bytes()).await {
        Ok(()) => writer.flush().await,
        Err(e) => Err(e),
    };

    if let Err(e) = written {
        if let Err(rm) = fs::remove_file(path).await {
            log::warn!(
                "[NOTES] Failed to remove partial note {}: {}",
                path.display(),
                rm
            );
        }
        return Err(NoteError::Io(e));
    }
    Ok(())
}

#[async_trait]
impl NoteRepository for FileNoteStore {
    async fn exists(&self, name: &str) -> Result<bool> {
        Ok(file_ops::is_note_file(&self.path_for(name)).await?)
    }

    async fn get(&self, name: &str) -> Result<String> {
        let path = self.path_for(name);
        self.ensure_note(name, &path).await?;

        let raw = fs::read(&path)
            .await
            .map_err(|e| not_found_or_io(name, e))?;
        Ok(decode_text(raw))
    }

    async fn update(&self, name: &str, text: &str) -> Result<()> {
        let path = self.path_for(name);
        self.ensure_note(name, &path).await?;

        // No `create`: a note deleted since the check stays deleted.
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
            .await
            .map_err(|e| not_found_or_io(name, e))?;
        file.write_all(text.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name);
        self.ensure_note(name, &path).await?;

        fs::remove_file(&path)
            .await
            .map_err(|e| not_found_or_io(name, e))
    }

    async fn list(&self) -> Result<Vec<Note>> {
        let mut notes = Vec::new();
        let mut read_dir = fs::read_dir(&self.cache_dir).await?;

        while let Some(entry) = read_dir.next_entry().await? {
            let name = entry.file_name().to_string_lossy().to_string();

            // file_type() does not follow symlinks
            let file_type = entry.file_type().await?;
            if !file_type.is_file() {
                log::info!("[NOTES] Skipping directory: {}", name);
                continue;
            }

            match fs::read(entry.path()).await {
                Ok(raw) => notes.push(Note::new(name, decode_text(raw))),
                // Removed between enumeration and read
                Err(e) if is_missing(&e) => continue,
                Err(e) => return Err(NoteError::Io(e)),
            }
        }

        Ok(notes)
    }

    async fn create_if_absent(&self, name: &str, text: &str) -> Result<()> {
        let path = self.path_for(name);

        // Exclusive create: the existence check and the write are one syscall.
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(NoteError::Conflict(name.to_string()));
            }
            Err(e) => return Err(NoteError::Io(e)),
        };

        fill_new_note(&mut file, &path, text).await
    }
}
