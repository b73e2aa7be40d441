use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cli::{Cli, StoreKind};

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "NOTES_HOST";
    pub const PORT: &str = "NOTES_PORT";
    pub const CACHE_DIR: &str = "NOTES_CACHE_DIR";
    pub const STATIC_DIR: &str = "NOTES_STATIC_DIR";
    /// "file" (default) or "memory"
    pub const STORE: &str = "NOTES_STORE";
    /// Set to "true" to reject names containing path separators or `..`
    pub const STRICT_NAMES: &str = "NOTES_STRICT_NAMES";
}

/// Default values
pub mod defaults {
    pub const STATIC_DIR: &str = "static";
    pub const UPLOAD_FORM: &str = "UploadForm.html";
    /// Request body cap for note writes. Leaves room for a 1 MiB note after
    /// urlencoding or multipart framing.
    pub const MAX_NOTE_BODY_BYTES: usize = 4 * 1024 * 1024;
}

/// Returns the absolute path to the notes-backend directory.
/// Uses CARGO_MANIFEST_DIR at compile time, so it resolves the same
/// regardless of the working directory at runtime.
pub fn backend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Get the bundled static files directory (UploadForm.html lives here)
pub fn default_static_dir() -> PathBuf {
    backend_dir().join(defaults::STATIC_DIR)
}

/// Startup configuration problems. Each one stops the process before it binds.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Please, specify the server address")]
    MissingHost,

    #[error("Please, specify the server port")]
    MissingPort,

    #[error("Please, specify the path to the directory that will contain cached files")]
    MissingCacheDir,

    #[error("Invalid server port: {0}")]
    InvalidPort(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cache_dir: PathBuf,
    pub static_dir: PathBuf,
    pub store: StoreKind,
    pub strict_names: bool,
}

/// Treat a blank value the same as an absent one.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    /// Validate parsed flags. Host, port and cache directory are all required.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let host = non_empty(cli.host).ok_or(ConfigError::MissingHost)?;
        let port = non_empty(cli.port).ok_or(ConfigError::MissingPort)?;
        let cache_dir = non_empty(cli.cache).ok_or(ConfigError::MissingCacheDir)?;

        let port = port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;

        Ok(Self {
            host,
            port,
            cache_dir: PathBuf::from(cache_dir),
            static_dir: cli.static_dir.unwrap_or_else(default_static_dir),
            store: cli.store,
            strict_names: cli.strict_names,
        })
    }

    /// Path of the HTML upload form
    pub fn upload_form_path(&self) -> PathBuf {
        self.static_dir.join(defaults::UPLOAD_FORM)
    }

    /// Minimal config for handler tests
    #[cfg(test)]
    pub fn for_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            cache_dir: cache_dir.into(),
            static_dir: default_static_dir(),
            store: StoreKind::File,
            strict_names: false,
        }
    }
}

/// Resolve the cache directory to an absolute path and create it (recursively)
/// if it does not exist yet.
pub fn initialize_cache_dir(cache_dir: &Path) -> io::Result<PathBuf> {
    let cache_path = if cache_dir.is_absolute() {
        cache_dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(cache_dir)
    };

    if cache_path.exists() {
        log::info!("Cache directory already exists at: {}", cache_path.display());
    } else {
        std::fs::create_dir_all(&cache_path)?;
        log::info!("Cache directory created at: {}", cache_path.display());
    }

    Ok(cache_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["notes-backend"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_from_cli_requires_all_three() {
        let err = Config::from_cli(parse(&["-p", "3000", "-c", "cache"])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingHost));
        assert_eq!(err.to_string(), "Please, specify the server address");

        let err = Config::from_cli(parse(&["-h", "localhost", "-c", "cache"])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingPort));

        let err = Config::from_cli(parse(&["-h", "localhost", "-p", "3000"])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCacheDir));
    }

    #[test]
    fn test_from_cli_rejects_blank_and_bad_port() {
        let err = Config::from_cli(parse(&["-h", "  ", "-p", "3000", "-c", "cache"])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingHost));

        let err = Config::from_cli(parse(&["-h", "localhost", "-p", "http", "-c", "cache"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn test_from_cli_ok() {
        let config = Config::from_cli(parse(&["-h", "localhost", "-p", "3000", "-c", "cache"])).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cache_dir, PathBuf::from("cache"));
        assert_eq!(config.static_dir, default_static_dir());
        assert!(config.upload_form_path().ends_with("static/UploadForm.html"));
    }

    #[test]
    fn test_initialize_cache_dir_creates_nested() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a/b/c");

        let resolved = initialize_cache_dir(&target).unwrap();
        assert!(resolved.is_dir());

        // Second call is a no-op
        assert_eq!(initialize_cache_dir(&target).unwrap(), resolved);
    }
}
