//! Command-line interface definition using clap derive macros.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::env_vars;

/// Which note repository backs the HTTP handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// One file per note in the cache directory
    File,
    /// Process memory only (lost on restart)
    Memory,
}

/// Plain-text note service backed by a cache directory.
///
/// `-h` is taken by `--host`, so help is only available as `--help`.
#[derive(Debug, Parser)]
#[command(name = "notes-backend", version, about, disable_help_flag = true)]
pub struct Cli {
    /// Server host
    #[arg(short = 'h', long, env = env_vars::HOST, value_name = "HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(short, long, env = env_vars::PORT, value_name = "PORT")]
    pub port: Option<String>,

    /// Cache directory holding one file per note
    #[arg(short, long, env = env_vars::CACHE_DIR, value_name = "PATH")]
    pub cache: Option<String>,

    /// Directory containing UploadForm.html
    #[arg(long, env = env_vars::STATIC_DIR, value_name = "PATH")]
    pub static_dir: Option<PathBuf>,

    /// Note storage backend
    #[arg(long, value_enum, env = env_vars::STORE, default_value_t = StoreKind::File)]
    pub store: StoreKind,

    /// Reject note names that are not a single path component
    #[arg(long, env = env_vars::STRICT_NAMES)]
    pub strict_names: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}
