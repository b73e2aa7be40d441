use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use dotenv::dotenv;
use std::sync::Arc;

mod cli;
mod config;
mod controllers;
mod notes;

use cli::{Cli, StoreKind};
use config::Config;
use notes::{FileNoteStore, MemoryNoteStore, NoteRepository};

pub struct AppState {
    /// Note repository shared by every worker
    pub notes: Arc<dyn NoteRepository>,
    pub config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = match Config::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!("Notes backend v{}", env!("CARGO_PKG_VERSION"));
    log::info!(
        "Host: {}, Port: {}, Cache Directory: {}",
        config.host,
        config.port,
        config.cache_dir.display()
    );

    config.cache_dir = config::initialize_cache_dir(&config.cache_dir)?;

    let notes: Arc<dyn NoteRepository> = match config.store {
        StoreKind::File => {
            let store = FileNoteStore::new(config.cache_dir.clone());
            log::info!("[NOTES] File store rooted at {}", store.cache_dir().display());
            Arc::new(store)
        }
        StoreKind::Memory => {
            log::warn!("[NOTES] Using in-memory store; notes are lost on shutdown");
            Arc::new(MemoryNoteStore::new())
        }
    };
    if config.strict_names {
        log::info!("[NOTES] Strict note names enabled");
    }

    let host = config.host.clone();
    let port = config.port;
    let state = web::Data::new(AppState { notes, config });

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::configure)
    })
    .bind((host.as_str(), port))?
    .run();

    log::info!("Server is running on http://{}:{}", host, port);

    let server_handle = server.handle();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            log::warn!("Failed to listen for Ctrl+C; graceful shutdown disabled");
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
