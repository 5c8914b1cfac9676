//! Encyclopedia, a small markdown wiki.
//!
//! Entries live as `<title>.md` files in the entries directory and are served
//! as server-rendered HTML pages.

use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod entries;
mod error;
mod forms;
mod markup;
mod search;
mod templates;

use config::Config;
use entries::{EntryStore, FileEntryStore};

pub struct AppState {
    /// Where entries are read from and written to
    pub store: Arc<dyn EntryStore>,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self {
            store,
            started_at: std::time::Instant::now(),
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Encyclopedia v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    log::info!("Using entries directory: {:?}", config.entries_dir);

    let store: Arc<dyn EntryStore> = match FileEntryStore::new(config.entries_dir.clone()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::error!("Failed to open entries directory {:?}: {}", config.entries_dir, e);
            std::process::exit(1);
        }
    };

    let static_dir = config.static_dir.clone();
    if !static_dir.exists() {
        log::warn!("Static directory {:?} not found, pages will be unstyled", static_dir);
    }

    let state = web::Data::new(AppState::new(store));

    log::info!("Listening on http://{}:{}", config.bind_host, config.port);

    let server = HttpServer::new(move || {
        let mut app = App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(controllers::health::config_routes)
            .configure(controllers::wiki::config);

        if static_dir.exists() {
            app = app.service(Files::new("/static", static_dir.clone()));
        }

        app
    })
    .bind((config.bind_host.as_str(), config.port))?
    .run();

    let server_handle = server.handle();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
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
