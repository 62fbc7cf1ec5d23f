//! # analisador: git commit-average analysis service
//!
//! A small HTTP service that clones a hosted git repository, walks its full
//! commit history once, and records per-author commit statistics: total
//! commits, distinct active days, and the average commits per active day.
//! Results are persisted to SQLite and can be queried later by (partial,
//! case-insensitive) author name.
//!
//! ## HTTP surface
//!
//! - `GET /analisador-git?usuario=<user>&repositorio=<repo>` clones
//!   `https://<git_host>/<user>/<repo>.git` into a fresh per-request working
//!   directory, aggregates the history, persists one row per author and
//!   returns one human-readable line per author. The working directory is
//!   removed when the analysis finishes, on failure as well.
//! - `GET /analisador-git/buscar?autor1=&autor2=&autor3=` returns previously
//!   recorded averages for authors whose name contains any of the supplied
//!   fragments, deduplicated by author.
//!
//! All errors are reported as `{"error": "<message>"}` with HTTP 400.
//!
//! ## Architecture
//!
//! The HTTP layer is built on [Axum](https://github.com/tokio-rs/axum); all
//! persistence goes through sqlx over a SQLite database that is migrated at
//! startup. libgit2 does the cloning and the history walk on a blocking
//! thread. See [`config`] for configuration options.

pub mod analysis;
pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

use std::str::FromStr;

use axum::{routing::get, Router};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{info, instrument, Level};

pub use config::Config;

/// Application state shared across all request handlers.
///
/// Constructed once at startup and cloned into each handler; the database
/// pool is opened in [`Application::new`] and closed at shutdown.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
}

/// Get the database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Build the application router with all endpoints and middleware.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/analisador-git", get(api::handlers::analysis::analyze_repository))
        .route("/analisador-git/buscar", get(api::handlers::analysis::search_averages))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Main application struct that owns all resources and lifecycle.
///
/// 1. **Create**: [`Application::new`] opens the database pool, runs
///    migrations and builds the router
/// 2. **Serve**: [`Application::serve`] binds to a TCP port and handles
///    requests until the shutdown future resolves
pub struct Application {
    router: Router,
    config: Config,
    pool: SqlitePool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        migrator().run(&pool).await?;

        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };
        let router = build_router(state);

        Ok(Self { router, config, pool })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("Analisador listening on http://{}", bind_addr);

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
