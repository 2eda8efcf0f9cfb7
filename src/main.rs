use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    http::StatusCode,
    routing::{any, get},
    Router,
};
use clap::Parser;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod tokens;

use tokens::TokenRegistry;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub db: sqlx::SqlitePool,
    /// Anti-forgery tokens handed out by GET /add and not yet spent.
    pub tokens: TokenRegistry,
}

// ── Router ─────────────────────────────────────────────────────────────────

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/add",
            get(handlers::add::add_form)
                .post(handlers::add::add_link)
                // `get` would otherwise answer HEAD and issue a token
                .head(handlers::add::unsupported_method)
                .fallback(handlers::add::unsupported_method),
        )
        .route("/favicon.ico", any(|| async { StatusCode::NOT_FOUND }))
        // Short-link redirect; static routes above take priority
        .route("/*name", any(handlers::redirect::redirect))
        .fallback(handlers::redirect::not_found)
        .with_state(state)
        .layer(trace_layer())
}

/// Every request, whichever route handles it, is logged at info.
fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

// ── Entry point ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (ignore error if file is absent)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "st=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::AppConfig::parse();

    if let Err(e) = run(config).await {
        tracing::error!("Fatal: {:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn run(config: config::AppConfig) -> anyhow::Result<()> {
    let db = db::connect(&config.db)
        .await
        .with_context(|| format!("error opening sqlite db {}", config.db.display()))?;
    db::initialize(&db)
        .await
        .context("error initializing database")?;
    tracing::info!("Using link database {}", config.db.display());

    let state = Arc::new(AppState {
        db,
        tokens: TokenRegistry::new(),
    });

    let bind_addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("error binding {bind_addr}"))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;

    Ok(())
}
