use crate::models::Link;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqlitePool,
};
use std::path::Path;

// ── Setup ──────────────────────────────────────────────────────────────────

/// Open a pool on the SQLite file at `path`, creating the file if needed.
pub async fn connect(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal),
        )
        .await
}

/// Create the `links` table if it is not there yet. Safe to run on every start.
pub async fn initialize(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE TABLE IF NOT EXISTS links (name TEXT NOT NULL PRIMARY KEY, url TEXT NOT NULL)")
        .execute(pool)
        .await?;

    Ok(())
}

// ── Links ──────────────────────────────────────────────────────────────────

/// Insert a new link. An existing `name` is a primary-key violation and the
/// stored row is left as it was.
pub async fn add_link(pool: &SqlitePool, name: &str, url: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO links (name, url) VALUES (?1, ?2)")
        .bind(name)
        .bind(url)
        .execute(pool)
        .await?;

    Ok(())
}

/// Fetch the target URL for `name`, or `None` if no such link exists.
pub async fn get_link(pool: &SqlitePool, name: &str) -> Result<Option<String>, sqlx::Error> {
    tracing::debug!("Fetching link {}", name);

    let link: Option<Link> = sqlx::query_as("SELECT name, url FROM links WHERE name = ?1")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    match link {
        Some(link) => {
            tracing::debug!("Resolved link {} -> {}", link.name, link.url);
            Ok(Some(link.url))
        }
        None => {
            tracing::debug!("Link {} not found", name);
            Ok(None)
        }
    }
}
