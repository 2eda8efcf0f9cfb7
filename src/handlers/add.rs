use crate::{db, error::AppError, AppState};
use askama::Template;
use axum::{
    extract::{rejection::FormRejection, Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

// ── Template structs ───────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "add.html")]
struct AddLinkTemplate {
    csrf_token: String,
}

// ── Form types ─────────────────────────────────────────────────────────────

/// Fields posted by the add form. Missing fields read as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddLinkForm {
    url: String,
    name: String,
    csrftoken: String,
}

// ── Handlers ───────────────────────────────────────────────────────────────

/// GET /add
pub async fn add_form(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    tracing::info!("Handling request at path /add");

    let csrf_token = state.tokens.issue()?;
    tracing::debug!("{} csrf token(s) outstanding", state.tokens.len());

    Ok(AddLinkTemplate { csrf_token }.into_response())
}

/// POST /add
///
/// The token is spent before the fields are checked, so a submission with
/// empty fields still burns it.
pub async fn add_link(
    State(state): State<Arc<AppState>>,
    form: Result<Form<AddLinkForm>, FormRejection>,
) -> Result<Response, AppError> {
    tracing::info!("Handling request at path /add");

    let Form(form) = form.map_err(|e| {
        tracing::info!("Error parsing form values: {}", e);
        AppError::Validation("unable to parse form values")
    })?;

    if !state.tokens.consume(&form.csrftoken) {
        return Err(AppError::Validation("invalid csrf token"));
    }

    if form.url.is_empty() || form.name.is_empty() {
        return Err(AppError::Validation("must provide both link name and url"));
    }

    tracing::info!("Adding link {} ({})", form.name, form.url);
    db::add_link(&state.db, &form.name, &form.url)
        .await
        .map_err(AppError::storage("error adding link"))?;

    Ok((StatusCode::OK, "added link").into_response())
}

/// Any other method on /add.
pub async fn unsupported_method() -> AppError {
    AppError::Validation("unsupported method")
}
