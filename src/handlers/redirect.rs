use crate::{db, error::AppError, AppState};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// ANY /*name
///
/// Look up the short name and answer with a permanent (301) redirect to the
/// stored URL. `name` is the whole path after the leading slash, already
/// percent-decoded. A path that does not decode to UTF-8 cannot name a
/// stored link and is a plain 404.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(name) = match name {
        Ok(name) => name,
        Err(e) => {
            tracing::info!("Undecodable link name: {}", e);
            return Ok(not_found().await);
        }
    };
    tracing::info!("Handling request at path /{}", name);

    let url = db::get_link(&state.db, &name)
        .await
        .map_err(AppError::storage("error retrieving link"))?;

    let Some(url) = url else {
        return Ok(not_found().await);
    };

    tracing::info!("Redirecting to {} for link {}", url, name);

    // A stored URL that is not a legal header value turns into a 500.
    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, url)]).into_response())
}

/// Paths that can never name a link, such as `/` itself.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "link not found").into_response()
}
