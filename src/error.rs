use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Everything a request handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Open/query/insert failure in the link store, including duplicate
    /// names. `action` is what the client sees, e.g. "error adding link".
    #[error("{action}: {source}")]
    Storage {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The OS random source could not produce an anti-forgery token.
    #[error("error generating csrf token: {0}")]
    TokenGeneration(#[from] rand::Error),

    /// Client sent something unusable. The message is returned as the body.
    #[error("{0}")]
    Validation(&'static str),
}

impl AppError {
    /// Adapter for `map_err` on link store calls.
    pub fn storage(action: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::Storage { action, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Storage { action, ref source } => {
                tracing::error!("{}: {:?}", action, source);
                (StatusCode::INTERNAL_SERVER_ERROR, action).into_response()
            }
            AppError::TokenGeneration(ref e) => {
                tracing::error!("Error generating CSRF token: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::Validation(msg) => {
                tracing::info!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}
