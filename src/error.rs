//! Error types for startup, database lookups, and HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::path::PathBuf;

/// Fatal errors raised while loading the process-lifetime resources.
///
/// Any of these aborts startup before the listener binds.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The MMDB file is missing, unreadable, or not a valid MaxMind DB.
    #[error("geo database unavailable at {path}")]
    DatabaseUnavailable {
        path: PathBuf,
        #[source]
        source: maxminddb::MaxMindDbError,
    },

    /// The location metadata file is missing or malformed.
    #[error("location directory unavailable at {path}: {reason}")]
    DirectoryUnavailable { path: PathBuf, reason: String },
}

/// Lookup failure caused by malformed internal database state.
///
/// "Address not found" is never an error; resolvers report it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
#[error("database lookup failed for {address}: {reason}")]
pub struct ResolveError {
    pub address: String,
    pub reason: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors returned to HTTP clients.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message } | AppError::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        tracing::error!("{}", e);
        AppError::internal("Error")
    }
}
