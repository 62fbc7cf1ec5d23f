use crate::db::errors::DbError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Required query parameter missing or empty
    #[error("{message}")]
    MissingParameters { message: String },

    /// Cloning the remote repository failed
    #[error("Erro ao clonar o repositório: {message}")]
    CloneFailed { message: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Every error category is reported to the caller as HTTP 400.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::MissingParameters { message } => message.clone(),
            Error::CloneFailed { message } => format!("Erro ao clonar o repositório: {message}"),
            Error::Database(_) => "Erro ao acessar o banco de dados".to_string(),
            Error::Other(_) => "Erro interno".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(_) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::CloneFailed { .. } => {
                tracing::warn!("Clone error: {}", self);
            }
            Error::MissingParameters { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
