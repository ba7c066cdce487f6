use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use study_guide::StudyGuideError;
use thiserror::Error;

/// Message returned when the request carries no question.
pub const MISSING_QUESTION: &str = "No se envió ninguna pregunta";

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- IO / network / server ---
    #[error("failed to bind listener on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("{}", MISSING_QUESTION)]
    MissingQuestion,

    #[error("{0}")]
    BadRequest(String),

    /// The body could not be extracted as JSON; keeps the extractor's status.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// The model provider could not be reached or answered with garbage.
    #[error("el servicio de generación no respondió: {0}")]
    Upstream(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::MissingQuestion | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected { status, .. } => *status,

            // 5xx
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Bind { .. } | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::Rejected {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl From<StudyGuideError> for AppError {
    fn from(err: StudyGuideError) -> Self {
        AppError::Upstream(err.to_string())
    }
}
