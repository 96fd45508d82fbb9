use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Please write a story before getting recommendations.")]
    EmptyStory,

    #[error("Story is {len} characters, the limit is {max}")]
    StoryTooLong { len: usize, max: usize },

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("HTTP client error: {0}")]
    HttpClient(reqwest::Error),

    #[error("Lookup miss: {0}")]
    LookupMiss(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyStory => StatusCode::BAD_REQUEST,
            AppError::StoryTooLong { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::SubmissionInProgress => StatusCode::CONFLICT,
            AppError::LookupMiss(_) => StatusCode::NOT_FOUND,
            AppError::Completion(_) | AppError::HttpClient(_) | AppError::ExternalApi(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Render(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Request URLs carry API keys in their query strings
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpClient(err.without_url())
    }
}

impl From<handlebars::RenderError> for AppError {
    fn from(err: handlebars::RenderError) -> Self {
        AppError::Render(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
