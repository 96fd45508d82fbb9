use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    Extension, Form, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{EnrichedMovie, SessionView},
    services::themes,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct StoryForm {
    #[serde(default)]
    pub story: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStoryRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct StoryRequest {
    pub story: String,
}

#[derive(Debug, Serialize)]
pub struct ThemesResponse {
    pub themes: Vec<String>,
}

// Pages

/// Story input, submit control and movie grid
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.render_index().await?))
}

/// Form submission from the index page
pub async fn submit_form(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Form(form): Form<StoryForm>,
) -> Redirect {
    if let Err(e) = state.set_text(&form.story).await {
        tracing::warn!(request_id = %request_id, error = %e, "Story rejected");
        state.set_notice(e.to_string()).await;
        return Redirect::to("/");
    }

    match state.submit().await {
        Ok(view) => tracing::info!(
            request_id = %request_id,
            movies = view.movies.len(),
            "Submission finished"
        ),
        Err(e) => tracing::info!(request_id = %request_id, error = %e, "Submission refused"),
    }

    Redirect::to("/")
}

/// Static product description
pub async fn about(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(super::pages::render_about(&state.templates)?))
}

// JSON API

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Current session snapshot
pub async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.view().await)
}

/// Replace the stored story; over-long text is rejected and the old value kept
pub async fn update_story(
    State(state): State<AppState>,
    Json(request): Json<UpdateStoryRequest>,
) -> AppResult<Json<SessionView>> {
    Ok(Json(state.set_text(&request.text).await?))
}

/// Submit the stored story
pub async fn submit_session(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<SessionView>> {
    tracing::info!(request_id = %request_id, "Processing submission");

    let view = state.submit().await?;

    tracing::info!(
        request_id = %request_id,
        movies = view.movies.len(),
        "Submission finished"
    );

    Ok(Json(view))
}

/// Stateless pipeline run
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<StoryRequest>,
) -> AppResult<Json<Vec<EnrichedMovie>>> {
    tracing::info!(
        request_id = %request_id,
        story_chars = request.story.chars().count(),
        "Processing recommendation request"
    );

    let movies = state.pipeline.run(&request.story).await?;
    Ok(Json(movies))
}

/// Main themes of a story
pub async fn extract_themes(
    State(state): State<AppState>,
    Json(request): Json<StoryRequest>,
) -> AppResult<Json<ThemesResponse>> {
    if request.story.trim().is_empty() {
        return Err(AppError::EmptyStory);
    }

    let themes = themes::extract_themes(state.pipeline.completion(), &request.story).await;
    Ok(Json(ThemesResponse { themes }))
}
