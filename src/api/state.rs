use std::sync::Arc;

use handlebars::Handlebars;
use tokio::sync::RwLock;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Session, SessionView},
    services::{
        providers::{GeminiProvider, OmdbProvider},
        submit, PipelineOptions, RecommendationPipeline,
    },
};

use super::pages;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub pipeline: RecommendationPipeline,
    pub templates: Arc<Handlebars<'static>>,
}

impl AppState {
    /// Wires the Gemini and OMDb providers from configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let completion = GeminiProvider::new(
            config.gemini_api_key.clone(),
            config.gemini_api_url.clone(),
            config.gemini_model.clone(),
        );
        let lookup = OmdbProvider::new(config.omdb_api_key.clone(), config.omdb_api_url.clone());
        let pipeline = RecommendationPipeline::new(
            Arc::new(completion),
            Arc::new(lookup),
            PipelineOptions::from(config),
        );

        Self::with_pipeline(pipeline, config.story_max_chars)
    }

    /// Creates state around an already-built pipeline with an empty session
    pub fn with_pipeline(pipeline: RecommendationPipeline, story_max_chars: usize) -> AppResult<Self> {
        Ok(Self {
            session: Arc::new(RwLock::new(Session::new(story_max_chars))),
            pipeline,
            templates: Arc::new(pages::templates()?),
        })
    }

    pub async fn view(&self) -> SessionView {
        self.session.read().await.view()
    }

    /// Applies a keystroke to the stored story
    pub async fn set_text(&self, candidate: &str) -> AppResult<SessionView> {
        let mut session = self.session.write().await;
        let (next, accepted) = std::mem::take(&mut *session).set_text(candidate);
        *session = next;

        if !accepted {
            return Err(AppError::StoryTooLong {
                len: candidate.chars().count(),
                max: session.story.max_chars(),
            });
        }

        Ok(session.view())
    }

    /// Runs one submission against the shared session.
    ///
    /// The lock is released while upstream calls are in flight; in the
    /// meantime the stored session only shows the waiting flag. The run is
    /// spawned so the outcome lands in the stored session even if the caller
    /// goes away before it finishes.
    pub async fn submit(&self) -> AppResult<SessionView> {
        let snapshot = {
            let mut session = self.session.write().await;
            if session.waiting {
                return Err(AppError::SubmissionInProgress);
            }
            let snapshot = session.clone();
            session.waiting = true;
            snapshot
        };

        let shared = Arc::clone(&self.session);
        let pipeline = self.pipeline.clone();
        let run = tokio::spawn(async move {
            let (next, result) = match submit(snapshot, &pipeline).await {
                Ok(next) => (next, Ok(())),
                Err((next, err)) => (next, Err(err)),
            };

            let mut session = shared.write().await;
            *session = next;
            let view = session.view();
            result.map(|_| view)
        });

        match run.await {
            Ok(result) => result,
            Err(e) => {
                self.session.write().await.waiting = false;
                Err(AppError::Internal(format!("Submission task failed: {}", e)))
            }
        }
    }

    /// Shows `notice` on the next index render
    pub async fn set_notice(&self, notice: String) {
        self.session.write().await.notice = Some(notice);
    }

    /// Renders the index page, consuming any pending notice
    pub async fn render_index(&self) -> AppResult<String> {
        let view = {
            let mut session = self.session.write().await;
            let view = session.view();
            session.take_notice();
            view
        };

        pages::render_index(&self.templates, &view)
    }
}
