use std::sync::Arc;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{EnrichedMovie, Session},
    services::{
        enrichment::{self, MissPolicy},
        parser, prompt,
        providers::{CompletionProvider, MovieLookup},
    },
};

/// Knobs that distinguish the pipeline variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Ask the model a second time to normalize its answer to "Title (Year)" lines
    pub refine: bool,
    pub miss_policy: MissPolicy,
    /// Lookups in flight at once; 1 is strictly sequential
    pub enrichment_concurrency: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            refine: true,
            miss_policy: MissPolicy::Include,
            enrichment_concurrency: 1,
        }
    }
}

impl From<&Config> for PipelineOptions {
    fn from(config: &Config) -> Self {
        Self {
            refine: config.refine_recommendations,
            miss_policy: MissPolicy::from_include_unmatched(config.include_unmatched),
            enrichment_concurrency: config.enrichment_concurrency.max(1),
        }
    }
}

/// Story in, enriched movies out: completion, optional refinement, parsing,
/// then one lookup per parsed movie.
#[derive(Clone)]
pub struct RecommendationPipeline {
    completion: Arc<dyn CompletionProvider>,
    lookup: Arc<dyn MovieLookup>,
    options: PipelineOptions,
}

impl RecommendationPipeline {
    pub fn new(
        completion: Arc<dyn CompletionProvider>,
        lookup: Arc<dyn MovieLookup>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            completion,
            lookup,
            options,
        }
    }

    pub fn completion(&self) -> &dyn CompletionProvider {
        self.completion.as_ref()
    }

    /// Returns the model's answer as "Title (Year)" lines.
    ///
    /// A blank story is rejected before any network call.
    pub async fn request_recommendations(&self, story: &str) -> AppResult<String> {
        if story.trim().is_empty() {
            return Err(AppError::EmptyStory);
        }

        let initial = self
            .completion
            .generate(&prompt::recommendation_prompt(story))
            .await?;

        tracing::debug!(
            provider = self.completion.name(),
            response = %initial,
            "Initial recommendation response"
        );

        if !self.options.refine {
            return Ok(initial);
        }

        let refined = self
            .completion
            .generate(&prompt::refinement_prompt(&initial))
            .await?;

        tracing::debug!(
            provider = self.completion.name(),
            response = %refined,
            "Refined recommendation response"
        );

        Ok(refined)
    }

    /// Runs the whole pipeline for one story
    pub async fn run(&self, story: &str) -> AppResult<Vec<EnrichedMovie>> {
        let text = self.request_recommendations(story).await?;
        let parsed = parser::parse_lines(&text);

        let movies = enrichment::enrich_all(
            self.lookup.as_ref(),
            &parsed,
            self.options.miss_policy,
            self.options.enrichment_concurrency,
        )
        .await;

        tracing::info!(
            parsed = parsed.len(),
            movies = movies.len(),
            "Recommendations ready"
        );

        Ok(movies)
    }
}

/// Drives one submission through `Idle -> Waiting -> {Success, Failure} -> Idle`.
///
/// Refusals (blank story, submission already running) come back as the error
/// alongside the unchanged session. Pipeline failures are not errors here:
/// they leave the previous results in place.
pub async fn submit(
    session: Session,
    pipeline: &RecommendationPipeline,
) -> Result<Session, (Session, AppError)> {
    let (session, story) = session.begin_submission()?;
    let outcome = pipeline.run(&story).await;
    Ok(session.finish_submission(outcome))
}
