use futures::{
    future::{BoxFuture, FutureExt},
    stream::{self, StreamExt},
};

use crate::{
    error::AppResult,
    models::{EnrichedMovie, ParsedMovieRef},
    services::providers::MovieLookup,
};

/// What to do with a movie the lookup could not resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissPolicy {
    /// Keep it with the parsed title/year and placeholder metadata
    #[default]
    Include,
    /// Leave it out of the results
    Drop,
}

impl MissPolicy {
    pub fn from_include_unmatched(include: bool) -> Self {
        if include {
            MissPolicy::Include
        } else {
            MissPolicy::Drop
        }
    }
}

/// Single lookup attempt, no retries
async fn try_enrich(lookup: &dyn MovieLookup, movie: &ParsedMovieRef) -> AppResult<EnrichedMovie> {
    tracing::debug!(
        title = %movie.title,
        year = %movie.year,
        provider = lookup.name(),
        "Fetching movie details"
    );

    let details = lookup.lookup(&movie.title, &movie.year).await?;
    Ok(EnrichedMovie::from(details))
}

/// Enriches one parsed movie, degrading to placeholder metadata on a miss or
/// lookup failure. Never fails.
pub async fn enrich(lookup: &dyn MovieLookup, movie: &ParsedMovieRef) -> EnrichedMovie {
    match try_enrich(lookup, movie).await {
        Ok(enriched) => enriched,
        Err(e) => {
            tracing::warn!(
                title = %movie.title,
                year = %movie.year,
                error = %e,
                "Lookup failed, using placeholder metadata"
            );
            EnrichedMovie::placeholder(movie)
        }
    }
}

async fn enrich_with_policy(
    lookup: &dyn MovieLookup,
    movie: &ParsedMovieRef,
    policy: MissPolicy,
) -> Option<EnrichedMovie> {
    match policy {
        MissPolicy::Include => Some(enrich(lookup, movie).await),
        MissPolicy::Drop => match try_enrich(lookup, movie).await {
            Ok(enriched) => Some(enriched),
            Err(e) => {
                tracing::warn!(
                    title = %movie.title,
                    year = %movie.year,
                    error = %e,
                    "Lookup failed, dropping movie"
                );
                None
            }
        },
    }
}

/// Enriches every movie, keeping the parsed order.
///
/// With `concurrency == 1` each lookup completes before the next starts.
/// Larger values keep up to that many lookups in flight; results still come
/// back in source order.
pub async fn enrich_all<'a>(
    lookup: &'a dyn MovieLookup,
    movies: &'a [ParsedMovieRef],
    policy: MissPolicy,
    concurrency: usize,
) -> Vec<EnrichedMovie> {
    // Boxed up front so the stream holds no closure generic over the borrow
    let lookups: Vec<BoxFuture<'a, Option<EnrichedMovie>>> = movies
        .iter()
        .map(|movie| enrich_with_policy(lookup, movie, policy).boxed())
        .collect();

    let outcomes: Vec<Option<EnrichedMovie>> = stream::iter(lookups)
        .buffered(concurrency.max(1))
        .collect()
        .await;

    outcomes.into_iter().flatten().collect()
}
