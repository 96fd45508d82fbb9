/// OMDb movie lookup provider
///
/// One `GET /?t=<title>&y=<year>&apikey=<key>` per movie. OMDb answers HTTP 200
/// for misses too and signals them with `"Response": "False"`.
use crate::{
    error::{AppError, AppResult},
    models::{MovieDetails, OmdbResponse},
    services::providers::MovieLookup,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn convert_api_response(
        &self,
        title: &str,
        year: &str,
        body: OmdbResponse,
    ) -> AppResult<MovieDetails> {
        if !body.is_found() {
            let reason = body.error.unwrap_or_else(|| "unknown error".to_string());
            return Err(AppError::LookupMiss(format!(
                "{} ({}): {}",
                title, year, reason
            )));
        }

        Ok(MovieDetails {
            title: body.title.unwrap_or_else(|| title.to_string()),
            year: body.year.unwrap_or_else(|| year.to_string()),
            poster: body.poster,
            imdb_rating: body.imdb_rating,
        })
    }
}

#[async_trait::async_trait]
impl MovieLookup for OmdbProvider {
    async fn lookup(&self, title: &str, year: &str) -> AppResult<MovieDetails> {
        let url = format!("{}/", self.api_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("t", title), ("y", year), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let body: OmdbResponse = response.json().await?;
        let details = self.convert_api_response(title, year, body)?;

        tracing::debug!(
            title = %details.title,
            year = %details.year,
            provider = "omdb",
            "Lookup matched"
        );

        Ok(details)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
