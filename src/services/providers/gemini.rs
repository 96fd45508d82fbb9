/// Google Gemini completion provider
///
/// Calls `POST {api_url}/v1beta/models/{model}:generateContent` and reads the
/// first candidate's first text part.
use crate::{
    error::{AppError, AppResult},
    models::{GeminiRequest, GeminiResponse},
    services::providers::CompletionProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct GeminiProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url, self.model
        )
    }
}

#[async_trait::async_trait]
impl CompletionProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&GeminiRequest::from_prompt(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Completion(format!(
                "Gemini API returned status {}: {}",
                status, body
            )));
        }

        let body: GeminiResponse = response.json().await?;
        let text = body.first_text().ok_or_else(|| {
            AppError::Completion("Gemini response has no candidate text".to_string())
        })?;

        tracing::debug!(
            model = %self.model,
            chars = text.len(),
            provider = "gemini",
            "Completion received"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
