use crate::services::{prompt, providers::CompletionProvider};

/// Asks the model for the main themes of a story.
///
/// Failures are logged and yield an empty list.
pub async fn extract_themes(provider: &dyn CompletionProvider, story: &str) -> Vec<String> {
    match provider.generate(&prompt::themes_prompt(story)).await {
        Ok(text) => {
            tracing::debug!(provider = provider.name(), response = %text, "Theme analysis response");
            split_themes(&text)
        }
        Err(e) => {
            tracing::error!(provider = provider.name(), error = %e, "Theme extraction failed");
            Vec::new()
        }
    }
}

fn split_themes(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|theme| !theme.is_empty())
        .map(str::to_string)
        .collect()
}
