/// Default bound on story length, in characters
pub const DEFAULT_STORY_MAX_CHARS: usize = 600;

/// User-provided narrative text, bounded to `max_chars` characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryText {
    text: String,
    max_chars: usize,
}

impl Default for StoryText {
    fn default() -> Self {
        Self::new(DEFAULT_STORY_MAX_CHARS)
    }
}

impl StoryText {
    /// Creates an empty story with the given bound
    pub fn new(max_chars: usize) -> Self {
        Self {
            text: String::new(),
            max_chars,
        }
    }

    /// Replaces the text with `candidate` if it fits the bound.
    ///
    /// Over-long candidates are rejected whole (never truncated) and the
    /// previous value is kept. Returns whether the candidate was accepted.
    pub fn set_text(&mut self, candidate: &str) -> bool {
        let len = candidate.chars().count();
        if len > self.max_chars {
            tracing::warn!(
                len,
                max_chars = self.max_chars,
                "Character limit reached, keeping previous story"
            );
            return false;
        }

        self.text = candidate.to_string();
        true
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// True when the story is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
