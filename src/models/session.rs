use serde::Serialize;

use crate::error::{AppError, AppResult};

use super::{EnrichedMovie, StoryText};

/// UI session state: the story being written, the last result set and the
/// waiting flag that gates the submit control.
///
/// Transitions take the session by value and hand back the next one, so the
/// submission flow can be exercised without any rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub story: StoryText,
    pub movies: Vec<EnrichedMovie>,
    pub waiting: bool,
    pub notice: Option<String>,
}

/// Serializable snapshot of a session
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionView {
    pub story: String,
    pub story_max_chars: usize,
    pub movies: Vec<EnrichedMovie>,
    pub waiting: bool,
    pub notice: Option<String>,
}

impl Session {
    pub fn new(story_max_chars: usize) -> Self {
        Self {
            story: StoryText::new(story_max_chars),
            ..Self::default()
        }
    }

    /// Applies a keystroke; returns whether the candidate was accepted
    pub fn set_text(mut self, candidate: &str) -> (Self, bool) {
        let accepted = self.story.set_text(candidate);
        (self, accepted)
    }

    /// Idle -> Waiting.
    ///
    /// On success returns the session with `waiting` set and the story text
    /// to submit. A blank story sets the notice and leaves everything else
    /// untouched.
    pub fn begin_submission(mut self) -> Result<(Self, String), (Self, AppError)> {
        if self.waiting {
            return Err((self, AppError::SubmissionInProgress));
        }

        if self.story.is_blank() {
            let err = AppError::EmptyStory;
            self.notice = Some(err.to_string());
            return Err((self, err));
        }

        self.notice = None;
        self.waiting = true;
        let story = self.story.as_str().to_string();
        Ok((self, story))
    }

    /// Waiting -> Idle.
    ///
    /// Success replaces the collection wholesale and clears the story.
    /// Failure keeps both the collection and the story.
    pub fn finish_submission(mut self, outcome: AppResult<Vec<EnrichedMovie>>) -> Self {
        self.waiting = false;

        match outcome {
            Ok(movies) => {
                self.movies = movies;
                self.story.clear();
            }
            Err(e) => {
                tracing::error!(error = %e, "Recommendation pipeline failed");
            }
        }

        self
    }

    /// Clears the notice once it has been shown
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            story: self.story.as_str().to_string(),
            story_max_chars: self.story.max_chars(),
            movies: self.movies.clone(),
            waiting: self.waiting,
            notice: self.notice.clone(),
        }
    }
}
