use serde::{Deserialize, Serialize};

/// Rating shown when the lookup has nothing to offer
pub const RATING_UNAVAILABLE: &str = "N/A";

/// A `(title, year)` pair extracted from one line of model output.
///
/// The year is whatever four characters sat inside the parentheses; it is
/// not checked to be numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMovieRef {
    pub title: String,
    pub year: String,
}

impl ParsedMovieRef {
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
        }
    }
}

/// Canonical metadata returned by a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetails {
    pub title: String,
    pub year: String,
    pub poster: Option<String>,
    pub imdb_rating: Option<String>,
}

/// The unit rendered to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedMovie {
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
    pub rating: String,
}

impl EnrichedMovie {
    /// Parsed title and year with placeholder metadata
    pub fn placeholder(movie: &ParsedMovieRef) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year.clone(),
            poster_url: None,
            rating: RATING_UNAVAILABLE.to_string(),
        }
    }

    /// Poster URL usable in an `<img>`; OMDb reports a missing poster as "N/A"
    pub fn displayable_poster(&self) -> Option<&str> {
        self.poster_url
            .as_deref()
            .filter(|url| !url.is_empty() && *url != RATING_UNAVAILABLE)
    }

    /// Web search link for the card title
    pub fn search_url(&self) -> String {
        format!(
            "https://www.google.com/search?q={}%20movie",
            urlencoding::encode(&self.title)
        )
    }
}

impl From<MovieDetails> for EnrichedMovie {
    fn from(details: MovieDetails) -> Self {
        Self {
            title: details.title,
            year: details.year,
            poster_url: details.poster,
            rating: details
                .imdb_rating
                .unwrap_or_else(|| RATING_UNAVAILABLE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_keeps_parsed_fields() {
        let parsed = ParsedMovieRef::new("Arrival", "2016");
        let movie = EnrichedMovie::placeholder(&parsed);

        assert_eq!(movie.title, "Arrival");
        assert_eq!(movie.year, "2016");
        assert_eq!(movie.poster_url, None);
        assert_eq!(movie.rating, "N/A");
    }

    #[test]
    fn test_from_details_without_rating() {
        let movie = EnrichedMovie::from(MovieDetails {
            title: "Arrival".to_string(),
            year: "2016".to_string(),
            poster: Some("http://img/arrival.jpg".to_string()),
            imdb_rating: None,
        });

        assert_eq!(movie.rating, "N/A");
        assert_eq!(movie.displayable_poster(), Some("http://img/arrival.jpg"));
    }

    #[test]
    fn test_na_poster_is_not_displayable() {
        let movie = EnrichedMovie {
            title: "Obscure".to_string(),
            year: "1971".to_string(),
            poster_url: Some("N/A".to_string()),
            rating: "6.1".to_string(),
        };
        assert_eq!(movie.displayable_poster(), None);
    }

    #[test]
    fn test_search_url_encodes_title() {
        let movie = EnrichedMovie::placeholder(&ParsedMovieRef::new("Eternal Sunshine & Co", "2004"));
        assert_eq!(
            movie.search_url(),
            "https://www.google.com/search?q=Eternal%20Sunshine%20%26%20Co%20movie"
        );
    }
}
