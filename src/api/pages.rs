//! Server-rendered HTML for the two user-facing routes. Templates are
//! Handlebars, which escapes interpolated values; movie titles come from a
//! language model and are treated as untrusted.

use handlebars::Handlebars;
use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::{EnrichedMovie, SessionView},
};

const INDEX_TEMPLATE: &str = "index";
const ABOUT_TEMPLATE: &str = "about";

/// One movie card on the index page
#[derive(Debug, Serialize)]
struct MovieCard<'a> {
    title: &'a str,
    year: &'a str,
    poster: Option<&'a str>,
    search_url: String,
    rating: &'a str,
}

impl<'a> From<&'a EnrichedMovie> for MovieCard<'a> {
    fn from(movie: &'a EnrichedMovie) -> Self {
        Self {
            title: &movie.title,
            year: &movie.year,
            poster: movie.displayable_poster(),
            search_url: movie.search_url(),
            rating: &movie.rating,
        }
    }
}

#[derive(Debug, Serialize)]
struct IndexPage<'a> {
    story: &'a str,
    story_max_chars: usize,
    waiting: bool,
    notice: Option<&'a str>,
    movies: Vec<MovieCard<'a>>,
}

/// Builds the template registry
pub fn templates() -> AppResult<Handlebars<'static>> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);

    let register = |registry: &mut Handlebars<'static>, name: &str, source: &str| {
        registry
            .register_template_string(name, source)
            .map_err(|e| AppError::Render(format!("template {}: {}", name, e)))
    };

    register(&mut registry, "styles", include_str!("../../templates/styles.css"))?;
    register(
        &mut registry,
        "layout_header",
        include_str!("../../templates/layout_header.hbs"),
    )?;
    register(&mut registry, INDEX_TEMPLATE, include_str!("../../templates/index.hbs"))?;
    register(&mut registry, ABOUT_TEMPLATE, include_str!("../../templates/about.hbs"))?;

    Ok(registry)
}

pub fn render_index(registry: &Handlebars<'_>, view: &SessionView) -> AppResult<String> {
    let page = IndexPage {
        story: &view.story,
        story_max_chars: view.story_max_chars,
        waiting: view.waiting,
        notice: view.notice.as_deref(),
        movies: view.movies.iter().map(MovieCard::from).collect(),
    };

    Ok(registry.render(INDEX_TEMPLATE, &page)?)
}

pub fn render_about(registry: &Handlebars<'_>) -> AppResult<String> {
    Ok(registry.render(ABOUT_TEMPLATE, &serde_json::json!({}))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(movies: Vec<EnrichedMovie>, waiting: bool, notice: Option<&str>) -> SessionView {
        SessionView {
            story: String::new(),
            story_max_chars: 600,
            movies,
            waiting,
            notice: notice.map(str::to_string),
        }
    }

    fn arrival() -> EnrichedMovie {
        EnrichedMovie {
            title: "Arrival".to_string(),
            year: "2016".to_string(),
            poster_url: Some("http://img/arrival.jpg".to_string()),
            rating: "7.9".to_string(),
        }
    }

    #[test]
    fn test_empty_state_message() {
        let registry = templates().unwrap();
        let html = render_index(&registry, &view(vec![], false, None)).unwrap();

        assert!(html.contains("Write a story and click 'Get Recommendations' to see movies here!"));
        assert!(html.contains("Get Recommendations</button>"));
        assert!(html.contains("maxlength=\"600\""));
    }

    #[test]
    fn test_movie_card() {
        let registry = templates().unwrap();
        let html = render_index(&registry, &view(vec![arrival()], false, None)).unwrap();

        assert!(html.contains("src=\"http://img/arrival.jpg\""));
        assert!(html.contains("Arrival (2016)</a>"));
        assert!(html.contains("IMDb Rating: 7.9"));
        assert!(html.contains("https://www.google.com/search?q=Arrival%20movie"));
        assert!(!html.contains("no-recommendations-message"));
    }

    #[test]
    fn test_missing_poster_renders_placeholder() {
        let registry = templates().unwrap();
        let mut movie = arrival();
        movie.poster_url = None;
        let html = render_index(&registry, &view(vec![movie], false, None)).unwrap();

        assert!(html.contains("movie-poster-missing"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_waiting_disables_submit() {
        let registry = templates().unwrap();
        let html = render_index(&registry, &view(vec![], true, None)).unwrap();

        assert!(html.contains("disabled>Waiting...</button>"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let registry = templates().unwrap();
        let mut movie = arrival();
        movie.title = "<script>alert(1)</script>".to_string();
        let html = render_index(&registry, &view(vec![movie], false, None)).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_notice_is_shown() {
        let registry = templates().unwrap();
        let html = render_index(
            &registry,
            &view(vec![], false, Some("Please write a story before getting recommendations.")),
        )
        .unwrap();

        assert!(html.contains("role=\"alert\">Please write a story before getting recommendations.</p>"));
    }

    #[test]
    fn test_about_page() {
        let registry = templates().unwrap();
        let html = render_about(&registry).unwrap();

        assert!(html.contains("About SubCine"));
        assert!(html.contains("href=\"/\" class=\"back-button\""));
    }
}
