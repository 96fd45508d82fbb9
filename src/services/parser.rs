use std::sync::OnceLock;

use regex::Regex;

use crate::models::ParsedMovieRef;

/// "<anything> (<any four characters>)". The year group is deliberately not
/// restricted to digits.
const MOVIE_LINE_PATTERN: &str = r"(.*) \((....)\)";

fn movie_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(MOVIE_LINE_PATTERN).expect("movie line pattern is valid"))
}

/// Parses one line; `None` when the line does not match
pub fn parse_line(line: &str) -> Option<ParsedMovieRef> {
    let captures = movie_line_regex().captures(line)?;
    let title = captures.get(1)?.as_str().trim();
    let year = captures.get(2)?.as_str();
    Some(ParsedMovieRef::new(title, year))
}

/// Extracts `(title, year)` pairs from a completion, in line order.
/// Lines that don't match are skipped.
pub fn parse_lines(text: &str) -> Vec<ParsedMovieRef> {
    let refs: Vec<ParsedMovieRef> = text.trim().lines().filter_map(parse_line).collect();

    tracing::debug!(parsed = refs.len(), "Parsed movie lines");

    refs
}
