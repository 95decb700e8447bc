//! Movie model and DTOs.

use movies_core::types::{DbId, Timestamp};
use movies_core::validation::{self, ValidationError, Violations};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Maximum title length, in characters.
pub const MAX_TITLE_CHARS: usize = 80;
/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 300;
/// Maximum URL length for `cover` and `source`.
pub const MAX_URL_CHARS: usize = 500;
/// Maximum length of the content rating label (e.g. `PG-13`).
pub const MAX_CONTENT_RATING_CHARS: usize = 5;
/// Maximum length of a single tag.
pub const MAX_TAG_CHARS: usize = 50;
/// Release-year bounds. 1888 is the year of the earliest surviving film.
pub const MIN_YEAR: i64 = 1888;
pub const MAX_YEAR: i64 = 2100;
/// Duration bounds in minutes.
pub const MIN_DURATION: i64 = 1;
pub const MAX_DURATION: i64 = 300;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year: Option<i64>,
    pub cover: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i64>,
    pub content_rating: Option<String>,
    pub source: Option<String>,
    pub tags: Json<Vec<String>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request payload for creating or fully replacing a movie.
///
/// PUT uses the same shape as POST: the row is overwritten with exactly
/// what is supplied, and omitted optional fields become NULL.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieInput {
    pub title: String,
    pub year: Option<i64>,
    pub cover: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i64>,
    pub content_rating: Option<String>,
    pub source: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MovieInput {
    /// Check every field rule and report all violations together.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Violations::new();

        validation::require_non_blank(&mut v, "title", &self.title);
        validation::max_chars(&mut v, "title", &self.title, MAX_TITLE_CHARS);

        if let Some(year) = self.year {
            validation::in_range(&mut v, "year", year, MIN_YEAR, MAX_YEAR);
        }
        if let Some(cover) = &self.cover {
            validation::http_url(&mut v, "cover", cover);
            validation::max_chars(&mut v, "cover", cover, MAX_URL_CHARS);
        }
        if let Some(description) = &self.description {
            validation::max_chars(&mut v, "description", description, MAX_DESCRIPTION_CHARS);
        }
        if let Some(duration) = self.duration {
            validation::in_range(&mut v, "duration", duration, MIN_DURATION, MAX_DURATION);
        }
        if let Some(content_rating) = &self.content_rating {
            validation::max_chars(
                &mut v,
                "content_rating",
                content_rating,
                MAX_CONTENT_RATING_CHARS,
            );
        }
        if let Some(source) = &self.source {
            validation::http_url(&mut v, "source", source);
            validation::max_chars(&mut v, "source", source, MAX_URL_CHARS);
        }
        for tag in &self.tags {
            validation::require_non_blank(&mut v, "tags", tag);
            validation::max_chars(&mut v, "tags", tag, MAX_TAG_CHARS);
        }

        v.into_result()
    }

    /// Tags as stored: trimmed, lowercased, duplicates removed,
    /// original order preserved.
    pub fn normalized_tags(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for tag in &self.tags {
            let normalized = tag.trim().to_lowercase();
            if !normalized.is_empty() && !seen.contains(&normalized) {
                seen.push(normalized);
            }
        }
        seen
    }
}

/// Query parameters for `GET /api/movies`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieListParams {
    /// Comma-separated tag filter, e.g. `?tags=action,drama`.
    /// A movie matches when its tag set intersects the requested set.
    pub tags: Option<String>,
}

impl MovieListParams {
    /// Parse the raw query value into normalized tags.
    pub fn tag_filter(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> MovieInput {
        MovieInput {
            title: "Dune".to_string(),
            year: Some(2021),
            cover: Some("https://example.com/dune.jpg".to_string()),
            description: Some("Spice and sand.".to_string()),
            duration: Some(155),
            content_rating: Some("PG-13".to_string()),
            source: Some("https://example.com/dune.mp4".to_string()),
            tags: vec!["SciFi".to_string(), "Drama".to_string()],
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn blank_title_and_bad_year_report_both_violations() {
        let mut input = valid_input();
        input.title = "  ".to_string();
        input.year = Some(1500);

        let err = input.validate().unwrap_err();
        let fields: Vec<_> = err.violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["title", "year"]);
    }

    #[test]
    fn non_http_urls_are_rejected() {
        let mut input = valid_input();
        input.cover = Some("file:///etc/passwd".to_string());
        let err = input.validate().unwrap_err();
        assert_eq!(err.violations[0].field, "cover");
        assert_eq!(err.violations[0].rule, "invalid_url");
    }

    #[test]
    fn tags_are_normalized_and_deduplicated() {
        let mut input = valid_input();
        input.tags = vec![
            " SciFi ".to_string(),
            "scifi".to_string(),
            "Drama".to_string(),
            "".to_string(),
        ];
        assert_eq!(input.normalized_tags(), vec!["scifi", "drama"]);
    }

    #[test]
    fn tag_filter_splits_and_normalizes() {
        let params = MovieListParams {
            tags: Some(" Action , drama,,".to_string()),
        };
        assert_eq!(params.tag_filter(), vec!["action", "drama"]);

        assert!(MovieListParams::default().tag_filter().is_empty());
    }
}
