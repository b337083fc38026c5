//! Movie payload validation
//!
//! Validation rules:
//! - title: non-empty string
//! - year: integer, 1900..=2024
//! - director: string
//! - duration: positive integer (minutes)
//! - rate: number, 0..=10
//! - poster: string holding a syntactically valid URL
//! - genre: non-empty array of known genre names
//!
//! Checks run over raw JSON and collect every violation before failing,
//! so a payload that breaks several rules reports all of them at once.
//! Undeclared fields are ignored. Identifiers are never accepted from
//! the payload; the store assigns them.

use serde_json::Value;
use url::Url;

use crate::store::{Genre, MovieDraft, MoviePatch, ALL_GENRES};

use super::errors::{FieldViolation, ValidationError, ValidationResult};

const YEAR_MIN: i64 = 1900;
const YEAR_MAX: i64 = 2024;
const RATE_MIN: f64 = 0.0;
const RATE_MAX: f64 = 10.0;

/// Validates a full create payload. Every field is required.
pub fn validate_movie(candidate: &Value) -> ValidationResult<MovieDraft> {
    let Some(obj) = candidate.as_object() else {
        return Err(not_an_object());
    };

    let mut violations = Vec::new();

    let title = require(obj, "title", &mut violations, check_title);
    let year = require(obj, "year", &mut violations, check_year);
    let director = require(obj, "director", &mut violations, check_director);
    let duration = require(obj, "duration", &mut violations, check_duration);
    let rate = require(obj, "rate", &mut violations, check_rate);
    let poster = require(obj, "poster", &mut violations, check_poster);
    let genre = require(obj, "genre", &mut violations, check_genre);

    match (title, year, director, duration, rate, poster, genre) {
        (Some(title), Some(year), Some(director), Some(duration), Some(rate), Some(poster), Some(genre))
            if violations.is_empty() =>
        {
            Ok(MovieDraft {
                title,
                year,
                director,
                duration,
                rate,
                poster,
                genre,
            })
        }
        _ => Err(ValidationError::new(violations)),
    }
}

/// Validates a partial update payload. Every field is optional, but each
/// supplied field must satisfy the same rule as on create.
pub fn validate_partial_movie(candidate: &Value) -> ValidationResult<MoviePatch> {
    let Some(obj) = candidate.as_object() else {
        return Err(not_an_object());
    };

    let mut violations = Vec::new();

    let patch = MoviePatch {
        title: supplied(obj, "title", &mut violations, check_title),
        year: supplied(obj, "year", &mut violations, check_year),
        director: supplied(obj, "director", &mut violations, check_director),
        duration: supplied(obj, "duration", &mut violations, check_duration),
        rate: supplied(obj, "rate", &mut violations, check_rate),
        poster: supplied(obj, "poster", &mut violations, check_poster),
        genre: supplied(obj, "genre", &mut violations, check_genre),
    };

    if violations.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationError::new(violations))
    }
}

fn not_an_object() -> ValidationError {
    ValidationError::new(vec![FieldViolation::wrong_type("$root", "a JSON object")])
}

type FieldCheck<T> = fn(&Value, &mut Vec<FieldViolation>) -> Option<T>;

/// Runs a check on a required field, recording a violation when absent.
fn require<T>(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
    check: FieldCheck<T>,
) -> Option<T> {
    match obj.get(field) {
        Some(value) => check(value, violations),
        None => {
            violations.push(FieldViolation::required(field));
            None
        }
    }
}

/// Runs a check only when the field is supplied.
fn supplied<T>(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
    check: FieldCheck<T>,
) -> Option<T> {
    obj.get(field).and_then(|value| check(value, violations))
}

fn check_title(value: &Value, violations: &mut Vec<FieldViolation>) -> Option<String> {
    let Some(title) = value.as_str() else {
        violations.push(FieldViolation::wrong_type("title", "a string"));
        return None;
    };
    if title.is_empty() {
        violations.push(FieldViolation::new(
            "title",
            "non_empty",
            "title must not be empty",
        ));
        return None;
    }
    Some(title.to_string())
}

fn check_year(value: &Value, violations: &mut Vec<FieldViolation>) -> Option<i32> {
    let Some(year) = value.as_i64() else {
        violations.push(FieldViolation::wrong_type("year", "an integer"));
        return None;
    };
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        violations.push(FieldViolation::new(
            "year",
            "range",
            format!("year must be between {} and {}", YEAR_MIN, YEAR_MAX),
        ));
        return None;
    }
    Some(year as i32)
}

fn check_director(value: &Value, violations: &mut Vec<FieldViolation>) -> Option<String> {
    match value.as_str() {
        Some(director) => Some(director.to_string()),
        None => {
            violations.push(FieldViolation::wrong_type("director", "a string"));
            None
        }
    }
}

fn check_duration(value: &Value, violations: &mut Vec<FieldViolation>) -> Option<u32> {
    let Some(duration) = value.as_i64() else {
        violations.push(FieldViolation::wrong_type("duration", "an integer"));
        return None;
    };
    match u32::try_from(duration) {
        Ok(duration) if duration > 0 => Some(duration),
        _ => {
            violations.push(FieldViolation::new(
                "duration",
                "positive",
                "duration must be a positive integer",
            ));
            None
        }
    }
}

fn check_rate(value: &Value, violations: &mut Vec<FieldViolation>) -> Option<f64> {
    let Some(rate) = value.as_f64() else {
        violations.push(FieldViolation::wrong_type("rate", "a number"));
        return None;
    };
    if !(RATE_MIN..=RATE_MAX).contains(&rate) {
        violations.push(FieldViolation::new(
            "rate",
            "range",
            format!("rate must be between {} and {}", RATE_MIN, RATE_MAX),
        ));
        return None;
    }
    Some(rate)
}

fn check_poster(value: &Value, violations: &mut Vec<FieldViolation>) -> Option<String> {
    let Some(poster) = value.as_str() else {
        violations.push(FieldViolation::wrong_type("poster", "a string"));
        return None;
    };
    if Url::parse(poster).is_err() {
        violations.push(FieldViolation::new(
            "poster",
            "url",
            "poster must be a valid URL",
        ));
        return None;
    }
    Some(poster.to_string())
}

fn check_genre(value: &Value, violations: &mut Vec<FieldViolation>) -> Option<Vec<Genre>> {
    let Some(entries) = value.as_array() else {
        violations.push(FieldViolation::wrong_type("genre", "an array of genre names"));
        return None;
    };
    if entries.is_empty() {
        violations.push(FieldViolation::new(
            "genre",
            "non_empty",
            "genre must list at least one entry",
        ));
        return None;
    }

    let mut genres = Vec::with_capacity(entries.len());
    let mut all_valid = true;
    for (i, entry) in entries.iter().enumerate() {
        let genre = entry.as_str().and_then(Genre::from_name);
        match genre {
            Some(genre) => genres.push(genre),
            None => {
                violations.push(FieldViolation::new(
                    format!("genre[{}]", i),
                    "enum",
                    format!("genre[{}] must be one of {}", i, genre_names()),
                ));
                all_valid = false;
            }
        }
    }

    all_valid.then_some(genres)
}

fn genre_names() -> String {
    ALL_GENRES
        .iter()
        .map(|g| g.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
