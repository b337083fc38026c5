//! Movie record types
//!
//! A `Movie` is one catalog entry. Its identifier is assigned by the
//! store at creation time and is never accepted from a client.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of genres a movie may be tagged with.
///
/// Serde round-trips the exact names (`"Action"`, `"Comedy"`, ...);
/// query-side filtering is case-insensitive via [`Genre::matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
}

/// All genres, in declaration order. Used for validation messages.
pub const ALL_GENRES: [Genre; 6] = [
    Genre::Action,
    Genre::Adventure,
    Genre::Comedy,
    Genre::Drama,
    Genre::Fantasy,
    Genre::Horror,
];

impl Genre {
    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
        }
    }

    /// Looks up a genre by its exact canonical name.
    pub fn from_name(name: &str) -> Option<Genre> {
        ALL_GENRES.iter().copied().find(|g| g.as_str() == name)
    }

    /// Case-insensitive match against a filter string.
    pub fn matches(&self, filter: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(filter)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single movie record as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned opaque identifier (UUID v4 string).
    pub id: String,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Runtime in minutes.
    pub duration: u32,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

impl Movie {
    /// Combines a generated identifier with a validated draft.
    pub fn from_draft(id: String, draft: MovieDraft) -> Self {
        Self {
            id,
            title: draft.title,
            year: draft.year,
            director: draft.director,
            duration: draft.duration,
            rate: draft.rate,
            poster: draft.poster,
            genre: draft.genre,
        }
    }

    /// Overwrites the fields a patch supplies. The identifier is immutable.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }
}

/// A validated create payload. Carries every field except the identifier,
/// which only the store may assign.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// A validated partial-update payload. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub rate: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    /// True when the patch supplies no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.duration.is_none()
            && self.rate.is_none()
            && self.poster.is_none()
            && self.genre.is_none()
    }
}
