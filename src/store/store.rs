//! In-memory movie store
//!
//! The store is a single ordered sequence of records. Insertion order is
//! preserved, lookups are linear scans, and identifiers are assigned here
//! and nowhere else. State lives only in memory; a restart reloads the
//! seed dataset.
//!
//! Handlers run on a multi-threaded runtime, so the sequence sits behind
//! an `RwLock`. No method holds the lock across an await point.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::movie::{Movie, MovieDraft, MoviePatch};

/// Ordered, mutable, in-memory collection of movie records.
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MovieStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            movies: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store pre-populated with seed records, preserving order.
    pub fn with_records(records: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(records),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Movie>> {
        self.movies.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Movie>> {
        self.movies.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns all records in insertion order, optionally narrowed to those
    /// tagged with a genre. The filter compares case-insensitively, so
    /// `"action"` matches records tagged `"Action"`.
    pub fn list(&self, genre_filter: Option<&str>) -> Vec<Movie> {
        let movies = self.read();
        match genre_filter {
            Some(filter) => movies
                .iter()
                .filter(|m| m.genre.iter().any(|g| g.matches(filter)))
                .cloned()
                .collect(),
            None => movies.clone(),
        }
    }

    /// Finds a record by exact identifier match.
    pub fn get(&self, id: &str) -> StoreResult<Movie> {
        self.read()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Appends a new record built from a validated draft. The identifier
    /// is generated here; clients never supply one.
    pub fn create(&self, draft: MovieDraft) -> Movie {
        let movie = Movie::from_draft(Uuid::new_v4().to_string(), draft);
        self.write().push(movie.clone());
        movie
    }

    /// Merges a patch over the record with the given identifier, in place.
    /// Only supplied fields are overwritten; the identifier never changes.
    pub fn update(&self, id: &str, patch: MoviePatch) -> StoreResult<Movie> {
        let mut movies = self.write();
        let movie = movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        movie.apply(patch);
        Ok(movie.clone())
    }

    /// Removes exactly the record with the given identifier.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut movies = self.write();
        let index = movies
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        movies.remove(index);
        Ok(())
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::movie::Genre;

    fn draft(title: &str, genre: Vec<Genre>) -> MovieDraft {
        MovieDraft {
            title: title.into(),
            year: 2000,
            director: "Someone".into(),
            duration: 120,
            rate: 7.0,
            poster: "http://example.com/p.jpg".into(),
            genre,
        }
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let store = MovieStore::new();
        let a = store.create(draft("A", vec![Genre::Drama]));
        let b = store.create(draft("B", vec![Genre::Drama]));

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_after_create_returns_equal_record() {
        let store = MovieStore::new();
        let created = store.create(draft("A", vec![Genre::Comedy]));

        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = MovieStore::new();
        let result = store.get("nope");
        assert_eq!(result, Err(StoreError::NotFound("nope".into())));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = MovieStore::new();
        store.create(draft("First", vec![Genre::Drama]));
        store.create(draft("Second", vec![Genre::Drama]));
        store.create(draft("Third", vec![Genre::Drama]));

        let titles: Vec<_> = store
            .list(None)
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_list_filters_by_genre_case_insensitively() {
        let store = MovieStore::new();
        store.create(draft("A", vec![Genre::Action]));
        store.create(draft("B", vec![Genre::Drama]));
        store.create(draft("C", vec![Genre::Action, Genre::Comedy]));

        let action = store.list(Some("action"));
        let titles: Vec<_> = action.into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_list_with_unmatched_filter_is_empty() {
        let store = MovieStore::new();
        store.create(draft("A", vec![Genre::Action]));

        assert!(store.list(Some("horror")).is_empty());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = MovieStore::new();
        let a = store.create(draft("A", vec![Genre::Drama]));
        let b = store.create(draft("B", vec![Genre::Drama]));

        store.delete(&a.id).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.get(&a.id).is_err());
        assert!(store.get(&b.id).is_ok());
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let store = MovieStore::new();
        assert!(matches!(
            store.delete("missing"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_merges_and_preserves_id() {
        let store = MovieStore::new();
        let created = store.create(draft("A", vec![Genre::Drama]));

        let updated = store
            .update(
                &created.id,
                MoviePatch {
                    year: Some(2011),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.year, 2011);
        assert_eq!(updated.title, created.title);

        // The stored record was replaced in place, not copied elsewhere.
        assert_eq!(store.get(&created.id).unwrap(), updated);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let store = MovieStore::new();
        let result = store.update("missing", MoviePatch::default());
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_seeded_store_keeps_seed_order() {
        let a = Movie::from_draft("id-a".into(), draft("A", vec![Genre::Drama]));
        let b = Movie::from_draft("id-b".into(), draft("B", vec![Genre::Drama]));
        let store = MovieStore::with_records(vec![a.clone(), b.clone()]);

        assert_eq!(store.list(None), vec![a, b]);
    }
}
