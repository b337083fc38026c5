//! Startup seed loading
//!
//! The catalog is seeded once at boot from a JSON array of complete
//! records (identifiers included). The file is trusted but type-checked:
//! a malformed entry fails the boot rather than being skipped.

use std::fs;
use std::path::Path;

use super::errors::SeedError;
use super::movie::Movie;

/// Reads and deserializes the seed file.
pub fn load_seed(path: &Path) -> Result<Vec<Movie>, SeedError> {
    let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| SeedError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn write_seed(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_seed() {
        let file = write_seed(
            r#"[
                {
                    "id": "c8a6ab04-1f93-4d29-873b-0a02dcc40de1",
                    "title": "The Shawshank Redemption",
                    "year": 1994,
                    "director": "Frank Darabont",
                    "duration": 142,
                    "rate": 9.3,
                    "poster": "http://img.example.com/shawshank.jpg",
                    "genre": ["Drama"]
                }
            ]"#,
        );

        let movies = load_seed(file.path()).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "The Shawshank Redemption");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_seed(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(SeedError::Io { .. })));
    }

    #[test]
    fn test_unknown_genre_is_malformed() {
        let file = write_seed(
            r#"[
                {
                    "id": "x",
                    "title": "T",
                    "year": 2000,
                    "director": "D",
                    "duration": 100,
                    "rate": 5.0,
                    "poster": "http://example.com/p.jpg",
                    "genre": ["Sci-Fi"]
                }
            ]"#,
        );

        let result = load_seed(file.path());
        assert!(matches!(result, Err(SeedError::Malformed { .. })));
    }

    #[test]
    fn test_non_array_is_malformed() {
        let file = write_seed(r#"{"not": "an array"}"#);
        let result = load_seed(file.path());
        assert!(matches!(result, Err(SeedError::Malformed { .. })));
    }

    #[test]
    fn test_bundled_seed_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/movies.json");
        let movies = load_seed(&path).unwrap();
        assert!(!movies.is_empty());
    }
}
