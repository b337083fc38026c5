//! Movie schema validation
//!
//! Pure functions checking candidate JSON payloads against the movie
//! schema. `validate_movie` requires every field; `validate_partial_movie`
//! checks only the fields the payload supplies. Both collect all
//! violations into a structured field-to-rule mapping instead of failing
//! on the first one.

mod errors;
mod validator;

pub use errors::{FieldViolation, ValidationError, ValidationResult};
pub use validator::{validate_movie, validate_partial_movie};
