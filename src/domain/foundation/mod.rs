//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the ticketing domain.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::AccountId;
