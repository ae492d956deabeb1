//! Data Transfer Objects for API responses.
//!
//! All DTOs use Serde for JSON serialization. Absent values are omitted from
//! the output rather than emitted as empty strings.

pub mod health;
pub mod lookup;
