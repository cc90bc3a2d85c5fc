//! Typed path parameter helpers.

use uuid::Uuid;

/// Parses a UUID from a path segment.
///
/// A malformed id is treated the same as an unknown one by the handlers,
/// so this returns `None` rather than a validation error.
pub fn parse_uuid(s: &str) -> Option<Uuid> {
    Uuid::parse_str(s).ok()
}
