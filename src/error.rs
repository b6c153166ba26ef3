//! Shared error classification for transport-layer status mapping.

/// Broad classification of a service failure.
///
/// Transport adapters map these onto their own status vocabulary (for an
/// HTTP layer: bad request, conflict, not found, internal error). The
/// specific message stays on the concrete error; the kind only decides the
/// outcome class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed, missing, or out-of-range input.
    Validation,
    /// A uniqueness constraint was violated.
    Conflict,
    /// A referenced entity does not exist.
    NotFound,
    /// Unclassified storage-layer failure.
    Storage,
}
