//! Store error types
//!
//! Structured errors for [`UserStore`](super::UserStore) operations. The
//! bundled in-memory store never fails in practice, but the trait is
//! fallible so a database-backed implementation has somewhere to put
//! connection and query failures.

use std::fmt;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Operation being performed when the store error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// Listing every record
    FindAll,
    /// Finding a single record by id
    FindById,
    /// Creating a new record
    Create,
    /// Saving an existing record
    Save,
    /// Deleting a record by id
    Delete,
    /// Deleting every record
    DeleteAll,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FindAll => write!(f, "find_all"),
            Self::FindById => write!(f, "find_by_id"),
            Self::Create => write!(f, "create"),
            Self::Save => write!(f, "save"),
            Self::Delete => write!(f, "delete"),
            Self::DeleteAll => write!(f, "delete_all"),
        }
    }
}

/// Category of store error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreErrorKind {
    /// Record was not found
    NotFound,
    /// Backend unavailable (connection failure, timeout)
    Unavailable,
    /// Other unclassified error
    Other,
}

impl fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Unavailable => write!(f, "unavailable"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured store error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// The operation being performed when the error occurred
    pub operation: StoreOperation,
    /// The category of error
    pub kind: StoreErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl StoreError {
    /// Create a new store error
    pub fn new(operation: StoreOperation, kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
        }
    }

    /// Create a "not found" error for the given user id
    pub fn not_found(operation: StoreOperation, id: u64) -> Self {
        Self::new(operation, StoreErrorKind::NotFound, format!("user {} not found", id))
    }

    /// Create an "unavailable" error
    pub fn unavailable(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self::new(operation, StoreErrorKind::Unavailable, message)
    }

    /// Create an unclassified error
    pub fn other(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self::new(operation, StoreErrorKind::Other, message)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Store {} error during {}: {}",
            self.kind, self.operation, self.message
        )
    }
}

impl std::error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_constructor() {
        let error = StoreError::not_found(StoreOperation::FindById, 7);
        assert_eq!(error.kind, StoreErrorKind::NotFound);
        assert_eq!(error.message, "user 7 not found");
    }

    #[test]
    fn test_display_includes_operation_and_kind() {
        let error = StoreError::unavailable(StoreOperation::Save, "connection refused");
        let rendered = error.to_string();
        assert!(rendered.contains("unavailable"));
        assert!(rendered.contains("save"));
        assert!(rendered.contains("connection refused"));
    }
}
