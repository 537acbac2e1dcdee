//! Error types for item store operations.

use thiserror::Error;

/// Error type for item store operations.
///
/// The store models a single failure mode: the referenced id does not exist
/// (never existed, or was deleted).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(u64),
}

impl ItemError {
    /// Create a not found error
    #[must_use]
    pub fn not_found(id: u64) -> Self {
        ItemError::NotFound(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_contains_id() {
        let err = ItemError::not_found(42);
        assert_eq!(err.to_string(), "Item not found: 42");
    }
}
