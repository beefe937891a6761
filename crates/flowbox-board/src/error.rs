//! Error types for board collections

/// Board errors
///
/// Lookups of unknown ids through the mutating operations are silent no-ops;
/// `UnknownReference` only comes out of the explicit `require_*` accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Caller-supplied id collides with an existing entry
    #[error("duplicate item id: {0}")]
    DuplicateItemId(String),

    /// Referenced item, task or member does not exist
    #[error("unknown reference: {0}")]
    UnknownReference(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_error_display() {
        let err = BoardError::DuplicateItemId("c1".to_string());
        assert_eq!(err.to_string(), "duplicate item id: c1");

        let err = BoardError::UnknownReference("u9".to_string());
        assert!(err.to_string().contains("u9"));
    }
}
