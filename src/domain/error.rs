//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the code tree contract.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Permanently outside the tree's contract, not a missing feature.
    #[error("operation not supported by code tree: {operation}")]
    UnsupportedOperation { operation: &'static str },

    #[error("no symbol for code: {code:?}")]
    LookupMiss { code: String },

    #[error("invalid code {code:?}: {reason}")]
    InvalidCode { code: String, reason: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_lookup_miss_when_displayed_then_quotes_code() {
        let err = DomainError::LookupMiss {
            code: "......".into(),
        };
        assert_eq!(err.to_string(), "no symbol for code: \"......\"");
    }
}
