//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Identifier parsing is the only deterministic domain failure owned by this
/// crate; scheduling and store failures carry their own taxonomies next to
/// the code that raises them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
