/// Error type for worksheet generation and step explanation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorksheetError {
    /// A request or problem outside the documented input domain.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl WorksheetError {
    /// A hand-built problem whose arithmetic leaves the 64-bit range.
    pub(crate) fn overflow(what: impl std::fmt::Display) -> Self {
        WorksheetError::InvalidConfiguration(format!("{what} overflows a 64-bit integer"))
    }
}
