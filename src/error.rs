//! Error types for filter evaluation.

use thiserror::Error;

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors that can occur while selecting a filter character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Selector named neither of the two known characters.
    #[error("invalid filter type '{name}': choose 'Moog' or 'Roland'")]
    InvalidFilterType {
        /// The rejected selector, verbatim.
        name: String,
    },
}
