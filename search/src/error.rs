//! Typed search errors.
//!
//! `SearchError` represents pre-flight usage errors only. Not finding a path
//! is a normal outcome, expressed via
//! [`crate::search::TerminationReason::Exhausted`], never as an error.

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins; no node has
/// been generated or scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A policy budget was configured with a value the engine cannot honor.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
