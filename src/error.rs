//! Error type shared by every search entry point.

use std::fmt;

/// The error type for matrix construction, configuration and search runs.
///
/// Every runner either returns a complete result or one of these; there is
/// no partial result on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The cost matrix is not square, has fewer than 2 rows, or holds an
    /// entry that is negative or not finite.
    InvalidMatrix {
        /// Human-readable description of the violation.
        reason: String,
    },
    /// An operation needing a non-empty collection got an empty one
    /// (e.g. selection on an empty population).
    InvalidState(&'static str),
    /// Fitness was requested for a tour whose total cost is zero.
    ZeroCostTour,
    /// A configuration parameter is out of range.
    InvalidConfig(String),
}

impl SearchError {
    pub(crate) fn invalid_matrix(reason: impl Into<String>) -> Self {
        Self::InvalidMatrix {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMatrix { reason } => write!(f, "invalid cost matrix: {reason}"),
            Self::InvalidState(what) => write!(f, "invalid state: {what}"),
            Self::ZeroCostTour => write!(f, "fitness is undefined for a zero-cost tour"),
            Self::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for SearchError {}
