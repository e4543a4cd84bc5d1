//! Error types for the word-class clustering library.

use crate::cluster::Axis;
use std::fmt::Debug;
use thiserror::Error;

/// Main error type for clustering operations.
///
/// Every variant signals a logic error in the calling driver rather
/// than a transient fault: none of these conditions is recoverable by
/// retrying the same call.
#[derive(Error, Debug)]
pub enum ClusterError {
    /// Row/column query for an axis key that has never been observed
    #[error("word {key} has never been observed on the {axis} axis")]
    KeyNotFound { axis: Axis, key: String },

    /// Axis selector that is neither "row" nor "column"
    #[error("invalid axis selector `{0}` (expected \"row\" or \"column\")")]
    InvalidAxis(String),

    /// Merge argument that is not a current representative label
    #[error("{0} is not a current class representative")]
    InvalidMergeTarget(String),

    /// Merging a class into itself
    #[error("cannot merge class {0} into itself")]
    SelfMerge(String),
}

impl ClusterError {
    pub(crate) fn key_not_found(axis: Axis, key: &impl Debug) -> Self {
        Self::KeyNotFound {
            axis,
            key: format!("{:?}", key),
        }
    }

    pub(crate) fn invalid_merge_target(label: &impl Debug) -> Self {
        Self::InvalidMergeTarget(format!("{:?}", label))
    }

    pub(crate) fn self_merge(label: &impl Debug) -> Self {
        Self::SelfMerge(format!("{:?}", label))
    }
}

/// Result type alias for clustering operations.
pub type Result<T> = std::result::Result<T, ClusterError>;
