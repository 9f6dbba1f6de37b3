//! Error types.

use thiserror::Error;

/// Reasons a [`Motion`](crate::Motion) cannot be turned into a lookup table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    /// A component of the named field is NaN or infinite.
    #[error("motion field `{field}` has a non-finite component")]
    NonFinite { field: &'static str },
    /// The origin pose rotation is not a unit quaternion.
    #[error("origin rotation is not normalized (length {length})")]
    UnnormalizedOrigin { length: f64 },
}
