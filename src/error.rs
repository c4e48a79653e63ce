//! Error types for the lobster kernel.

/// Errors raised by the lobster kernel.
///
/// The direction variants are contract violations by the caller: well-typed
/// code that only rotates existing [`Direction`](crate::Direction)s can never
/// hit them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LobsterError {
    /// Ordinal outside `0..=3`.
    #[error("invalid direction ordinal {0} (expected 0..=3)")]
    InvalidDirection(i64),

    /// Name that matches none of `EAST`, `SOUTH`, `WEST`, `NORTH`.
    #[error("unknown direction '{0}'")]
    UnknownDirection(String),

    /// The id counter reached the top of the `u64` range.
    #[error("lobster ids exhausted")]
    IdsExhausted,
}

pub(crate) type Result<T> = std::result::Result<T, LobsterError>;
