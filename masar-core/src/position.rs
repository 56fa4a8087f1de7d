//! Acquire the user's current position.
//!
//! Positioning hardware is a host concern; the engine only consumes a
//! `(coordinate, address)` pair through this seam and treats failure as
//! a recoverable signal (the UI falls back to manual entry).

use thiserror::Error;

use crate::CurrentPosition;

/// Errors returned by [`PositionProvider::current_position`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// The host has no positioning capability.
    #[error("positioning is not supported on this host")]
    Unsupported,
    /// The user denied access to their position.
    #[error("permission to read the current position was denied")]
    PermissionDenied,
    /// The position could not be determined in time.
    #[error("current position is unavailable")]
    Unavailable,
}

/// Yield the user's current position as a route starting point.
pub trait PositionProvider: Send + Sync {
    /// Return the current position, or why it could not be obtained.
    fn current_position(&self) -> Result<CurrentPosition, PositionError>;
}
