//! Construction-time errors for the browser bridge.

use thiserror::Error;

/// Why mounting the board on a page failed.
///
/// These only occur while wiring up the DOM; once a board is mounted,
/// event handling is infallible.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    /// The requested element id is not in the document, or the element
    /// is not of the expected kind.
    #[error("element `{0}` not found in document")]
    MissingElement(String),

    /// The canvas refused to hand out a 2d rendering context.
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
}
