use crate::CursorState;
use thiserror::Error;

/// Misuse of a prepared query or a cursor.
///
/// These errors are local and never worth retrying. They are returned inside
/// [`crate::Error`], use `error.downcast_ref::<UsageError>()` to inspect them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error(
        "Parameter index {index} is out of bounds for a query with {count} parameters (indices start from 1)"
    )]
    PlaceholderCountMismatch { index: u64, count: u64 },
    #[error("Parameter {index} has no bound value")]
    UnboundParameter { index: u64 },
    #[error("{0}")]
    InvalidColumnReference(String),
    #[error("The cursor is not positioned on a row, it is {0}")]
    CursorNotPositioned(CursorState),
    #[error("Cannot convert a value of type {stored} to {requested}")]
    TypeCoercion {
        stored: &'static str,
        requested: &'static str,
    },
    #[error("No column has been read on the current row")]
    NoColumnRead,
}
