use crate::{ConnectOptions, Result, Row, RowNames, RowStream, stream::{self, StreamExt}};
use std::{fmt, future::Future};

/// Response of the backend to one statement.
pub struct SessionResult {
    /// Column names, in order, duplicates allowed.
    pub labels: RowNames,
    pub rows: RowStream,
}

impl SessionResult {
    pub fn new(labels: RowNames, rows: RowStream) -> Self {
        Self { labels, rows }
    }

    /// A result with no columns and no rows, as returned by statements like `USE`.
    pub fn empty() -> Self {
        Self::new(RowNames::from([]), stream::empty().boxed())
    }

    /// A result backed by rows already in memory.
    pub fn from_rows(labels: RowNames, rows: impl IntoIterator<Item = Row>) -> Self {
        let rows: Vec<_> = rows.into_iter().map(Ok).collect();
        Self::new(labels, stream::iter(rows).boxed())
    }
}

impl fmt::Debug for SessionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionResult")
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

/// Transport to a graph backend: authentication, wire protocol and statement execution.
///
/// A connection owns exactly one session and calls it from a single task.
pub trait Session: Send + Sized {
    fn open(options: &ConnectOptions) -> impl Future<Output = Result<Self>> + Send;

    fn execute(&mut self, gql: &str) -> impl Future<Output = Result<SessionResult>> + Send;

    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;
}
