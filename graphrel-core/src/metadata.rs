use crate::RowNames;

/// Shape of the parameters of one prepared query.
///
/// Built on request from the query it describes, it is never shared between
/// queries.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ParameterMetadata {
    /// Number of placeholders found in the query text.
    pub count: usize,
    /// Kind of the value bound at each index, `None` when still unbound.
    /// The first element describes parameter 1.
    pub kinds: Vec<Option<&'static str>>,
}

impl ParameterMetadata {
    pub fn parameter_count(&self) -> usize {
        self.count
    }

    /// Kind name of the value bound at the 1-based `index`.
    pub fn parameter_kind(&self, index: usize) -> Option<&'static str> {
        index
            .checked_sub(1)
            .and_then(|i| self.kinds.get(i))
            .copied()
            .flatten()
    }

    pub fn is_bound(&self, index: usize) -> bool {
        self.parameter_kind(index).is_some()
    }
}

/// Columns returned by a query.
///
/// Column kinds are taken from the first row fetched, they are unknown until
/// the cursor reads it (or when the result has no rows).
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CursorMetadata {
    pub labels: RowNames,
    pub kinds: Vec<&'static str>,
}

impl CursorMetadata {
    pub fn new(labels: RowNames, kinds: Vec<&'static str>) -> Self {
        Self { labels, kinds }
    }

    pub fn column_count(&self) -> usize {
        self.labels.len()
    }

    /// Name of the 1-based `column`.
    pub fn column_name(&self, column: usize) -> Option<&str> {
        column
            .checked_sub(1)
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
    }

    /// Kind name of the 1-based `column` in the first row, `NULL` when that
    /// value was an untyped null.
    pub fn column_kind(&self, column: usize) -> Option<&'static str> {
        column
            .checked_sub(1)
            .and_then(|i| self.kinds.get(i))
            .copied()
    }
}
