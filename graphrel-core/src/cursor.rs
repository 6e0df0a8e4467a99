use crate::{
    AsValue, CursorMetadata, Error, ErrorContext, Result, Row, RowLabeled, RowNames,
    SessionResult, UsageError, Value,
    stream::{self, BoxStream, StreamExt, TryStreamExt},
};
use std::fmt::{self, Display, Formatter};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

/// Rows produced by a backend, each one aligned with the labels of its result.
pub type RowStream = BoxStream<'static, Result<Row>>;

/// Position of a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    BeforeFirst,
    First,
    Middle,
    AfterLast,
    Closed,
}

impl Display for CursorState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CursorState::BeforeFirst => "before the first row",
            CursorState::First => "on the first row",
            CursorState::Middle => "past the first row",
            CursorState::AfterLast => "after the last row",
            CursorState::Closed => "closed",
        })
    }
}

/// Reference to a column of the current row: a 1-based position or a label.
pub trait AsColumn {
    /// The 0-based offset of the column inside `labels`.
    fn column_offset(&self, labels: &[String]) -> Result<usize>;
}

impl AsColumn for usize {
    fn column_offset(&self, labels: &[String]) -> Result<usize> {
        if *self == 0 || *self > labels.len() {
            return Err(Error::new(UsageError::InvalidColumnReference(format!(
                "Column index {} is out of bounds, the result has {} columns (indices start from 1)",
                self,
                labels.len()
            ))));
        }
        Ok(self - 1)
    }
}

impl AsColumn for &str {
    fn column_offset(&self, labels: &[String]) -> Result<usize> {
        labels.iter().position(|v| v == self).ok_or_else(|| {
            Error::new(UsageError::InvalidColumnReference(format!(
                "Column `{}` does not exist in the result",
                self
            )))
        })
    }
}

impl AsColumn for String {
    fn column_offset(&self, labels: &[String]) -> Result<usize> {
        self.as_str().column_offset(labels)
    }
}

impl AsColumn for &String {
    fn column_offset(&self, labels: &[String]) -> Result<usize> {
        self.as_str().column_offset(labels)
    }
}

/// Forward only cursor over the rows returned by a query.
///
/// It starts before the first row, [`Cursor::advance`] moves it one row forward
/// until the result is exhausted. Columns of the current row are read by
/// 1-based position or by label, duplicated labels resolve to the first
/// column. Closing is absorbing: every later read fails.
///
/// ```rust,ignore
/// let mut cursor = connection.run(query).await?;
/// while cursor.advance().await? {
///     let name: String = cursor.get("name")?;
///     let age: Option<i64> = cursor.get(2)?;
/// }
/// cursor.close();
/// ```
pub struct Cursor {
    labels: RowNames,
    stream: RowStream,
    current: Option<Row>,
    peeked: Option<Row>,
    state: CursorState,
    row_number: u64,
    exhausted: bool,
    last_read_null: Option<bool>,
    kinds: Vec<&'static str>,
}

impl Cursor {
    pub fn new(labels: RowNames, stream: RowStream) -> Self {
        Self {
            labels,
            stream,
            current: None,
            peeked: None,
            state: CursorState::BeforeFirst,
            row_number: 0,
            exhausted: false,
            last_read_null: None,
            kinds: Vec::new(),
        }
    }

    fn not_positioned(&self) -> Error {
        Error::new(UsageError::CursorNotPositioned(self.state))
    }

    async fn fetch(&mut self) -> Result<Option<Row>> {
        if self.exhausted {
            return Ok(None);
        }
        let Some(row) = self
            .stream
            .try_next()
            .await
            .context("While fetching the next row")?
        else {
            self.exhausted = true;
            return Ok(None);
        };
        if row.len() != self.labels.len() {
            return Err(Error::msg(format!(
                "The backend returned a row with {} values for a result with {} columns",
                row.len(),
                self.labels.len()
            )));
        }
        if self.kinds.is_empty() {
            self.kinds = row.iter().map(Value::kind_name).collect();
        }
        Ok(Some(row))
    }

    /// Move to the next row. Returns `false` once the rows are exhausted,
    /// and keeps returning `false` afterwards.
    pub async fn advance(&mut self) -> Result<bool> {
        if self.state == CursorState::Closed {
            return Err(self.not_positioned());
        }
        let next = match self.peeked.take() {
            Some(row) => Some(row),
            None => self.fetch().await?,
        };
        self.last_read_null = None;
        match next {
            Some(row) => {
                self.current = Some(row);
                self.row_number += 1;
                self.state = if self.state == CursorState::BeforeFirst {
                    CursorState::First
                } else {
                    CursorState::Middle
                };
                Ok(true)
            }
            None => {
                self.current = None;
                self.state = CursorState::AfterLast;
                Ok(false)
            }
        }
    }

    /// Value of `column` in the current row.
    pub fn value<C: AsColumn>(&mut self, column: C) -> Result<&Value> {
        let Some(row) = &self.current else {
            return Err(Error::new(UsageError::CursorNotPositioned(self.state)));
        };
        let offset = column.column_offset(&self.labels)?;
        let Some(value) = row.get(offset) else {
            return Err(Error::new(UsageError::InvalidColumnReference(format!(
                "Column {} is missing from the current row",
                offset + 1
            ))));
        };
        self.last_read_null = Some(value.is_null());
        Ok(value)
    }

    /// Value of `column` in the current row, converted to `T`.
    pub fn get<T: AsValue, C: AsColumn>(&mut self, column: C) -> Result<T> {
        let value = self.value(column)?.clone();
        T::try_from_value(value)
    }

    /// Date of `column` as seen at `offset`. Zoned datetimes are moved to
    /// `offset`, local dates and datetimes are returned as stored.
    pub fn date_at<C: AsColumn>(&mut self, column: C, offset: UtcOffset) -> Result<Option<Date>> {
        Ok(match self.value(column)? {
            Value::Date(v) => *v,
            Value::Timestamp(v) => v.map(|v| v.date()),
            Value::TimestampWithTimezone(Some(v)) => Some(shift(v, offset)?.date()),
            v if v.is_null() => None,
            v => return Err(temporal_error(v, "DATE")),
        })
    }

    /// Time of `column` as seen at `offset`. Zoned times are moved to `offset`,
    /// local times are returned as stored.
    pub fn time_at<C: AsColumn>(&mut self, column: C, offset: UtcOffset) -> Result<Option<Time>> {
        Ok(match self.value(column)? {
            Value::Time(v) => *v,
            Value::TimeWithTimezone(v) => v.map(|v| v.to_offset(offset).time),
            v if v.is_null() => None,
            v => return Err(temporal_error(v, "LOCAL TIME")),
        })
    }

    /// Datetime of `column` as seen at `offset`. Zoned datetimes are moved to
    /// `offset`, local datetimes are returned as stored.
    pub fn datetime_at<C: AsColumn>(
        &mut self,
        column: C,
        offset: UtcOffset,
    ) -> Result<Option<PrimitiveDateTime>> {
        Ok(match self.value(column)? {
            Value::Timestamp(v) => *v,
            Value::TimestampWithTimezone(Some(v)) => {
                let v = shift(v, offset)?;
                Some(PrimitiveDateTime::new(v.date(), v.time()))
            }
            v if v.is_null() => None,
            v => return Err(temporal_error(v, "LOCAL DATETIME")),
        })
    }

    /// The current row with its labels.
    pub fn row(&self) -> Result<RowLabeled> {
        let Some(row) = &self.current else {
            return Err(self.not_positioned());
        };
        Ok(RowLabeled::new(self.labels.clone(), row.clone()))
    }

    /// 1-based position of the first column labelled `name`.
    pub fn find_column(&self, name: &str) -> Result<usize> {
        name.column_offset(&self.labels).map(|i| i + 1)
    }

    /// Whether the last value read on the current row was null.
    pub fn was_null(&self) -> Result<bool> {
        self.last_read_null
            .ok_or_else(|| Error::new(UsageError::NoColumnRead))
    }

    pub fn is_before_first(&self) -> bool {
        self.state == CursorState::BeforeFirst
    }

    pub fn is_first(&self) -> bool {
        self.state == CursorState::First
    }

    pub fn is_after_last(&self) -> bool {
        self.state == CursorState::AfterLast
    }

    pub fn is_closed(&self) -> bool {
        self.state == CursorState::Closed
    }

    /// Whether the cursor is on the last row. Reads one row ahead, the row is
    /// kept for the next [`Cursor::advance`].
    pub async fn is_last(&mut self) -> Result<bool> {
        if self.current.is_none() {
            return Ok(false);
        }
        if self.peeked.is_some() {
            return Ok(false);
        }
        match self.fetch().await? {
            Some(row) => {
                self.peeked = Some(row);
                Ok(false)
            }
            None => Ok(true),
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Number of rows moved onto so far, the first row is 1.
    pub fn row_number(&self) -> u64 {
        self.row_number
    }

    pub fn labels(&self) -> &RowNames {
        &self.labels
    }

    pub fn column_count(&self) -> usize {
        self.labels.len()
    }

    pub fn metadata(&self) -> CursorMetadata {
        CursorMetadata::new(self.labels.clone(), self.kinds.clone())
    }

    /// Drop the remaining rows. Calling it again does nothing.
    pub fn close(&mut self) {
        if self.state == CursorState::Closed {
            return;
        }
        log::debug!(
            "Closing the cursor after {} rows ({})",
            self.row_number,
            self.state
        );
        self.stream = stream::empty().boxed();
        self.current = None;
        self.peeked = None;
        self.last_read_null = None;
        self.state = CursorState::Closed;
    }
}

fn shift(value: &OffsetDateTime, offset: UtcOffset) -> Result<OffsetDateTime> {
    value.checked_to_offset(offset).ok_or_else(|| {
        Error::msg(format!(
            "Datetime {} cannot be moved to offset {}",
            value, offset
        ))
    })
}

fn temporal_error(value: &Value, requested: &'static str) -> Error {
    Error::new(UsageError::TypeCoercion {
        stored: value.kind_name(),
        requested,
    })
}

impl From<SessionResult> for Cursor {
    fn from(value: SessionResult) -> Self {
        Cursor::new(value.labels, value.rows)
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("labels", &self.labels)
            .field("state", &self.state)
            .field("row_number", &self.row_number)
            .finish_non_exhaustive()
    }
}
