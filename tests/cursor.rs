#[cfg(test)]
mod tests {
    use graphrel::{
        Cursor, CursorState, Error, Row, RowNames, SessionResult, UsageError, Value, ZonedTime,
        stream::{self, StreamExt},
    };
    use time::macros::{date, datetime, offset, time};

    fn labels(names: &[&str]) -> RowNames {
        names.iter().map(|v| v.to_string()).collect()
    }

    fn int_rows(count: i64) -> Vec<Row> {
        (1..=count)
            .map(|i| Row::from([Value::Int64(Some(i)), Value::Varchar(Some(i.to_string()))]))
            .collect()
    }

    #[tokio::test]
    async fn row_number_grows() {
        let mut cursor: Cursor =
            SessionResult::from_rows(labels(&["id", "text"]), int_rows(5)).into();
        let mut last = cursor.row_number();
        while cursor.advance().await.unwrap() {
            assert_eq!(cursor.row_number(), last + 1);
            last = cursor.row_number();
            assert_eq!(cursor.get::<i64, _>(1).unwrap() as u64, last);
            assert_eq!(cursor.get::<String, _>("text").unwrap(), last.to_string());
        }
        assert_eq!(last, 5);
        assert_eq!(cursor.row_number(), 5);
        assert_eq!(cursor.state(), CursorState::AfterLast);
    }

    #[tokio::test]
    async fn single_row() {
        let mut cursor: Cursor =
            SessionResult::from_rows(labels(&["id", "text"]), int_rows(1)).into();
        assert!(cursor.advance().await.unwrap());
        assert!(cursor.is_first());
        assert!(cursor.is_last().await.unwrap());
        assert!(!cursor.advance().await.unwrap());
        assert!(cursor.is_after_last());
    }

    #[tokio::test]
    async fn exhausted_is_not_polled_again() {
        // Unfold panics when polled after returning its last item
        let rows = stream::unfold(1i64, |i| async move {
            (i <= 2).then(|| {
                let row = Row::from([Value::Int64(Some(i)), Value::Varchar(None)]);
                (Ok::<_, Error>(row), i + 1)
            })
        });
        let mut cursor = Cursor::new(labels(&["id", "text"]), rows.boxed());
        assert!(cursor.advance().await.unwrap());
        assert!(cursor.advance().await.unwrap());
        assert!(cursor.is_last().await.unwrap());
        assert!(!cursor.advance().await.unwrap());
        assert!(!cursor.advance().await.unwrap());
        assert!(!cursor.is_last().await.unwrap());
        assert_eq!(cursor.row_number(), 2);

        let mut cursor: Cursor = SessionResult::empty().into();
        assert!(!cursor.advance().await.unwrap());
        assert!(!cursor.advance().await.unwrap());
        assert_eq!(cursor.column_count(), 0);
    }

    #[tokio::test]
    async fn stream_errors() {
        let rows = stream::iter(int_rows(1).into_iter().map(Ok))
            .chain(stream::once(async { Err(Error::msg("Connection reset")) }));
        let mut cursor = Cursor::new(labels(&["id", "text"]), rows.boxed());
        assert!(cursor.advance().await.unwrap());
        let error = cursor.advance().await.unwrap_err();
        assert!(format!("{:#}", error).contains("Connection reset"));
        assert_eq!(cursor.state(), CursorState::First);
        assert_eq!(cursor.get::<i64, _>("id").unwrap(), 1);
    }

    #[tokio::test]
    async fn close() {
        let mut cursor: Cursor =
            SessionResult::from_rows(labels(&["id", "text"]), int_rows(3)).into();
        assert!(cursor.advance().await.unwrap());
        assert!(!cursor.is_last().await.unwrap());
        cursor.close();
        cursor.close();
        assert!(cursor.is_closed());
        assert!(!cursor.is_last().await.unwrap());
        let error = cursor.value("id").unwrap_err();
        assert_eq!(
            error.downcast_ref::<UsageError>(),
            Some(&UsageError::CursorNotPositioned(CursorState::Closed))
        );
        assert_eq!(
            error.to_string(),
            "The cursor is not positioned on a row, it is closed"
        );
        assert!(cursor.row().is_err());
        assert_eq!(cursor.labels().len(), 2);
    }

    #[tokio::test]
    async fn column_kinds() {
        let rows = [
            Row::from([Value::Null, Value::Int64(Some(1)), Value::Varchar(None)]),
            Row::from([Value::Boolean(Some(true)), Value::Null, Value::Varchar(None)]),
        ];
        let mut cursor: Cursor =
            SessionResult::from_rows(labels(&["flag", "n", "text"]), rows).into();
        let metadata = cursor.metadata();
        assert_eq!(metadata.column_count(), 3);
        assert_eq!(metadata.column_kind(1), None);

        assert!(cursor.advance().await.unwrap());
        assert!(cursor.advance().await.unwrap());
        let metadata = cursor.metadata();
        assert_eq!(metadata.column_kind(0), None);
        assert_eq!(metadata.column_kind(1), Some("NULL"));
        assert_eq!(metadata.column_kind(2), Some("INT64"));
        assert_eq!(metadata.column_kind(3), Some("STRING"));
        assert_eq!(metadata.column_kind(4), None);

        let mut cursor: Cursor = SessionResult::from_rows(labels(&["n"]), []).into();
        assert!(!cursor.advance().await.unwrap());
        assert!(cursor.metadata().kinds.is_empty());
    }

    #[tokio::test]
    async fn temporal_at_offset() {
        let rows = [Row::from([
            Value::Date(Some(date!(2024-03-01))),
            Value::Time(Some(time!(10:20:30))),
            Value::TimeWithTimezone(Some(ZonedTime::new(time!(01:00:00), offset!(+8)))),
            Value::Timestamp(Some(datetime!(2024-03-01 10:20:30))),
            Value::TimestampWithTimezone(Some(datetime!(2024-03-01 03:00:00 +8))),
            Value::TimestampWithTimezone(None),
            Value::Varchar(Some("2024-03-01".into())),
        ])];
        let mut cursor: Cursor = SessionResult::from_rows(
            labels(&["d", "t", "zt", "dt", "zdt", "missing", "text"]),
            rows,
        )
        .into();
        assert!(cursor.advance().await.unwrap());
        let west = offset!(-5);

        assert_eq!(cursor.date_at("d", west).unwrap(), Some(date!(2024-03-01)));
        assert_eq!(cursor.date_at("dt", west).unwrap(), Some(date!(2024-03-01)));
        assert_eq!(cursor.date_at("zdt", west).unwrap(), Some(date!(2024-02-29)));
        assert_eq!(
            cursor.date_at("zdt", offset!(+8)).unwrap(),
            Some(date!(2024-03-01))
        );

        assert_eq!(cursor.time_at("t", west).unwrap(), Some(time!(10:20:30)));
        assert_eq!(cursor.time_at("zt", west).unwrap(), Some(time!(12:00:00)));
        assert_eq!(cursor.time_at("zt", offset!(UTC)).unwrap(), Some(time!(17:00:00)));

        assert_eq!(
            cursor.datetime_at("dt", west).unwrap(),
            Some(datetime!(2024-03-01 10:20:30))
        );
        assert_eq!(
            cursor.datetime_at("zdt", west).unwrap(),
            Some(datetime!(2024-02-29 14:00:00))
        );

        assert_eq!(cursor.datetime_at("missing", west).unwrap(), None);
        assert!(cursor.was_null().unwrap());

        let error = cursor.datetime_at("text", west).unwrap_err();
        assert_eq!(
            error.downcast_ref::<UsageError>(),
            Some(&UsageError::TypeCoercion {
                stored: "STRING",
                requested: "LOCAL DATETIME"
            })
        );
        assert!(cursor.time_at("d", west).is_err());
        assert!(cursor.date_at("t", west).is_err());
    }
}
