use crate::{silent_logs, usage_error};
use graphrel::{CursorState, Executor, UsageError, Value};

pub async fn cursor_protocol<E: Executor>(executor: &mut E) {
    let mut cursor = executor
        .run("MATCH (v:player) RETURN v.name AS name, v.age AS age ORDER BY age LIMIT 2".into())
        .await
        .expect("Failed to run the query");
    assert_eq!(cursor.column_count(), 2);
    let metadata = cursor.metadata();
    assert_eq!(metadata.column_count(), 2);
    assert_eq!(metadata.column_name(1), Some("name"));
    assert_eq!(metadata.column_name(2), Some("age"));
    assert_eq!(metadata.column_name(3), None);
    assert_eq!(metadata.column_kind(1), None);
    assert_eq!(cursor.find_column("age").unwrap(), 2);

    // Before the first row
    assert!(cursor.is_before_first());
    assert!(!cursor.is_first());
    assert_eq!(cursor.row_number(), 0);
    assert!(!cursor.is_last().await.unwrap());
    let error = cursor.value(1).expect_err("There is no row yet");
    assert_eq!(
        *usage_error(&error),
        UsageError::CursorNotPositioned(CursorState::BeforeFirst)
    );
    let error = cursor.was_null().expect_err("No column was read");
    assert_eq!(*usage_error(&error), UsageError::NoColumnRead);

    // First
    assert!(cursor.advance().await.expect("Failed to advance"));
    assert!(cursor.is_first());
    assert!(!cursor.is_before_first());
    assert_eq!(cursor.state(), CursorState::First);
    assert_eq!(cursor.row_number(), 1);
    let metadata = cursor.metadata();
    assert_eq!(metadata.column_kind(1), Some("STRING"));
    assert_eq!(metadata.column_kind(2), Some("INT64"));
    assert_eq!(cursor.get::<String, _>("name").unwrap(), "Tony Parker");
    assert_eq!(cursor.get::<i64, _>(2).unwrap(), 36);
    assert!(!cursor.was_null().unwrap());
    let row = cursor.row().unwrap();
    assert_eq!(row.get_column("age"), Some(&Value::Int64(Some(36))));
    assert!(!cursor.is_last().await.unwrap());
    assert!(!cursor.is_last().await.unwrap());

    // Missing columns
    let error = cursor.get::<i64, _>("score").expect_err("There is no score");
    assert!(matches!(
        usage_error(&error),
        UsageError::InvalidColumnReference(..)
    ));
    let error = cursor.get::<i64, _>(0).expect_err("Columns start from 1");
    assert!(matches!(
        usage_error(&error),
        UsageError::InvalidColumnReference(..)
    ));
    let error = cursor.get::<i64, _>(3).expect_err("There are 2 columns");
    assert!(matches!(
        usage_error(&error),
        UsageError::InvalidColumnReference(..)
    ));
    assert!(cursor.find_column("score").is_err());

    // Middle, the peeked row is not lost
    assert!(cursor.advance().await.expect("Failed to advance"));
    assert!(!cursor.is_first());
    assert_eq!(cursor.state(), CursorState::Middle);
    assert_eq!(cursor.row_number(), 2);
    assert_eq!(cursor.get::<String, _>("name").unwrap(), "Tim Duncan");
    assert_eq!(cursor.get::<i64, _>("age").unwrap(), 42);
    assert!(cursor.is_last().await.unwrap());

    // After the last row
    assert!(!cursor.advance().await.expect("Failed to advance"));
    assert!(cursor.is_after_last());
    assert!(!cursor.is_last().await.unwrap());
    assert_eq!(cursor.row_number(), 2);
    assert!(!cursor.advance().await.unwrap());
    assert_eq!(cursor.row_number(), 2);
    let error = cursor.value("name").expect_err("The rows are exhausted");
    assert_eq!(
        *usage_error(&error),
        UsageError::CursorNotPositioned(CursorState::AfterLast)
    );

    // Closed
    cursor.close();
    cursor.close();
    assert!(cursor.is_closed());
    assert!(!cursor.is_after_last());
    let error = cursor.get::<String, _>(1).expect_err("The cursor is closed");
    assert_eq!(
        *usage_error(&error),
        UsageError::CursorNotPositioned(CursorState::Closed)
    );
    let error = cursor.advance().await.expect_err("The cursor is closed");
    assert_eq!(
        *usage_error(&error),
        UsageError::CursorNotPositioned(CursorState::Closed)
    );

    // Closing before the end
    let mut cursor = executor
        .run("MATCH (v:player) RETURN v.name AS name, v.age AS age ORDER BY age LIMIT 2".into())
        .await
        .unwrap();
    assert!(cursor.advance().await.unwrap());
    cursor.close();
    assert!(cursor.is_closed());
    assert!(cursor.advance().await.is_err());

    // Empty
    let mut cursor = executor
        .run("MATCH (v:coach) RETURN v.name AS name".into())
        .await
        .unwrap();
    assert!(!cursor.advance().await.unwrap());
    assert!(!cursor.is_first());
    assert!(cursor.is_after_last());
    assert_eq!(cursor.row_number(), 0);
}

pub async fn cursor_duplicates_and_nulls<E: Executor>(executor: &mut E) {
    let mut cursor = executor
        .run(
            "MATCH (v:player) RETURN v.name AS name, v.nickname AS nickname, v.team AS name LIMIT 1"
                .into(),
        )
        .await
        .expect("Failed to run the query");
    assert_eq!(cursor.labels().len(), 3);
    assert_eq!(cursor.find_column("name").unwrap(), 1);
    assert!(cursor.advance().await.unwrap());
    assert_eq!(cursor.get::<String, _>("name").unwrap(), "Tim Duncan");
    assert_eq!(cursor.get::<String, _>(3).unwrap(), "Spurs");
    assert!(!cursor.was_null().unwrap());
    assert_eq!(cursor.get::<Option<String>, _>("nickname").unwrap(), None);
    assert!(cursor.was_null().unwrap());
    let error = cursor
        .get::<String, _>(2)
        .expect_err("A null cannot be read as a String");
    assert!(matches!(
        usage_error(&error),
        UsageError::TypeCoercion { stored: "STRING", .. }
    ));
    assert!(cursor.value(2).unwrap().is_null());
    assert!(!cursor.advance().await.unwrap());
    let error = cursor.was_null().expect_err("The row changed");
    assert_eq!(*usage_error(&error), UsageError::NoColumnRead);
}

pub async fn cursor_failures<E: Executor>(executor: &mut E) {
    // Errors from the backend stream
    let mut cursor = executor
        .run("MATCH (v:broken) RETURN v.name AS name".into())
        .await
        .expect("Failed to run the query");
    assert!(cursor.advance().await.unwrap());
    silent_logs! {
        let error = cursor.advance().await.expect_err("The second row is an error");
        assert!(format!("{:#}", error).contains("partition 7 is unavailable"));
    }
    assert_eq!(cursor.state(), CursorState::First);
    assert_eq!(cursor.row_number(), 1);
    assert_eq!(cursor.get::<String, _>("name").unwrap(), "Tim Duncan");
    cursor.close();

    // Rows not matching the labels
    let mut cursor = executor
        .run("MATCH (v:malformed) RETURN v.name AS name, v.age AS age".into())
        .await
        .expect("Failed to run the query");
    assert!(cursor.advance().await.is_err());
    assert!(cursor.is_before_first());

    // Statements the backend rejects
    silent_logs! {
        executor
            .run("MATCH (v:player) RETURN v.unknown".into())
            .await
            .expect_err("The statement should be rejected");
    }
}
