use crate::usage_error;
use graphrel::{Executor, UsageError};
use rust_decimal::Decimal;
use std::str::FromStr;
use time::PrimitiveDateTime;

pub async fn coercion<E: Executor>(executor: &mut E) {
    let mut cursor = executor
        .run(
            r#"RETURN "2024-03-01T10:20:30" AS ts, 42 AS n, 3.5 AS score, NULL AS missing, true AS flag, 12.50 AS price"#
                .into(),
        )
        .await
        .expect("Failed to run the query");
    assert!(cursor.advance().await.unwrap());

    // Timestamps are not parsed out of strings
    let error = cursor
        .get::<PrimitiveDateTime, _>("ts")
        .expect_err("A string is not a timestamp");
    let UsageError::TypeCoercion { stored, requested } = usage_error(&error) else {
        panic!("Unexpected error: {:#}", error);
    };
    assert_eq!(*stored, "STRING");
    assert_eq!(*requested, "LOCAL DATETIME");
    assert_eq!(cursor.get::<String, _>("ts").unwrap(), "2024-03-01T10:20:30");

    // Numbers
    assert_eq!(cursor.get::<i64, _>("n").unwrap(), 42);
    assert_eq!(cursor.get::<i8, _>("n").unwrap(), 42);
    assert_eq!(cursor.get::<u16, _>("n").unwrap(), 42);
    assert_eq!(cursor.get::<f64, _>("n").unwrap(), 42.0);
    assert_eq!(cursor.get::<Decimal, _>("n").unwrap(), Decimal::from(42));
    assert_eq!(cursor.get::<bool, _>("n").unwrap(), true);
    assert_eq!(cursor.get::<f64, _>("score").unwrap(), 3.5);
    assert_eq!(cursor.get::<f32, _>("score").unwrap(), 3.5);
    assert_eq!(
        cursor.get::<Decimal, _>("score").unwrap(),
        Decimal::from_str("3.5").unwrap()
    );
    assert!(cursor.get::<i64, _>("score").is_err());
    assert_eq!(
        cursor.get::<Decimal, _>("price").unwrap(),
        Decimal::new(1250, 2)
    );
    assert_eq!(cursor.get::<f64, _>("price").unwrap(), 12.5);
    assert!(cursor.get::<String, _>("n").is_err());

    // Nulls
    assert_eq!(cursor.get::<Option<i64>, _>("missing").unwrap(), None);
    assert!(cursor.was_null().unwrap());
    let error = cursor
        .get::<i64, _>("missing")
        .expect_err("A null needs an Option");
    assert!(matches!(
        usage_error(&error),
        UsageError::TypeCoercion { stored: "NULL", .. }
    ));
    assert_eq!(cursor.get::<Option<bool>, _>("flag").unwrap(), Some(true));
    assert!(!cursor.was_null().unwrap());
    assert_eq!(cursor.get::<bool, _>("flag").unwrap(), true);
    assert!(cursor.get::<i64, _>("flag").is_err());
}
