use graphrel::{Executor, Interval, ZonedTime};
use std::time::Duration;
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time,
    macros::{date, datetime, offset, time},
};

pub async fn temporal<E: Executor>(executor: &mut E) {
    let mut query = executor
        .prepare("RETURN ? AS d, ? AS t, ? AS zt, ? AS dt, ? AS zdt, ? AS dur".into())
        .await
        .expect("Failed to prepare the query");
    query
        .bind(date!(2024-03-01))
        .and_then(|q| q.bind(time!(10:20:30)))
        .and_then(|q| q.bind(ZonedTime::new(time!(10:20:30), offset!(+8))))
        .and_then(|q| q.bind(datetime!(2024-03-01 10:20:30)))
        .and_then(|q| q.bind(datetime!(2024-03-01 10:20:30 +8)))
        .and_then(|q| q.bind(Interval::from_hours(26)))
        .expect("Failed to bind the parameters");
    let mut cursor = executor.run(query).await.expect("Failed to run the query");
    assert!(cursor.advance().await.unwrap());
    assert_eq!(cursor.get::<Date, _>("d").unwrap(), date!(2024-03-01));
    assert_eq!(cursor.get::<Time, _>("t").unwrap(), time!(10:20:30));
    let zoned = cursor.get::<ZonedTime, _>("zt").unwrap();
    assert_eq!(zoned.offset, offset!(+8));
    assert_eq!(zoned.to_offset(offset!(UTC)).time, time!(02:20:30));
    assert_eq!(
        cursor.get::<PrimitiveDateTime, _>("dt").unwrap(),
        datetime!(2024-03-01 10:20:30)
    );
    assert_eq!(
        cursor.get::<OffsetDateTime, _>("zdt").unwrap(),
        datetime!(2024-03-01 02:20:30 UTC)
    );
    assert_eq!(
        cursor.get::<PrimitiveDateTime, _>("zdt").unwrap(),
        datetime!(2024-03-01 10:20:30)
    );
    assert_eq!(
        cursor.get::<Interval, _>("dur").unwrap(),
        Interval::new(0, 1, 2 * Interval::NANOS_IN_HOUR)
    );
    assert_eq!(
        cursor.get::<Duration, _>("dur").unwrap(),
        Duration::from_secs(26 * 3600)
    );
    assert!(cursor.get::<Date, _>("t").is_err());

    // Read at another offset
    let west = offset!(-5);
    assert_eq!(cursor.time_at("zt", west).unwrap(), Some(time!(21:20:30)));
    assert_eq!(cursor.time_at("t", west).unwrap(), Some(time!(10:20:30)));
    assert_eq!(cursor.date_at("zdt", west).unwrap(), Some(date!(2024-02-29)));
    assert_eq!(
        cursor.datetime_at("zdt", west).unwrap(),
        Some(datetime!(2024-02-29 21:20:30))
    );
    assert_eq!(
        cursor.datetime_at("dt", west).unwrap(),
        Some(datetime!(2024-03-01 10:20:30))
    );
    assert!(cursor.time_at("dur", west).is_err());
    assert_eq!(cursor.metadata().column_kind(3), Some("ZONED TIME"));

    // Fractional seconds and zero durations
    let mut query = executor
        .prepare("RETURN ? AS t, ? AS zero".into())
        .await
        .unwrap();
    query
        .bind(time!(10:20:30.5))
        .and_then(|q| q.bind(Duration::ZERO))
        .unwrap();
    let mut cursor = executor.run(query).await.expect("Failed to run the query");
    assert!(cursor.advance().await.unwrap());
    assert_eq!(cursor.get::<Time, _>(1).unwrap(), time!(10:20:30.5));
    assert!(cursor.get::<Interval, _>(2).unwrap().is_zero());
}
