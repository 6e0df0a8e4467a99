#[cfg(test)]
mod tests {
    use graphrel_core::{Interval, Prepared, UsageError, Value, ZonedTime};
    use graphrel_nebula::NebulaPrepared;
    use rust_decimal::Decimal;
    use std::borrow::Cow;
    use time::{
        Time,
        macros::{date, datetime, offset, time},
    };

    fn render(query: &str, values: impl IntoIterator<Item = Value>) -> String {
        let mut prepared = NebulaPrepared::new(query.into());
        for value in values {
            prepared.bind(value).expect("Failed to bind");
        }
        prepared.render().expect("Failed to render")
    }

    #[test]
    fn positional() {
        let mut prepared =
            NebulaPrepared::new("match(v) where v.id = ? return v.name, ? as extra limit ?".into());
        assert_eq!(prepared.parameter_count(), 3);
        prepared
            .bind_index(10i64, 1)
            .and_then(|p| p.bind_index("x", 2))
            .and_then(|p| p.bind_index(5i64, 3))
            .unwrap();
        assert_eq!(
            prepared.render().unwrap(),
            r#"match(v) where v.id = 10 return v.name, "x" as extra limit 5"#
        );
    }

    #[test]
    fn long_substitutions_do_not_shift() {
        let long = "?".repeat(300);
        let rendered = render(
            "RETURN ? AS a, ? AS b, ? AS c",
            [Value::from(long.clone()), Value::from(2i64), Value::from("?")],
        );
        assert_eq!(rendered, format!(r#"RETURN "{}" AS a, 2 AS b, "?" AS c"#, long));
    }

    #[test]
    fn quoted_markers_are_kept() {
        assert_eq!(
            render(r#"RETURN "what?" AS q, ? AS a"#, [Value::from(1i32)]),
            r#"RETURN "what?" AS q, 1 AS a"#
        );
        assert_eq!(
            render(r#"RETURN "say \"?\"" AS q, ? AS a"#, [Value::from(true)]),
            r#"RETURN "say \"?\"" AS q, true AS a"#
        );
        assert_eq!(render("RETURN 1 AS a", []), "RETURN 1 AS a");
    }

    #[test]
    fn literals() {
        macro_rules! test_literal {
            ($value:expr, $expected:literal) => {{
                assert_eq!(render("RETURN ?", [Value::from($value)]), concat!("RETURN ", $expected));
            }};
        }
        test_literal!(Value::Null, "NULL");
        test_literal!(Option::<i64>::None, "NULL");
        test_literal!(Value::Date(None), "NULL");
        test_literal!(true, "true");
        test_literal!(false, "false");
        test_literal!(-7i8, "-7");
        test_literal!(u64::MAX, "18446744073709551615");
        test_literal!(1.5f64, "1.5");
        test_literal!(0.25f32, "0.25");
        test_literal!(Decimal::new(1250, 2), "12.50");
        test_literal!("O'Brien", r#""O'Brien""#);
        test_literal!(String::from("multi\nline"), "\"multi\nline\"");
        test_literal!(Cow::Borrowed("cow"), r#""cow""#);
        test_literal!(date!(2024-03-01), r#"date("2024-03-01")"#);
        test_literal!(date!(900-01-09), r#"date("0900-01-09")"#);
        test_literal!(time!(10:20:30), r#"local_time("10:20:30")"#);
        test_literal!(time!(10:20:30.125), r#"local_time("10:20:30.125")"#);
        test_literal!(Time::from_hms_nano(0, 0, 0, 1).unwrap(), r#"local_time("00:00:00.000000001")"#);
        test_literal!(
            ZonedTime::new(time!(10:20:30), offset!(+8)),
            r#"zoned_time("10:20:30+08:00")"#
        );
        test_literal!(
            ZonedTime::new(time!(23:59:59), offset!(-3:30)),
            r#"zoned_time("23:59:59-03:30")"#
        );
        test_literal!(
            datetime!(2024-03-01 10:20:30),
            r#"local_datetime("2024-03-01T10:20:30")"#
        );
        test_literal!(
            datetime!(2024-03-01 10:20:30 +8),
            r#"zoned_datetime("2024-03-01T10:20:30+08:00")"#
        );
        test_literal!(
            datetime!(2024-03-01 10:20:30 UTC),
            r#"zoned_datetime("2024-03-01T10:20:30+00:00")"#
        );
        test_literal!(Interval::ZERO, r#"duration("PT0S")"#);
        test_literal!(
            Interval::new(
                14,
                3,
                4 * Interval::NANOS_IN_HOUR
                    + 5 * Interval::NANOS_IN_MIN
                    + 6 * Interval::NANOS_IN_SEC
                    + 500_000_000
            ),
            r#"duration("P1Y2M3DT4H5M6.5S")"#
        );
        test_literal!(vec![1i64, 2, 3], "[1, 2, 3]");
        test_literal!(
            vec![vec![String::from("a")], vec![]],
            r#"[["a"], []]"#
        );
        test_literal!(Vec::<i64>::new(), "[]");
    }

    #[test]
    fn errors() {
        let mut prepared = NebulaPrepared::new("RETURN ?, ?".into());
        let error = prepared.bind_index(1i64, 3).unwrap_err();
        assert_eq!(
            error.downcast_ref::<UsageError>(),
            Some(&UsageError::PlaceholderCountMismatch { index: 3, count: 2 })
        );
        prepared.bind(1i64).unwrap();
        let error = prepared.render().unwrap_err();
        assert_eq!(
            error.downcast_ref::<UsageError>(),
            Some(&UsageError::UnboundParameter { index: 2 })
        );
        prepared.bind(2i64).unwrap();
        let error = prepared.bind(3i64).unwrap_err();
        assert_eq!(
            error.downcast_ref::<UsageError>(),
            Some(&UsageError::PlaceholderCountMismatch { index: 3, count: 2 })
        );
        assert_eq!(prepared.render().unwrap(), "RETURN 1, 2");
        prepared.clear_bindings().unwrap();
        assert!(prepared.render().is_err());
        prepared.bind(7i64).unwrap();
        assert_eq!(prepared.metadata().kinds, [Some("INT64"), None]);

        let mut prepared = NebulaPrepared::new("RETURN 1".into());
        assert!(prepared.bind(1i64).is_err());
        assert_eq!(prepared.render().unwrap(), "RETURN 1");
    }

    #[test]
    fn display() {
        let prepared = NebulaPrepared::new("RETURN ?".into());
        assert_eq!(prepared.to_string(), "RETURN ?");
        let long = format!("RETURN {}", "x".repeat(1000));
        let prepared = NebulaPrepared::new(long);
        let display = prepared.to_string();
        assert!(display.ends_with("..."));
        assert_eq!(display.chars().count(), 500);
    }
}
