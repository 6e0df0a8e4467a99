#[cfg(test)]
mod tests {
    use graphrel_core::{GenericGqlWriter, GqlWriter, Interval};
    use std::time::Duration;

    #[test]
    fn iso_8601() {
        macro_rules! test_interval {
            ($interval:expr, $expected:literal) => {{
                assert_eq!($interval.to_string(), $expected);
            }};
        }

        test_interval!(Interval::ZERO, "PT0S");
        test_interval!(Interval::default(), "PT0S");
        test_interval!(Interval::from_secs(1), "PT1S");
        test_interval!(Interval::from_nanos(1), "PT0.000000001S");
        test_interval!(Interval::from_nanos(500_000_000), "PT0.5S");
        test_interval!(Interval::from_nanos(-500_000_000), "PT-0.5S");
        test_interval!(Interval::from_mins(90), "PT1H30M");
        test_interval!(Interval::from_hours(25), "P1DT1H");
        test_interval!(Interval::from_days(3), "P3D");
        test_interval!(Interval::from_months(14), "P1Y2M");
        test_interval!(Interval::from_years(2), "P2Y");
        test_interval!(
            Interval::new(
                14,
                3,
                4 * Interval::NANOS_IN_HOUR
                    + 5 * Interval::NANOS_IN_MIN
                    + 6 * Interval::NANOS_IN_SEC
                    + 500_000_000
            ),
            "P1Y2M3DT4H5M6.5S"
        );
        test_interval!(Interval::from(Duration::from_millis(1_500)), "PT1.5S");
        test_interval!(Interval::from_secs(-90), "PT-1M-30S");
    }

    #[test]
    fn normalization() {
        assert_eq!(Interval::from_hours(48), Interval::from_days(2));
        assert_eq!(Interval::from_hours(48).days, 2);
        assert_eq!(Interval::from_hours(48).nanos, 0);
        assert_eq!(
            Interval::new(0, 0, Interval::NANOS_IN_DAY),
            Interval::new(0, 1, 0)
        );
        assert_ne!(Interval::from_months(1), Interval::from_days(30));
        assert!(Interval::ZERO.is_zero());
        assert!(!Interval::from_nanos(1).is_zero());
    }

    #[test]
    fn to_duration() {
        assert_eq!(
            Interval::from_days(1)
                .as_duration(Interval::DAYS_IN_MONTH)
                .unwrap(),
            Duration::from_secs(86_400)
        );
        assert_eq!(
            Interval::from_nanos(1_500_000_000).as_duration(30.0).unwrap(),
            Duration::from_millis(1_500)
        );
        assert_eq!(
            Interval::from_months(1).as_duration(30.0).unwrap(),
            Duration::from_secs(30 * 86_400)
        );
        // P1DT-1H
        assert_eq!(
            Interval::new(0, 1, -Interval::NANOS_IN_HOUR)
                .as_duration(30.0)
                .unwrap(),
            Duration::from_secs(23 * 3600)
        );
        assert_eq!(
            Interval::from_days(100_000_000_000_000)
                .as_duration(30.0)
                .unwrap(),
            Duration::from_secs(8_640_000_000_000_000_000)
        );
    }

    #[test]
    fn to_duration_failures() {
        assert!(Interval::from_secs(-1).as_duration(30.0).is_err());
        assert!(
            Interval::new(0, -1, Interval::NANOS_IN_HOUR)
                .as_duration(30.0)
                .is_err()
        );
        assert!(
            Interval::from_days(1_000_000_000_000_000)
                .as_duration(30.0)
                .is_err()
        );
    }

    #[test]
    fn literal() {
        let mut out = String::new();
        GenericGqlWriter::new().write_value(&mut out, &Interval::from_days(1).into());
        assert_eq!(out, "DURATION 'P1D'");
    }
}
