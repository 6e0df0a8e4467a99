use graphrel_core::{GqlWriter, Temporal};

/// Nebula literals: strings are double quoted and temporal values are built
/// with constructor functions such as `date("2024-03-01")`.
#[derive(Default, Debug, Clone, Copy)]
pub struct NebulaGqlWriter;

impl NebulaGqlWriter {
    pub const fn new() -> Self {
        Self
    }
}

impl GqlWriter for NebulaGqlWriter {
    fn as_dyn(&self) -> &dyn GqlWriter {
        self
    }

    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('"');
        out.push_str(value);
        out.push('"');
    }

    fn write_value_temporal(&self, out: &mut String, kind: Temporal, text: &str) {
        out.push_str(match kind {
            Temporal::Date => "date",
            Temporal::LocalTime => "local_time",
            Temporal::ZonedTime => "zoned_time",
            Temporal::LocalDateTime => "local_datetime",
            Temporal::ZonedDateTime => "zoned_datetime",
            Temporal::Duration => "duration",
        });
        out.push_str("(\"");
        out.push_str(text);
        out.push_str("\")");
    }
}
