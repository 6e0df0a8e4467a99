use graphrel::{
    ConnectOptions, Error, Interval, Result, Row, RowNames, Session, SessionResult, Value,
    ZonedTime,
    stream::{self, StreamExt},
};
use rust_decimal::Decimal;
use time::macros::{date, datetime, offset, time};

/// In-memory stand-in for a Nebula Graph service.
///
/// It knows a fixed set of statements, written in the Nebula dialect, and
/// answers each one with canned rows. Any other statement fails, so a test
/// passes only when the driver sent exactly the expected text. Every statement
/// received is recorded.
///
/// Opening fails for the user `invalid`, selecting the graph `missing_graph`
/// fails.
#[derive(Debug)]
pub struct MemorySession {
    options: ConnectOptions,
    executed: Vec<String>,
    closed: bool,
}

impl MemorySession {
    pub const INVALID_USER: &'static str = "invalid";
    pub const MISSING_GRAPH: &'static str = "missing_graph";

    pub fn options(&self) -> &ConnectOptions {
        &self.options
    }

    /// Statements received so far, in order.
    pub fn executed(&self) -> &[String] {
        &self.executed
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Session for MemorySession {
    async fn open(options: &ConnectOptions) -> Result<Self> {
        if options.user.as_deref() == Some(Self::INVALID_USER) {
            return Err(Error::msg(format!(
                "Authentication failed for user `{}`",
                Self::INVALID_USER
            )));
        }
        Ok(Self {
            options: options.clone(),
            executed: Vec::new(),
            closed: false,
        })
    }

    async fn execute(&mut self, gql: &str) -> Result<SessionResult> {
        if self.closed {
            return Err(Error::msg("The session is closed"));
        }
        tokio::task::yield_now().await;
        self.executed.push(gql.to_owned());
        answer(gql)
    }

    async fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

fn labels(names: &[&str]) -> RowNames {
    names.iter().map(|v| v.to_string()).collect()
}

fn row<const N: usize>(values: [Value; N]) -> Row {
    values.into()
}

fn string(value: &str) -> Value {
    Value::Varchar(Some(value.into()))
}

const TEMPORAL: &str = concat!(
    r#"RETURN date("2024-03-01") AS d, local_time("10:20:30") AS t, "#,
    r#"zoned_time("10:20:30+08:00") AS zt, local_datetime("2024-03-01T10:20:30") AS dt, "#,
    r#"zoned_datetime("2024-03-01T10:20:30+08:00") AS zdt, duration("P1DT2H") AS dur"#
);

fn answer(gql: &str) -> Result<SessionResult> {
    if let Some(graph) = gql.strip_prefix("SESSION SET GRAPH ") {
        if graph == MemorySession::MISSING_GRAPH {
            return Err(Error::msg(format!("Graph `{}` not found", graph)));
        }
        return Ok(SessionResult::empty());
    }
    if gql.starts_with("SESSION SET ") {
        return Ok(SessionResult::empty());
    }
    Ok(match gql {
        r#"match(v) where v.id = 10 return v.name, "x" as extra limit 5"# => {
            SessionResult::from_rows(
                labels(&["v.name", "extra"]),
                [row([string("Tim Duncan"), string("x")])],
            )
        }
        r#"MATCH (v:player) WHERE v.name == "what?" AND v.age > 40 RETURN v.name AS name"# => {
            SessionResult::from_rows(
                labels(&["name"]),
                [row([string("Tim Duncan")]), row([string("Manu Ginobili")])],
            )
        }
        "MATCH (v:player) WHERE v.nickname == NULL RETURN v.name AS name" => {
            SessionResult::from_rows(labels(&["name"]), [])
        }
        r#"INSERT VERTEX player(name, age) VALUES "p200":("O'Brien", 30)"# => {
            SessionResult::empty()
        }
        "MATCH (v:player) WHERE v.id IN [100, 101] RETURN v.name AS name" => {
            SessionResult::from_rows(
                labels(&["name"]),
                [row([string("Tim Duncan")]), row([string("Tony Parker")])],
            )
        }
        "MATCH (v:player) RETURN v.name AS name, v.age AS age ORDER BY age LIMIT 2" => {
            SessionResult::from_rows(
                labels(&["name", "age"]),
                [
                    row([string("Tony Parker"), Value::Int64(Some(36))]),
                    row([string("Tim Duncan"), Value::Int64(Some(42))]),
                ],
            )
        }
        "MATCH (v:player) RETURN v.name AS name, v.nickname AS nickname, v.team AS name LIMIT 1" => {
            SessionResult::from_rows(
                labels(&["name", "nickname", "name"]),
                [row([
                    string("Tim Duncan"),
                    Value::Varchar(None),
                    string("Spurs"),
                ])],
            )
        }
        "MATCH (v:coach) RETURN v.name AS name" => SessionResult::from_rows(labels(&["name"]), []),
        "MATCH (v:broken) RETURN v.name AS name" => SessionResult::new(
            labels(&["name"]),
            stream::iter([
                Ok(row([string("Tim Duncan")])),
                Err(Error::msg("Storage error: partition 7 is unavailable")),
            ])
            .boxed(),
        ),
        "MATCH (v:malformed) RETURN v.name AS name, v.age AS age" => {
            SessionResult::from_rows(labels(&["name", "age"]), [row([string("Tim Duncan")])])
        }
        TEMPORAL => SessionResult::from_rows(
            labels(&["d", "t", "zt", "dt", "zdt", "dur"]),
            [row([
                Value::Date(Some(date!(2024-03-01))),
                Value::Time(Some(time!(10:20:30))),
                Value::TimeWithTimezone(Some(ZonedTime::new(time!(10:20:30), offset!(+8)))),
                Value::Timestamp(Some(datetime!(2024-03-01 10:20:30))),
                Value::TimestampWithTimezone(Some(datetime!(2024-03-01 10:20:30 +8))),
                Value::Interval(Some(Interval::from_hours(26))),
            ])],
        ),
        r#"RETURN local_time("10:20:30.5") AS t, duration("PT0S") AS zero"# => {
            SessionResult::from_rows(
                labels(&["t", "zero"]),
                [row([
                    Value::Time(Some(time!(10:20:30.5))),
                    Value::Interval(Some(Interval::ZERO)),
                ])],
            )
        }
        r#"RETURN "2024-03-01T10:20:30" AS ts, 42 AS n, 3.5 AS score, NULL AS missing, true AS flag, 12.50 AS price"# => {
            SessionResult::from_rows(
                labels(&["ts", "n", "score", "missing", "flag", "price"]),
                [row([
                    string("2024-03-01T10:20:30"),
                    Value::Int64(Some(42)),
                    Value::Float64(Some(3.5)),
                    Value::Null,
                    Value::Boolean(Some(true)),
                    Value::Decimal(Some(Decimal::new(1250, 2))),
                ])],
            )
        }
        _ => {
            return Err(Error::msg(format!(
                "SyntaxError: statement not understood near `{}`",
                gql
            )));
        }
    })
}
