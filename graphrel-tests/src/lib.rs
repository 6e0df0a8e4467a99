mod binding;
mod coercion;
mod cursor;
mod lifecycle;
mod memory;
mod temporal;

use binding::binding;
use coercion::coercion;
use cursor::{cursor_duplicates_and_nulls, cursor_failures, cursor_protocol};
use graphrel::{Connection, Error, UsageError};
use lifecycle::lifecycle;
use log::LevelFilter;
pub use memory::*;
use std::env;
use temporal::temporal;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Run the shared scenarios, the connection is closed at the end.
pub async fn execute_tests<C: Connection>(mut connection: C) {
    binding(&mut connection).await;
    cursor_protocol(&mut connection).await;
    cursor_duplicates_and_nulls(&mut connection).await;
    cursor_failures(&mut connection).await;
    temporal(&mut connection).await;
    coercion(&mut connection).await;
    lifecycle(&mut connection).await;
}

/// The usage error carried by `error`, panics when there is none.
pub fn usage_error(error: &Error) -> &UsageError {
    error
        .downcast_ref::<UsageError>()
        .unwrap_or_else(|| panic!("Expected a usage error, got: {:#}", error))
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}
