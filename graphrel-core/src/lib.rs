mod as_value;
mod connection;
mod cursor;
mod driver;
mod error;
mod executor;
mod gql_writer;
mod interval;
mod metadata;
mod options;
mod prepared;
mod query;
mod session;
mod util;
mod value;
mod zoned_time;

pub use ::anyhow::Context as ErrorContext;
pub use as_value::*;
pub use connection::*;
pub use cursor::*;
pub use driver::*;
pub use error::*;
pub use executor::*;
pub use gql_writer::*;
pub use interval::*;
pub use metadata::*;
pub use options::*;
pub use prepared::*;
pub use query::*;
pub use session::*;
pub use util::*;
pub use value::*;
pub use zoned_time::*;
pub mod stream {
    pub use ::futures::stream::*;
}
pub use ::futures::future;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
