mod connection;
mod driver;
mod gql_writer;
mod placeholder;
mod prepared;

pub use connection::*;
pub use driver::*;
pub use gql_writer::*;
pub use placeholder::*;
pub use prepared::*;
