use crate::{Connection, GqlWriter, Prepared, Result};
use std::{borrow::Cow, fmt::Debug, future::Future};

/// A graph backend: its connection type, literal dialect and prepared queries.
pub trait Driver: Debug + Default + Send + Sync + Sized {
    type Connection: Connection<Driver = Self>;
    type GqlWriter: GqlWriter;
    type Prepared: Prepared;

    /// URL scheme accepted by [`Connection::connect`].
    const NAME: &'static str;

    fn gql_writer(&self) -> Self::GqlWriter;

    fn connect(&self, url: Cow<'static, str>) -> impl Future<Output = Result<Self::Connection>> {
        Self::Connection::connect(url)
    }
}
