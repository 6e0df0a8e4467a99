use crate::{Cursor, Driver, Query, Result};
use std::future::Future;

pub trait Executor: Send + Sized {
    type Driver: Driver;

    fn driver(&self) -> &Self::Driver;

    /// Count the placeholders of `query` and wrap it into a query ready for binding.
    fn prepare(
        &mut self,
        query: String,
    ) -> impl Future<Output = Result<Query<Self::Driver>>> + Send;

    /// Render and send the query, returning a cursor over its rows.
    fn run(&mut self, query: Query<Self::Driver>) -> impl Future<Output = Result<Cursor>> + Send;

    /// Send the query and discard its rows.
    fn execute(&mut self, query: Query<Self::Driver>) -> impl Future<Output = Result<()>> + Send {
        async move {
            let mut cursor = self.run(query).await?;
            cursor.close();
            Ok(())
        }
    }
}
