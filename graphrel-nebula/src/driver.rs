use crate::{NebulaConnection, NebulaGqlWriter, NebulaPrepared};
use graphrel_core::{Driver, Session};
use std::{fmt, marker::PhantomData};

/// Nebula Graph driver over the session transport `S`.
pub struct NebulaDriver<S>(PhantomData<fn() -> S>);

impl<S> NebulaDriver<S> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<S> Default for NebulaDriver<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for NebulaDriver<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for NebulaDriver<S> {}

impl<S> fmt::Debug for NebulaDriver<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NebulaDriver")
    }
}

impl<S: Session> Driver for NebulaDriver<S> {
    type Connection = NebulaConnection<S>;
    type GqlWriter = NebulaGqlWriter;
    type Prepared = NebulaPrepared;

    const NAME: &'static str = "nebula";

    fn gql_writer(&self) -> Self::GqlWriter {
        NebulaGqlWriter::default()
    }
}
