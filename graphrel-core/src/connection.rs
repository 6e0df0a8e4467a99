use crate::{Executor, Result};
use std::{borrow::Cow, future::Future};

pub trait Connection: Executor {
    /// Open a session to the backend described by `url` and apply its settings.
    fn connect(url: Cow<'static, str>) -> impl Future<Output = Result<Self>> + Send;

    /// Release the underlying session. Calling it again does nothing.
    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;

    fn is_closed(&self) -> bool;
}
