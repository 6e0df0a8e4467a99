use crate::{NebulaDriver, NebulaPrepared};
use graphrel_core::{
    ConnectOptions, Connection, Cursor, Driver, Error, ErrorContext, Executor, Query, Result,
    Session, truncate_long,
};
use std::borrow::Cow;

/// A connection to Nebula Graph, owning one session of the transport `S`.
pub struct NebulaConnection<S: Session> {
    pub(crate) driver: NebulaDriver<S>,
    pub(crate) session: Option<S>,
    pub(crate) options: ConnectOptions,
}

impl<S: Session> NebulaConnection<S> {
    /// Open a session with options already parsed and apply its settings.
    pub async fn connect_with(options: ConnectOptions) -> Result<Self> {
        let mut session = match S::open(&options).await {
            Ok(session) => session,
            Err(error) => {
                let error = error.context("While opening the nebula session");
                log::error!("{:#}", error);
                return Err(error);
            }
        };
        for statement in Self::session_settings(&options) {
            if let Err(error) = session.execute(&statement).await {
                let error = error.context(format!("While running `{}`", statement));
                log::error!("{:#}", error);
                if let Err(e) = session.close().await {
                    log::warn!("Could not close the nebula session: {:#}", e);
                }
                return Err(error);
            }
        }
        Ok(Self {
            driver: NebulaDriver::new(),
            session: Some(session),
            options,
        })
    }

    /// Statements issued right after the session is opened.
    pub fn session_settings(options: &ConnectOptions) -> Vec<String> {
        let mut result = Vec::new();
        if let Some(schema) = &options.schema {
            result.push(format!("SESSION SET SCHEMA \"{}\"", schema));
        }
        if let Some(graph) = &options.graph {
            result.push(format!("SESSION SET GRAPH {}", graph));
        }
        if let Some(timezone) = &options.timezone {
            result.push(format!("SESSION SET TIME ZONE \"{}\"", timezone));
        }
        result
    }

    pub fn options(&self) -> &ConnectOptions {
        &self.options
    }

    /// The underlying session, `None` once closed.
    pub fn session(&self) -> Option<&S> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut S> {
        self.session.as_mut()
    }

    fn open_session(&mut self) -> Result<&mut S> {
        self.session.as_mut().ok_or_else(|| {
            let error = Error::msg("The connection is closed");
            log::error!("{:#}", error);
            error
        })
    }
}

impl<S: Session> Executor for NebulaConnection<S> {
    type Driver = NebulaDriver<S>;

    fn driver(&self) -> &Self::Driver {
        &self.driver
    }

    async fn prepare(&mut self, query: String) -> Result<Query<Self::Driver>> {
        self.open_session()?;
        Ok(Query::Prepared(NebulaPrepared::new(query)))
    }

    async fn run(&mut self, query: Query<Self::Driver>) -> Result<Cursor> {
        let gql = query.render()?;
        let session = self.open_session()?;
        log::debug!("Running the query:\n{}", truncate_long!(gql));
        match session.execute(&gql).await {
            Ok(result) => Ok(result.into()),
            Err(error) => {
                let error =
                    error.context(format!("While running the query:\n{}", truncate_long!(gql)));
                log::error!("{:#}", error);
                Err(error)
            }
        }
    }
}

impl<S: Session> Connection for NebulaConnection<S> {
    async fn connect(url: Cow<'static, str>) -> Result<Self> {
        let options = ConnectOptions::from_url(<Self::Driver as Driver>::NAME, &url)
            .inspect_err(|e| log::error!("{:#}", e))?;
        Self::connect_with(options).await
    }

    async fn close(&mut self) -> Result<()> {
        let Some(mut session) = self.session.take() else {
            return Ok(());
        };
        log::debug!("Closing the nebula session");
        session
            .close()
            .await
            .context("While closing the nebula session")
            .inspect_err(|e| log::error!("{:#}", e))
    }

    fn is_closed(&self) -> bool {
        self.session.is_none()
    }
}
