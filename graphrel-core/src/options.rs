use crate::{Error, ErrorContext, Result};
use std::{collections::BTreeMap, str::FromStr, time::Duration};
use url::Url;
use urlencoding::decode;

/// Settings of a connection, parsed from its URL.
///
/// ```text
/// <scheme>://[user[:password]@]host:port[,host:port...][/graph][?key=value&...]
/// ```
///
/// Recognized query keys are `user`, `password`, `schema`, `timezone`, `graph`,
/// `connectTimeout`, `requestTimeout`, `maxClientSize`, `minClientSize` and
/// `maxWaitTime` (times in milliseconds). A key given in the query string wins
/// over the same setting in the user info or path. Anything else is kept in
/// [`ConnectOptions::properties`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Backend addresses, at least one.
    pub addresses: Vec<(String, u16)>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub schema: Option<String>,
    pub timezone: Option<String>,
    pub graph: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_client_size: Option<u32>,
    pub min_client_size: Option<u32>,
    pub max_wait_time: Option<Duration>,
    /// Unrecognized query keys.
    pub properties: BTreeMap<String, String>,
}

impl ConnectOptions {
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(3000);
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(5000);

    pub fn from_url(scheme: &str, url: &str) -> Result<Self> {
        let context = || format!("While parsing a `{}` connection url", scheme);
        let prefix = format!("{}://", scheme);
        let Some(rest) = url.strip_prefix(&prefix) else {
            return Err(Error::msg(format!(
                "Connection url must start with `{}`",
                prefix
            )));
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };
        let (authority, path) = rest.split_once('/').unwrap_or((rest, ""));
        let (user_info, hosts) = match authority.rsplit_once('@') {
            Some((user_info, hosts)) => (Some(user_info), hosts),
            None => (None, authority),
        };
        let mut result = Self {
            addresses: Vec::new(),
            ..Default::default()
        };
        for address in hosts.split(',').filter(|v| !v.is_empty()) {
            result
                .addresses
                .push(parse_address(scheme, address).with_context(context)?);
        }
        if result.addresses.is_empty() {
            return Err(Error::msg("Connection url must contain at least one host:port address")
                .context(context()));
        }
        if let Some(user_info) = user_info {
            let (user, password) = match user_info.split_once(':') {
                Some((user, password)) => (user, Some(password)),
                None => (user_info, None),
            };
            if !user.is_empty() {
                result.user = Some(decode(user).with_context(context)?.into_owned());
            }
            if let Some(password) = password {
                result.password = Some(decode(password).with_context(context)?.into_owned());
            }
        }
        let path = path.trim_end_matches('/');
        if !path.is_empty() {
            result.graph = Some(decode(path).with_context(context)?.into_owned());
        }
        for pair in query.into_iter().flat_map(|v| v.split('&')) {
            if pair.is_empty() {
                continue;
            }
            let Some((key, value)) = pair.split_once('=') else {
                return Err(Error::msg(format!(
                    "Connection property `{}` is not in the form key=value",
                    pair
                ))
                .context(context()));
            };
            let key = decode(key).with_context(context)?;
            let value = decode(value).with_context(context)?.into_owned();
            result.set(&key, value).with_context(context)?;
        }
        Ok(result)
    }

    /// Apply one `key=value` setting.
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "user" => self.user = Some(value),
            "password" => self.password = Some(value),
            "schema" => self.schema = Some(value),
            "timezone" => self.timezone = Some(value),
            "graph" | "graphName" => self.graph = Some(value),
            "connectTimeout" => self.connect_timeout = parse_millis(key, &value)?,
            "requestTimeout" => self.request_timeout = parse_millis(key, &value)?,
            "maxClientSize" => self.max_client_size = Some(parse_number(key, &value)?),
            "minClientSize" => self.min_client_size = Some(parse_number(key, &value)?),
            "maxWaitTime" => self.max_wait_time = Some(parse_millis(key, &value)?),
            _ => {
                log::warn!(
                    "Connection property `{}` is not recognized, it is passed to the session as is",
                    key
                );
                self.properties.insert(key.to_owned(), value);
            }
        }
        Ok(())
    }
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            addresses: vec![("localhost".into(), 9669)],
            user: None,
            password: None,
            schema: None,
            timezone: None,
            graph: None,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
            max_client_size: None,
            min_client_size: None,
            max_wait_time: None,
            properties: BTreeMap::new(),
        }
    }
}

fn parse_address(scheme: &str, address: &str) -> Result<(String, u16)> {
    let invalid = || {
        Error::msg(format!(
            "Address `{}` is not in the form host:port",
            address
        ))
    };
    let url = Url::parse(&format!("{}://{}", scheme, address)).map_err(|_| invalid())?;
    if !url.username().is_empty() || !matches!(url.path(), "" | "/") || url.query().is_some() {
        return Err(invalid());
    }
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) if !host.is_empty() => Ok((host.to_owned(), port)),
        _ => Err(invalid()),
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse::<T>()
        .with_context(|| format!("Invalid value `{}` for connection property `{}`", value, key))
}

fn parse_millis(key: &str, value: &str) -> Result<Duration> {
    parse_number::<u64>(key, value).map(Duration::from_millis)
}
