use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::QueryError;
use crate::query::Query;

pub mod url;
pub mod params;
pub mod shape;
pub mod endpoint;
pub mod transport;

pub use params::{Params, ParamRules};
pub use shape::{Shape, ContentShape};
pub use endpoint::Endpoint;
pub use transport::{Transport, MinreqTransport, RawResponse};

/// Query context holding the configuration and the HTTP transport
#[derive(Debug, Clone)]
pub struct Client<T: Transport = MinreqTransport> {
    config: ClientConfig,
    transport: T
}

impl Client {
    #[inline]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, MinreqTransport)
    }
}

impl Default for Client {
    #[inline]
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        if config.uses_default_user_agent() {
            tracing::warn!("You are using the default user agent. Please configure it as '{{Project Name}} - {{Contact Information}}'");
        }

        Self {
            config,
            transport
        }
    }

    #[inline]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform exactly one GET request with the configured headers
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn issue(&self, url: &str) -> Result<RawResponse, QueryError> {
        tracing::debug!("Sending request");

        let headers = [("User-Agent", self.config.user_agent.as_str())];

        let response = self.transport.get(url, &headers, self.config.timeout)?;

        if !response.is_ok() {
            tracing::debug!(status = response.status, "Server responded with non-2xx status");
        }

        Ok(response)
    }

    /// Query arbitrary URL. Content is the whole parsed response
    pub fn get(&self, base: &str, route: &str, params: &Params) -> Result<Query, QueryError> {
        let response = self.issue(&url::build(base, route, params))?;
        let json = response.json()?;

        Ok(Query::new(response, json.clone(), json))
    }

    /// Validate parameters, query the endpoint and extract its content
    ///
    /// If the parameters violate the endpoint rules the request is not sent
    /// and a rejected query with `Value::Null` content is returned
    #[tracing::instrument(level = "trace", skip(self, endpoint), fields(route = endpoint.route))]
    pub fn request(&self, base: &str, endpoint: &Endpoint, params: &Params) -> Result<Query, QueryError> {
        if let Err(err) = endpoint.rules.check(params) {
            tracing::warn!("Query parameters didn't pass check, request is not sent: {err}");

            return Ok(Query::rejected(err));
        }

        let unknown = endpoint.unknown_params(params);

        if !unknown.is_empty() {
            tracing::warn!(?unknown, "Endpoint doesn't document some of the given parameters");
        }

        let response = self.issue(&url::build(base, endpoint.route, params))?;
        let json = response.json()?;

        let content = endpoint.shape.extract(json.clone())?;

        Ok(Query::<Value>::new(response, json, content))
    }
}
