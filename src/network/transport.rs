use serde_json::Value;

use crate::error::QueryError;

/// Exact response of a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub url: String,
    pub status: i32,
    pub body: Vec<u8>
}

impl RawResponse {
    /// Whether the status code is in range of 200-299
    ///
    /// Non-2xx statuses are not treated as errors by the queries,
    /// it's up to the caller to check this
    #[inline]
    pub fn is_ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Try to parse body as an order-preserving json value
    pub fn json(&self) -> Result<Value, QueryError> {
        serde_json::from_slice(&self.body).map_err(|err| {
            QueryError::malformed(format!("{} returned non-json body (status {}): {err}", self.url, self.status))
        })
    }
}

/// Performs blocking GET requests
pub trait Transport {
    /// Perform exactly one GET request
    ///
    /// Must return `QueryError::Network` if the request couldn't be completed,
    /// and a response with any status code otherwise
    fn get(&self, url: &str, headers: &[(&str, &str)], timeout: u64) -> Result<RawResponse, QueryError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    #[inline]
    fn get(&self, url: &str, headers: &[(&str, &str)], timeout: u64) -> Result<RawResponse, QueryError> {
        (**self).get(url, headers, timeout)
    }
}

/// Default transport backed by `minreq`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MinreqTransport;

impl Transport for MinreqTransport {
    #[tracing::instrument(level = "trace", skip(headers))]
    fn get(&self, url: &str, headers: &[(&str, &str)], timeout: u64) -> Result<RawResponse, QueryError> {
        let mut request = minreq::get(url).with_timeout(timeout);

        for (key, value) in headers {
            request = request.with_header(*key, *value);
        }

        let response = request.send()?;

        tracing::trace!(status = response.status_code, "Request finished");

        Ok(RawResponse {
            url: url.to_string(),
            status: response.status_code,
            body: response.into_bytes()
        })
    }
}
