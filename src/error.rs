use serde::{Serialize, Deserialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryError {
    /// Request couldn't be completed (DNS, refused connection, timeout, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Query parameters violate the endpoint's rules, so the request wasn't sent
    #[error("Invalid query parameters: {0}")]
    Validation(#[from] ValidationError),

    /// Response body is not JSON or doesn't have the expected structure
    #[error("Malformed response: {0}")]
    MalformedResponse(String)
}

impl QueryError {
    #[inline]
    pub fn malformed(message: impl std::fmt::Display) -> Self {
        Self::MalformedResponse(message.to_string())
    }
}

impl From<minreq::Error> for QueryError {
    #[inline(always)]
    fn from(error: minreq::Error) -> Self {
        Self::Network(error.to_string())
    }
}

impl From<serde_json::Error> for QueryError {
    #[inline(always)]
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedResponse(error.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationError {
    /// None of the parameters from the required set were given
    ///
    /// `(required set)`
    #[error("at least one of {0:?} is required")]
    MissingRequired(Vec<String>),

    /// Both parameters of a conflicting pair were given
    #[error("`{first}` and `{second}` can't be used together")]
    Conflict {
        first: String,
        second: String
    }
}
