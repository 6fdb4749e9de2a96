use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{QueryError, ValidationError};
use crate::network::RawResponse;

/// Result of a single query
///
/// `content` is the reshaped part of the response callers usually want,
/// `json` is the whole parsed response
#[derive(Debug, Clone, PartialEq)]
pub struct Query<C = Value> {
    /// Requested URL. `None` if the query was rejected before sending
    pub url: Option<String>,

    /// Raw server response. `None` if the query was rejected before sending
    pub response: Option<RawResponse>,

    /// Parsed response. `Value::Null` if the query was rejected before sending
    pub json: Value,

    pub content: C,

    /// Why the query wasn't sent
    pub rejected: Option<ValidationError>
}

impl<C: Default> Query<C> {
    /// Query which was never sent because its parameters didn't pass validation
    #[inline]
    pub fn rejected(reason: ValidationError) -> Self {
        Self {
            url: None,
            response: None,
            json: Value::Null,
            content: C::default(),
            rejected: Some(reason)
        }
    }
}

impl<C> Query<C> {
    #[inline]
    pub fn new(response: RawResponse, json: Value, content: C) -> Self {
        Self {
            url: Some(response.url.clone()),
            response: Some(response),
            json,
            content,
            rejected: None
        }
    }

    /// Whether the request was actually sent
    #[inline]
    pub fn is_sent(&self) -> bool {
        self.response.is_some()
    }

    /// HTTP status of the response if the request was sent
    #[inline]
    pub fn status(&self) -> Option<i32> {
        self.response.as_ref().map(|response| response.status)
    }

    /// Replace content keeping the rest of the query
    pub fn map_content<T>(self, map: impl FnOnce(C) -> T) -> Query<T> {
        Query {
            url: self.url,
            response: self.response,
            json: self.json,
            content: map(self.content),
            rejected: self.rejected
        }
    }
}

impl Query<Value> {
    /// Deserialize content into a typed schema
    ///
    /// ```no_run
    /// use std::collections::HashMap;
    ///
    /// use rswiki_api::prelude::*;
    ///
    /// let client = Client::new(ClientConfig::new("My Project - me@example.com"));
    /// let latest = realtime::latest(&client, Game::Osrs, Some(2)).unwrap();
    ///
    /// let prices = latest.content_as::<HashMap<String, LatestPrice>>().unwrap();
    ///
    /// println!("{:?}", prices["2"].high);
    /// ```
    pub fn content_as<T: DeserializeOwned>(&self) -> Result<T, QueryError> {
        Ok(serde_json::from_value(self.content.clone())?)
    }
}
