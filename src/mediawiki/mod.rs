//! RuneScape Wiki MediaWiki API with Semantic MediaWiki extensions

use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::consts::{OSRS_WIKI_HOST, RS3_WIKI_HOST};
use crate::error::QueryError;
use crate::network::{Client, Transport, Params, MinreqTransport};
use crate::query::Query;

pub mod ask;
pub mod browse;
pub mod schema;

pub use ask::AskContent;
pub use browse::{clean_properties, dirty_properties, PROPERTY_LABELS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WikiGame {
    #[default]
    Osrs,
    Rs3
}

impl WikiGame {
    #[inline]
    pub fn host(&self) -> &'static str {
        match self {
            Self::Osrs => OSRS_WIKI_HOST,
            Self::Rs3  => RS3_WIKI_HOST
        }
    }

    #[inline]
    pub fn api_uri(&self) -> String {
        format!("{}/api.php", self.host())
    }
}

/// Wiki API bound to a client
#[derive(Debug, Clone)]
pub struct MediaWiki<'a, T: Transport = MinreqTransport> {
    client: &'a Client<T>,
    api_uri: String
}

impl<'a, T: Transport> MediaWiki<'a, T> {
    #[inline]
    pub fn new(client: &'a Client<T>, game: WikiGame) -> Self {
        Self::with_api_uri(client, game.api_uri())
    }

    /// Use wiki with custom `api.php` location
    #[inline]
    pub fn with_api_uri(client: &'a Client<T>, api_uri: impl ToString) -> Self {
        Self {
            client,
            api_uri: api_uri.to_string()
        }
    }

    #[inline]
    pub fn client(&self) -> &Client<T> {
        self.client
    }

    #[inline]
    pub fn api_uri(&self) -> &str {
        &self.api_uri
    }

    /// Send query with arbitrary parameters. Content is the whole parsed response
    ///
    /// ```no_run
    /// use rswiki_api::prelude::*;
    ///
    /// let client = Client::new(ClientConfig::new("My Project - me@example.com"));
    /// let wiki = MediaWiki::new(&client, WikiGame::Osrs);
    ///
    /// let params = Params::new()
    ///     .with("action", "query")
    ///     .with("list", "categorymembers")
    ///     .with("cmtitle", "Category:Cakes")
    ///     .with("format", "json");
    ///
    /// let query = wiki.query(&params).unwrap();
    ///
    /// println!("{:#?}", query.content["query"]["categorymembers"]);
    /// ```
    #[tracing::instrument(level = "debug", skip(self), fields(api = %self.api_uri))]
    pub fn query(&self, params: &Params) -> Result<Query, QueryError> {
        tracing::debug!("Querying wiki API");

        self.client.get(&self.api_uri, "", params)
    }
}

/// Decode property value holding serialized json
///
/// Only values looking like a json object are decoded, other strings are
/// kept as-is. Values which look like json but can't be parsed are malformed
pub fn decode_embedded(value: &str) -> Result<Value, QueryError> {
    decode_starting_with(value, &['{'])
}

/// Strictly parse `value` if its first non-whitespace char is one of `markers`
pub(crate) fn decode_starting_with(value: &str, markers: &[char]) -> Result<Value, QueryError> {
    if !value.trim_start().starts_with(markers) {
        return Ok(Value::String(value.to_string()));
    }

    serde_json::from_str(value)
        .map_err(|err| QueryError::malformed(format!("failed to decode embedded json: {err}")))
}
