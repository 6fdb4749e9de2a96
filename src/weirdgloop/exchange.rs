use indexmap::IndexMap;
use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::config::ExchangeRules;
use crate::error::QueryError;
use crate::network::{Client, Transport, Params, ParamRules, Endpoint, ContentShape};
use crate::query::Query;

/// Item id or name to the list of its price points
///
/// Keys are in the same order the server returned them, which is the order
/// of the pipe-separated ids or names of a `latest` query
pub type ExchangeContent = IndexMap<String, Vec<Value>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExchangeGame {
    Rs,
    RsFsw2022,

    #[default]
    Osrs,

    OsrsFsw2022
}

impl ExchangeGame {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rs          => "rs",
            Self::RsFsw2022   => "rs-fsw-2022",
            Self::Osrs        => "osrs",
            Self::OsrsFsw2022 => "osrs-fsw-2022"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExchangeEndpoint {
    /// Latest price point. Multiple ids or names can be separated with pipes, like `2|6`
    Latest,

    /// Whole history of a single item
    All,

    /// Last 90 days of a single item
    Last90d,

    /// Sample of the history of a single item
    Sample
}

impl ExchangeEndpoint {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest  => "latest",
            Self::All     => "all",
            Self::Last90d => "last90d",
            Self::Sample  => "sample"
        }
    }
}

impl ExchangeRules {
    pub fn param_rules(&self) -> ParamRules {
        match self {
            Self::Exclusive => ParamRules {
                required_any: &["id", "name"],
                conflicts: &[["id", "name"]]
            },

            Self::Permissive => ParamRules::NONE
        }
    }
}

/// Query exchange history
///
/// `params` must contain either `id` (item id or a trade index like *GE Common Trade Index*)
/// or `name` (exact Grand Exchange item name). Whether giving both is rejected depends on
/// the client's [`ExchangeRules`]
///
/// ```no_run
/// use rswiki_api::prelude::*;
///
/// let client = Client::new(ClientConfig::new("My Project - me@example.com"));
///
/// let query = weirdgloop::exchange::request(
///     &client,
///     ExchangeGame::Osrs,
///     ExchangeEndpoint::All,
///     &Params::new().with("name", "Coal")
/// ).unwrap();
///
/// assert_eq!(query.content["Coal"][0]["id"], "453");
/// ```
#[tracing::instrument(level = "debug", skip(client))]
pub fn request<T: Transport>(client: &Client<T>, game: ExchangeGame, endpoint: ExchangeEndpoint, params: &Params) -> Result<Query<ExchangeContent>, QueryError> {
    tracing::debug!("Fetching exchange history");

    let descriptor = Endpoint::new(endpoint.as_str(), ContentShape::Detect)
        .with_params(&["id", "name"])
        .with_rules(client.config().exchange_rules.param_rules());

    let base = super::base_url(client, &format!("exchange/history/{}/", game.as_str()));

    let query = client.request(&base, &descriptor, params)?;

    if !query.is_sent() {
        return Ok(query.map_content(|_| ExchangeContent::new()));
    }

    let content = normalize(endpoint, &query.json)?;

    Ok(query.map_content(|_| content))
}

/// Convert exchange response to the item to points list format
///
/// `latest` responds with a single point per item, it's wrapped into
/// a one-element list so all the endpoints share the same content format
pub fn normalize(endpoint: ExchangeEndpoint, json: &Value) -> Result<ExchangeContent, QueryError> {
    let Some(object) = json.as_object() else {
        return Err(QueryError::malformed("exchange response is not a json object"));
    };

    if let Some(Value::String(error)) = object.get("error") {
        return Err(QueryError::malformed(format!("exchange API responded with error: {error}")));
    }

    object.iter()
        .map(|(key, value)| {
            let points = match (endpoint, value) {
                (ExchangeEndpoint::Latest, Value::Object(_)) => vec![value.clone()],
                (_, Value::Array(points)) => points.clone(),

                _ => return Err(QueryError::malformed(format!("unexpected exchange points format for `{key}`")))
            };

            Ok((key.clone(), points))
        })
        .collect()
}
