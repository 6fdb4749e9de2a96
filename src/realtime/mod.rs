//! Real-time Grand Exchange prices API
//!
//! `GET {prices_host}/api/v1/{game}/{route}`
//!
//! It's best to query all the items at once and pick the ones you need
//! from the content instead of sending a request per item

use serde::{Serialize, Deserialize};

use crate::error::QueryError;
use crate::network::{Client, Transport, Params, Endpoint, ContentShape};
use crate::query::Query;

pub mod schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Game {
    #[default]
    Osrs,

    /// Deadman mode
    Dmm,

    /// Fresh start worlds
    Fsw
}

impl Game {
    #[inline]
    pub fn list() -> &'static [Game] {
        &[Self::Osrs, Self::Dmm, Self::Fsw]
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Osrs => "osrs",
            Self::Dmm  => "dmm",
            Self::Fsw  => "fsw"
        }
    }
}

/// Period average prices are calculated over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AverageRoute {
    FiveMinutes,
    OneHour
}

impl AverageRoute {
    #[inline]
    pub fn endpoint(&self) -> &'static Endpoint {
        match self {
            Self::FiveMinutes => &FIVE_MINUTES,
            Self::OneHour     => &ONE_HOUR
        }
    }
}

/// Distance between two points of a timeseries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timestep {
    FiveMinutes,
    OneHour,
    SixHours,
    OneDay
}

impl Timestep {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FiveMinutes => "5m",
            Self::OneHour     => "1h",
            Self::SixHours    => "6h",
            Self::OneDay      => "24h"
        }
    }
}

impl std::fmt::Display for Timestep {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const LATEST: Endpoint = Endpoint::new("latest", ContentShape::Envelope)
    .with_params(&["id"]);

pub const MAPPING: Endpoint = Endpoint::new("mapping", ContentShape::Array);

pub const FIVE_MINUTES: Endpoint = Endpoint::new("5m", ContentShape::Envelope)
    .with_params(&["timestamp"]);

pub const ONE_HOUR: Endpoint = Endpoint::new("1h", ContentShape::Envelope)
    .with_params(&["timestamp"]);

pub const TIMESERIES: Endpoint = Endpoint::new("timeseries", ContentShape::Envelope)
    .with_params(&["id", "timestep"]);

#[inline]
fn base_url<T: Transport>(client: &Client<T>, game: Game) -> String {
    format!("{}/api/v1/{}/", client.config().prices_host, game.as_str())
}

/// Query any real-time route with custom parameters
#[tracing::instrument(level = "debug", skip(client))]
pub fn request<T: Transport>(client: &Client<T>, game: Game, endpoint: &Endpoint, params: &Params) -> Result<Query, QueryError> {
    tracing::debug!("Fetching real-time prices API");

    client.request(&base_url(client, game), endpoint, params)
}

/// Latest instant buy and sell prices
///
/// Content is an object of item id to [`LatestPrice`](schema::LatestPrice).
/// Without `id` all the items are returned
pub fn latest<T: Transport>(client: &Client<T>, game: Game, id: Option<u32>) -> Result<Query, QueryError> {
    request(client, game, &LATEST, &Params::new().with_opt("id", id))
}

/// Items mapping. Content is an array of [`ItemMapping`](schema::ItemMapping)
///
/// ```no_run
/// use rswiki_api::prelude::*;
///
/// let client = Client::new(ClientConfig::new("My Project - me@example.com"));
/// let mapping = realtime::mapping(&client, Game::Osrs).unwrap();
///
/// let coal = mapping.content.as_array().unwrap()
///     .iter()
///     .find(|item| item["name"] == "Coal")
///     .unwrap();
///
/// assert_eq!(coal["id"], 453);
/// ```
pub fn mapping<T: Transport>(client: &Client<T>, game: Game) -> Result<Query, QueryError> {
    request(client, game, &MAPPING, &Params::new())
}

/// Average prices over 5 minutes or 1 hour period
///
/// Content is an object of item id to [`AveragePrice`](schema::AveragePrice).
/// `timestamp` is the UNIX timestamp the period starts at; latest period is used without it
pub fn average<T: Transport>(client: &Client<T>, game: Game, route: AverageRoute, timestamp: Option<u64>) -> Result<Query, QueryError> {
    request(client, game, route.endpoint(), &Params::new().with_opt("timestamp", timestamp))
}

/// Prices history of a single item
///
/// Content is an array of [`TimeseriesPoint`](schema::TimeseriesPoint)
pub fn timeseries<T: Transport>(client: &Client<T>, game: Game, id: u32, timestep: Timestep) -> Result<Query, QueryError> {
    let params = Params::new()
        .with("id", id)
        .with("timestep", timestep);

    request(client, game, &TIMESERIES, &params)
}
