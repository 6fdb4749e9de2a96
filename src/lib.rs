pub mod consts;
pub mod config;
pub mod error;
pub mod network;
pub mod query;

pub mod realtime;
pub mod weirdgloop;
pub mod mediawiki;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::consts::*;
    pub use super::config::{ClientConfig, ExchangeRules};
    pub use super::error::{QueryError, ValidationError};
    pub use super::network::{Client, Params, Transport, RawResponse};
    pub use super::query::Query;

    pub use super::realtime::{self, Game, AverageRoute, Timestep};
    pub use super::realtime::schema::*;

    pub use super::weirdgloop;
    pub use super::weirdgloop::exchange::{ExchangeGame, ExchangeEndpoint, ExchangeContent};
    pub use super::weirdgloop::runescape::RunescapeEndpoint;
    pub use super::weirdgloop::schema::*;

    pub use super::mediawiki::{self, MediaWiki, WikiGame, AskContent};
    pub use super::mediawiki::schema::*;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

lazy_static::lazy_static! {
    /// Default requests timeout in seconds
    ///
    /// Can be changed with the `RSWIKI_REQUESTS_TIMEOUT` env variable
    pub static ref REQUESTS_TIMEOUT: u64 = match std::env::var(consts::REQUESTS_TIMEOUT_ENV) {
        Ok(timeout) => timeout.parse().unwrap_or(consts::DEFAULT_REQUESTS_TIMEOUT),
        Err(_) => consts::DEFAULT_REQUESTS_TIMEOUT
    };
}
