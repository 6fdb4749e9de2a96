use std::time::Duration;

use serde::{Serialize, Deserialize};

use crate::consts::*;

/// Which parameter rules to apply to the exchange history endpoints
///
/// The API documents `id` and `name` as alternatives, but older releases
/// of this wrapper sent both without complaining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExchangeRules {
    /// Exactly one of `id` or `name` must be given
    #[default]
    Exclusive,

    /// Parameters are sent as-is
    Permissive
}

/// Settings shared by every query made through a [`Client`](crate::network::Client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Value of the `User-Agent` header. Should look like `{Project Name} - {Contact Information}`
    pub user_agent: String,

    /// Requests timeout in seconds
    pub timeout: u64,

    pub prices_host: String,
    pub weirdgloop_host: String,

    /// Pause between pages of a recursive `ask` query
    pub ask_delay: Duration,

    pub exchange_rules: ExchangeRules
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: *crate::REQUESTS_TIMEOUT,
            prices_host: PRICES_HOST.to_string(),
            weirdgloop_host: WEIRDGLOOP_HOST.to_string(),
            ask_delay: DEFAULT_ASK_DELAY,
            exchange_rules: ExchangeRules::default()
        }
    }
}

impl ClientConfig {
    #[inline]
    pub fn new(user_agent: impl ToString) -> Self {
        Self::default().with_user_agent(user_agent)
    }

    #[inline]
    pub fn with_user_agent(self, user_agent: impl ToString) -> Self {
        Self {
            user_agent: user_agent.to_string(),
            ..self
        }
    }

    #[inline]
    pub fn with_timeout(self, timeout: u64) -> Self {
        Self {
            timeout,
            ..self
        }
    }

    #[inline]
    pub fn with_prices_host(self, host: impl ToString) -> Self {
        Self {
            prices_host: host.to_string(),
            ..self
        }
    }

    #[inline]
    pub fn with_weirdgloop_host(self, host: impl ToString) -> Self {
        Self {
            weirdgloop_host: host.to_string(),
            ..self
        }
    }

    #[inline]
    pub fn with_ask_delay(self, ask_delay: Duration) -> Self {
        Self {
            ask_delay,
            ..self
        }
    }

    #[inline]
    pub fn with_exchange_rules(self, exchange_rules: ExchangeRules) -> Self {
        Self {
            exchange_rules,
            ..self
        }
    }

    #[inline]
    pub fn uses_default_user_agent(&self) -> bool {
        self.user_agent == DEFAULT_USER_AGENT
    }
}
