use serde::{Serialize, Deserialize};

use crate::error::QueryError;
use crate::network::{Client, Transport, Params, ParamRules, Endpoint, ContentShape};
use crate::query::Query;

/// General RuneScape information endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunescapeEndpoint {
    /// Current Voice of Seren
    Vos,

    /// Voice of Seren history. Requires `page`
    VosHistory,

    /// Social media feed. Requires `page`
    Social,

    /// Latest social media post
    SocialLast,

    /// Current Travelling Merchant stock. Requires `lang`
    TmsCurrent,

    /// Next Travelling Merchant stock. Requires `lang`
    TmsNext,

    /// Search Travelling Merchant history
    TmsSearch
}

pub const VOS: Endpoint = Endpoint::new("vos", ContentShape::Detect);

pub const VOS_HISTORY: Endpoint = Endpoint::new("vos/history", ContentShape::Detect)
    .with_params(&["page"]);

pub const SOCIAL: Endpoint = Endpoint::new("social", ContentShape::Detect)
    .with_params(&["page"]);

pub const SOCIAL_LAST: Endpoint = Endpoint::new("social/last", ContentShape::Detect);

/// `lang` is one of `en`, `pt`, `id` (item ids only) or `full`
pub const TMS_CURRENT: Endpoint = Endpoint::new("tms/current", ContentShape::Detect)
    .with_params(&["lang"]);

pub const TMS_NEXT: Endpoint = Endpoint::new("tms/next", ContentShape::Detect)
    .with_params(&["lang"]);

/// `start` and `end` are date strings or `today`, `number` limits amount of results
pub const TMS_SEARCH: Endpoint = Endpoint::new("tms/search", ContentShape::Detect)
    .with_params(&["lang", "start", "end", "id", "name", "number"])
    .with_rules(TMS_SEARCH_RULES);

pub const TMS_SEARCH_RULES: ParamRules = ParamRules {
    required_any: &["start", "number", "name", "id"],
    conflicts: &[["end", "number"], ["name", "id"]]
};

impl RunescapeEndpoint {
    #[inline]
    pub fn list() -> &'static [RunescapeEndpoint] {
        &[
            Self::Vos,
            Self::VosHistory,
            Self::Social,
            Self::SocialLast,
            Self::TmsCurrent,
            Self::TmsNext,
            Self::TmsSearch
        ]
    }

    #[inline]
    pub fn endpoint(&self) -> &'static Endpoint {
        match self {
            Self::Vos        => &VOS,
            Self::VosHistory => &VOS_HISTORY,
            Self::Social     => &SOCIAL,
            Self::SocialLast => &SOCIAL_LAST,
            Self::TmsCurrent => &TMS_CURRENT,
            Self::TmsNext    => &TMS_NEXT,
            Self::TmsSearch  => &TMS_SEARCH
        }
    }
}

/// Query general game information
///
/// Content is a list or an object depending on the endpoint and `lang`
///
/// For `tms/search` parameters are checked before sending: one of `start`, `number`,
/// `name` or `id` is required, and neither `end` + `number` nor `name` + `id` can be
/// used together. Query with wrong parameters is not sent, see [`Query::is_sent`]
///
/// ```no_run
/// use rswiki_api::prelude::*;
///
/// let client = Client::new(ClientConfig::new("My Project - me@example.com"));
///
/// let params = Params::new()
///     .with("lang", "full")
///     .with("start", "2022-01-01")
///     .with("end", "2022-01-07")
///     .with("id", "42274");
///
/// let query = weirdgloop::runescape::request(&client, RunescapeEndpoint::TmsSearch, &params).unwrap();
///
/// assert_eq!(query.content[0]["items"][0]["id"], "42274");
/// ```
#[tracing::instrument(level = "debug", skip(client))]
pub fn request<T: Transport>(client: &Client<T>, endpoint: RunescapeEndpoint, params: &Params) -> Result<Query, QueryError> {
    tracing::debug!("Fetching RuneScape information");

    client.request(&super::base_url(client, "runescape/"), endpoint.endpoint(), params)
}
