use std::time::Duration;

/// User agent used when the caller doesn't configure one
///
/// Sending it is allowed, but the wiki admins ask every project to identify itself,
/// so a warning is logged whenever a client is built with this value
pub const DEFAULT_USER_AGENT: &str = "RS Wiki API Rust Wrapper - Default";

/// Host of the real-time prices API
pub const PRICES_HOST: &str = "https://prices.runescape.wiki";

/// Host of the Weird Gloop API (exchange history and general game info)
pub const WEIRDGLOOP_HOST: &str = "https://api.weirdgloop.org";

pub const OSRS_WIKI_HOST: &str = "https://oldschool.runescape.wiki";
pub const RS3_WIKI_HOST: &str = "https://runescape.wiki";

/// Default requests timeout in seconds
pub const DEFAULT_REQUESTS_TIMEOUT: u64 = 8;

/// Delay between two pages of a recursive `ask` query
pub const DEFAULT_ASK_DELAY: Duration = Duration::from_secs(1);

/// Name of the env variable which overrides `DEFAULT_REQUESTS_TIMEOUT`
pub const REQUESTS_TIMEOUT_ENV: &str = "RSWIKI_REQUESTS_TIMEOUT";
