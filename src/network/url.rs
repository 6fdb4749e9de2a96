use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::params::Params;

/// Characters left as-is in query keys and values
///
/// Besides the unreserved ones this keeps the symbols semantic `ask`
/// expressions are written with, so `[[Category:Items]]|?Production JSON`
/// is only escaped where it has to be
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'%')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'*')
    .remove(b',')
    .remove(b'/')
    .remove(b';')
    .remove(b'=')
    .remove(b'?')
    .remove(b'@');

/// Percent-encode query key or value
///
/// `&`, `=`, `#` and `%` are not escaped, so values containing them must be
/// escaped by the caller (`%26`, `%3D`, `%23`, `%25`). Otherwise `&` starts a new
/// parameter and `#` starts the URL fragment
///
/// ```
/// use rswiki_api::network::url::encode;
///
/// assert_eq!(encode("Fish & chips"), "Fish%20&%20chips");
/// assert_eq!(encode("Fish %26 chips"), "Fish%20%26%20chips");
/// ```
#[inline]
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ESCAPE).to_string()
}

/// Build request URL from the base path, route segment and query parameters
///
/// ```
/// use rswiki_api::network::{url, Params};
///
/// assert_eq!(url::build("https://host/path", "", &Params::new()), "https://host/path");
///
/// let params = Params::new().with("id", 2);
///
/// assert_eq!(url::build("https://host/api/v1/osrs/", "latest", &params), "https://host/api/v1/osrs/latest?id=2");
/// ```
pub fn build(base: &str, route: &str, params: &Params) -> String {
    let mut url = format!("{base}{route}");

    if params.is_empty() {
        return url;
    }

    let query = params.iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    url.push('?');
    url.push_str(&query);

    url
}
