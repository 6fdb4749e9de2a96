use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::QueryError;
use crate::network::{Transport, Params};
use crate::query::Query;

use super::{MediaWiki, decode_starting_with};

/// Page or item name to the decoded printout values
pub type AskContent = IndexMap<String, Vec<Value>>;

/// Key the server uses to point at the next page of results
pub const CONTINUE_OFFSET_KEY: &str = "query-continue-offset";

/// Decode printout value holding serialized json
///
/// Strings looking like a json object or list are strictly parsed, failing
/// with `MalformedResponse` if they can't be. Other strings are kept as-is
#[inline]
pub fn decode_printout(value: &str) -> Result<Value, QueryError> {
    decode_starting_with(value, &['{', '['])
}

#[inline]
fn clean_condition(condition: &str) -> String {
    condition.replace(['[', ']'], "")
}

#[inline]
fn clean_printout(printout: &str) -> String {
    printout.replace(['?', '|'], "")
}

/// Build `ask` query expression
///
/// ```
/// use rswiki_api::mediawiki::ask::query_expression;
///
/// assert_eq!(
///     query_expression(&["Category:Items", "Production JSON::+"], &["Production JSON"], Some("50")),
///     "[[Category:Items]][[Production JSON::+]]|?Production JSON|offset=50"
/// );
/// ```
pub fn query_expression(conditions: &[&str], printouts: &[&str], offset: Option<&str>) -> String {
    let mut query = conditions.iter()
        .map(|condition| format!("[[{}]]", clean_condition(condition)))
        .collect::<String>();

    for printout in printouts {
        query.push_str("|?");
        query.push_str(&clean_printout(printout));
    }

    if let Some(offset) = offset {
        query.push_str("|offset=");
        query.push_str(offset);
    }

    query
}

/// Get offset of the next results page if there's one
pub fn continue_offset(json: &Value) -> Option<String> {
    match json.get(CONTINUE_OFFSET_KEY)? {
        Value::Number(offset) => Some(offset.to_string()),
        Value::String(offset) => Some(offset.clone()),

        _ => None
    }
}

/// Append printout values of a single results page to the content
///
/// Results already present in the content keep their values, new ones are appended after them
pub fn collect_page(json: &Value, printouts: &[&str], content: &mut AskContent) -> Result<(), QueryError> {
    let Some(results) = json.get("query").and_then(|query| query.get("results")) else {
        return Err(QueryError::malformed("ask response has no `query.results`"));
    };

    let results = match results {
        Value::Object(results) => results,

        // Empty results are serialized as an empty list
        Value::Array(results) if results.is_empty() => return Ok(()),

        _ => return Err(QueryError::malformed("`query.results` is not an object"))
    };

    for (name, result) in results {
        let values = content.entry(name.clone()).or_default();

        for printout in printouts {
            let printout = clean_printout(printout);

            let Some(printout_values) = result.get("printouts").and_then(|printouts| printouts.get(&printout)) else {
                return Err(QueryError::malformed(format!("result `{name}` has no `{printout}` printout")));
            };

            let Some(printout_values) = printout_values.as_array() else {
                return Err(QueryError::malformed(format!("`{printout}` printout of `{name}` is not a list")));
            };

            for value in printout_values {
                values.push(match value {
                    Value::String(value) => decode_printout(value)?,
                    value => value.clone()
                });
            }
        }
    }

    Ok(())
}

/// Deserialize decoded printout values into a typed schema
pub fn parse_content<T: DeserializeOwned>(content: &AskContent) -> Result<IndexMap<String, Vec<T>>, QueryError> {
    content.iter()
        .map(|(name, values)| {
            let values = values.iter()
                .map(|value| serde_json::from_value(value.clone()))
                .collect::<Result<Vec<T>, _>>()?;

            Ok((name.clone(), values))
        })
        .collect()
}

impl<T: Transport> MediaWiki<'_, T> {
    /// Send single `ask` query
    ///
    /// Content is the whole parsed response since printouts can have any format.
    /// Use [`MediaWiki::ask_content`] to get the decoded printout values
    ///
    /// ```no_run
    /// use rswiki_api::prelude::*;
    ///
    /// let client = Client::new(ClientConfig::new("My Project - me@example.com"));
    /// let wiki = MediaWiki::new(&client, WikiGame::Osrs);
    ///
    /// let query = wiki.ask(&["Category:Items", "Production JSON::+"], &["Production JSON"], None).unwrap();
    ///
    /// println!("{}", query.json["query"]["results"]["Abyssal bludgeon"]["printouts"]["Production JSON"][0]);
    /// ```
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn ask(&self, conditions: &[&str], printouts: &[&str], offset: Option<&str>) -> Result<Query, QueryError> {
        let params = Params::new()
            .with("action", "ask")
            .with("format", "json")
            .with("query", query_expression(conditions, printouts, offset));

        self.query(&params)
    }

    /// Collect printout values of an `ask` query
    ///
    /// With `get_all` the next pages are requested while the server returns
    /// a continuation offset. Pages are requested one by one with the configured
    /// `ask_delay` between them, so querying lots of results takes a while
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn ask_content(&self, conditions: &[&str], printouts: &[&str], get_all: bool) -> Result<AskContent, QueryError> {
        let mut content = AskContent::new();
        let mut offset: Option<String> = None;

        loop {
            let page = self.ask(conditions, printouts, offset.as_deref())?;

            collect_page(&page.json, printouts, &mut content)?;

            offset = continue_offset(&page.json);

            match &offset {
                Some(next) if get_all => {
                    tracing::trace!(offset = %next, "Requesting next results page");

                    let delay = self.client().config().ask_delay;

                    if !delay.is_zero() {
                        std::thread::sleep(delay);
                    }
                }

                _ => break
            }
        }

        tracing::debug!(results = content.len(), "Ask query finished");

        Ok(content)
    }

    /// Get production information of an item, a category like `Category:Cakes`,
    /// or every item with a production json if `item` is `None`
    ///
    /// Values are [`ProductionJson`](super::schema::ProductionJson) objects
    ///
    /// ```no_run
    /// use rswiki_api::prelude::*;
    ///
    /// let client = Client::new(ClientConfig::new("My Project - me@example.com"));
    /// let wiki = MediaWiki::new(&client, WikiGame::Osrs);
    ///
    /// let content = wiki.ask_production(Some("Cake"), false).unwrap();
    ///
    /// assert_eq!(content["Cake"][0]["skills"][0]["name"], "Cooking");
    /// ```
    pub fn ask_production(&self, item: Option<&str>, get_all: bool) -> Result<AskContent, QueryError> {
        let conditions = match item {
            Some(item) => vec![item, "Production JSON::+"],
            None => vec!["Production JSON::+"]
        };

        self.ask_content(&conditions, &["Production JSON"], get_all)
    }

    /// Get exchange information of an item, or of every item if `item` is `None`
    ///
    /// Results are keyed by the exchange page name like `Exchange:Cake`.
    /// Categories can't be used here since exchange pages don't belong to item categories.
    /// Values are [`ExchangeJson`](super::schema::ExchangeJson) objects
    pub fn ask_exchange(&self, item: Option<&str>, get_all: bool) -> Result<AskContent, QueryError> {
        let page = item.map(|item| format!("Exchange:{item}"));

        let conditions = match &page {
            Some(page) => vec![page.as_str(), "Exchange JSON::+"],
            None => vec!["Exchange JSON::+"]
        };

        self.ask_content(&conditions, &["Exchange JSON"], get_all)
    }
}
