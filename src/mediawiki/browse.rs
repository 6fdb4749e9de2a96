use regex::Regex;
use serde_json::{json, Map, Value};

use crate::error::QueryError;
use crate::network::{Transport, Params};
use crate::query::Query;

use super::{MediaWiki, decode_embedded};

/// Built-in Semantic MediaWiki properties and their readable names
pub const PROPERTY_LABELS: &[(&str, &str)] = &[
    ("_INST", "Category"),
    ("_MDAT", "Modification Date"),
    ("_SKEY", "Name"),
    ("_SOBJ", "Subobject")
];

lazy_static::lazy_static! {
    /// Namespace marker of serialized wiki page data items, like `Cake#0##`
    static ref DATAITEM_MARKER: Regex = Regex::new(r"#-?\d+##").unwrap();
}

fn rename_keys(properties: &mut Map<String, Value>, renames: impl Iterator<Item = (&'static str, &'static str)>) {
    for (from, to) in renames {
        if let Some(value) = properties.shift_remove(from) {
            properties.insert(to.to_string(), value);
        }
    }
}

/// Rename built-in properties (`_INST`, `_MDAT`, `_SKEY`, `_SOBJ`) to readable names
///
/// Renamed properties are moved to the end of the map
pub fn clean_properties(properties: &mut Map<String, Value>) {
    rename_keys(properties, PROPERTY_LABELS.iter().copied());
}

/// Revert [`clean_properties`]
pub fn dirty_properties(properties: &mut Map<String, Value>) {
    rename_keys(properties, PROPERTY_LABELS.iter().map(|(name, label)| (*label, *name)));
}

#[inline]
fn clean_dataitem(item: &str) -> String {
    DATAITEM_MARKER.replace_all(item, "").into_owned()
}

/// `Special:Browse` request for the given page
pub fn subject_params(subject: &str) -> String {
    json!({
        "subject": subject.replace(' ', "_"),
        "ns": 0,
        "iw": "",
        "subobject": "",
        "options": {
            "dir": null,
            "lang": "en-gb",
            "group": null,
            "printable": null,
            "offset": null,
            "including": false,
            "showInverse": false,
            "showAll": true,
            "showGroup": true,
            "showSort": false,
            "api": true,
            "valuelistlimit.out": "30",
            "valuelistlimit.in": "20"
        }
    }).to_string()
}

/// Convert `smwbrowse` subject response to the property name to value map
///
/// Properties with a single data item get it as a value, others get a list.
/// Data items which hold serialized json are decoded
pub fn parse_properties(json: &Value) -> Result<Map<String, Value>, QueryError> {
    let Some(data) = json.get("query").and_then(|query| query.get("data")).and_then(Value::as_array) else {
        return Err(QueryError::malformed("smwbrowse response has no `query.data` list"));
    };

    let mut properties = Map::new();

    for property in data {
        let Some(name) = property.get("property").and_then(Value::as_str) else {
            return Err(QueryError::malformed("smwbrowse property has no name"));
        };

        let Some(dataitems) = property.get("dataitem").and_then(Value::as_array) else {
            return Err(QueryError::malformed(format!("property `{name}` has no data items")));
        };

        let mut values = dataitems.iter()
            .map(|dataitem| match dataitem.get("item").and_then(Value::as_str) {
                Some(item) => decode_embedded(&clean_dataitem(item)),
                None => Err(QueryError::malformed(format!("data item of `{name}` has no value")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let value = if values.len() == 1 {
            values.remove(0)
        } else {
            Value::Array(values)
        };

        properties.insert(name.to_string(), value);
    }

    Ok(properties)
}

impl<T: Transport> MediaWiki<'_, T> {
    /// Send `smwbrowse` query with custom parameters
    ///
    /// Content is the whole parsed response. Use [`MediaWiki::browse_properties`]
    /// to get properties of a page
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn browse(&self, params: &Params) -> Result<Query, QueryError> {
        let mut params = params.clone();

        params.set("action", "smwbrowse");
        params.set("format", "json");
        params.set("formatversion", "latest");

        self.query(&params)
    }

    /// Get property values of a page
    ///
    /// ```no_run
    /// use rswiki_api::prelude::*;
    ///
    /// let client = Client::new(ClientConfig::new("My Project - me@example.com"));
    /// let wiki = MediaWiki::new(&client, WikiGame::Osrs);
    ///
    /// let mut query = wiki.browse_properties("Cake").unwrap();
    ///
    /// assert!(query.content.contains_key("_SKEY"));
    ///
    /// mediawiki::clean_properties(&mut query.content);
    ///
    /// assert!(query.content.contains_key("Name"));
    /// ```
    pub fn browse_properties(&self, subject: &str) -> Result<Query<Map<String, Value>>, QueryError> {
        let params = Params::new()
            .with("browse", "subject")
            .with("params", subject_params(subject));

        let query = self.browse(&params)?;
        let properties = parse_properties(&query.json)?;

        Ok(query.map_content(|_| properties))
    }
}
