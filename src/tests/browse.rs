use serde_json::{json, Map, Value};

use crate::prelude::*;
use crate::mediawiki::browse::{subject_params, parse_properties};

use super::*;

const CAKE_RESPONSE: &str = r##"{
    "query": {
        "subject": "Cake#0##",
        "data": [
            {"property": "All_Item_ID", "dataitem": [{"type": 1, "item": "1891"}]},
            {"property": "Production_JSON", "dataitem": [{"type": 2, "item": "{\"ticks\":\"\",\"members\":\"No\",\"output\":{\"cost\":137,\"name\":\"Cake\"}}"}]},
            {"property": "Uses_material", "dataitem": [{"type": 9, "item": "Cake tin#0##"}, {"type": 9, "item": "Egg#0##"}]},
            {"property": "_INST", "dataitem": [{"type": 9, "item": "Cakes#14##"}]},
            {"property": "_MDAT", "dataitem": [{"type": 6, "item": "1/2023/1/1/12/0/0/0"}]},
            {"property": "_SKEY", "dataitem": [{"type": 2, "item": "Cake"}]}
        ],
        "serializer": "SMW\\Serializers\\SemanticDataSerializer",
        "version": 2
    }
}"##;

#[test]
fn test_subject_params() {
    let params = serde_json::from_str::<Value>(&subject_params("Chocolate cake")).unwrap();

    assert_eq!(params["subject"], "Chocolate_cake");
    assert_eq!(params["ns"], 0);
    assert_eq!(params["options"]["showAll"], true);
    assert_eq!(params["options"]["valuelistlimit.out"], "30");

    assert_eq!(params.as_object().unwrap().keys().next().map(String::as_str), Some("subject"));
}

#[test]
fn test_browse_properties() {
    let client = client(MockTransport::new().ok(CAKE_RESPONSE));
    let wiki = MediaWiki::new(&client, WikiGame::Rs3);

    let query = wiki.browse_properties("Cake tin").unwrap();

    let url = query.url.clone().unwrap();

    assert!(url.starts_with("https://runescape.wiki/api.php?browse=subject&params=%7B%22subject%22%3A%22Cake_tin%22,%22ns%22%3A0,"));
    assert!(url.ends_with("&action=smwbrowse&format=json&formatversion=latest"));

    assert_eq!(query.content.keys().collect::<Vec<_>>(), [
        "All_Item_ID",
        "Production_JSON",
        "Uses_material",
        "_INST",
        "_MDAT",
        "_SKEY"
    ]);

    assert_eq!(query.content["All_Item_ID"], "1891");
    assert_eq!(query.content["Production_JSON"]["output"]["cost"], 137);
    assert_eq!(query.content["Uses_material"], json!(["Cake tin", "Egg"]));
    assert_eq!(query.content["_INST"], "Cakes");
    assert_eq!(query.content["_SKEY"], "Cake");
}

#[test]
fn test_browse_params() {
    let client = client(MockTransport::new().ok(r#"{"query": {}}"#));
    let wiki = MediaWiki::with_api_uri(&client, "http://localhost/w/api.php");

    let query = wiki.browse(&Params::new().with("browse", "property").with("params", "{}")).unwrap();

    assert_eq!(query.content, json!({ "query": {} }));
    assert_eq!(
        client.transport().urls(),
        ["http://localhost/w/api.php?browse=property&params=%7B%7D&action=smwbrowse&format=json&formatversion=latest"]
    );
}

#[test]
fn test_malformed_properties() {
    assert!(matches!(parse_properties(&json!({ "query": {} })), Err(QueryError::MalformedResponse(_))));

    let broken = json!({
        "query": {
            "data": [{ "property": "Production_JSON", "dataitem": [{ "type": 2, "item": "{ticks: ''}" }] }]
        }
    });

    assert!(matches!(parse_properties(&broken), Err(QueryError::MalformedResponse(_))));
}

#[test]
fn test_properties_without_values() {
    let json = json!({
        "query": {
            "data": [{ "property": "Uses_facility", "dataitem": [] }]
        }
    });

    assert_eq!(parse_properties(&json).unwrap()["Uses_facility"], json!([]));
}

#[test]
fn test_clean_and_dirty_properties() {
    let mut properties = Map::new();

    properties.insert(String::from("_INST"), json!("Cakes"));
    properties.insert(String::from("Is_members_only"), json!("false"));
    properties.insert(String::from("_SKEY"), json!("Cake"));

    mediawiki::clean_properties(&mut properties);

    assert_eq!(properties.keys().collect::<Vec<_>>(), ["Is_members_only", "Category", "Name"]);
    assert_eq!(properties["Category"], "Cakes");
    assert_eq!(properties["Name"], "Cake");

    mediawiki::dirty_properties(&mut properties);

    assert_eq!(properties.keys().collect::<Vec<_>>(), ["Is_members_only", "_INST", "_SKEY"]);
    assert_eq!(properties["_INST"], "Cakes");
    assert_eq!(properties["_SKEY"], "Cake");
}

#[test]
fn test_list_looking_properties_are_kept() {
    let json = json!({
        "query": {
            "data": [{ "property": "Infobox_note", "dataitem": [{ "type": 2, "item": "[citation needed]" }] }]
        }
    });

    assert_eq!(parse_properties(&json).unwrap()["Infobox_note"], "[citation needed]");
}
