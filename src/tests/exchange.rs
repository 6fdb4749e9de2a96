use crate::prelude::*;
use crate::weirdgloop::exchange::{self, normalize};

use super::*;

const LATEST_RESPONSE: &str = r#"{
    "2": {"id": "2", "timestamp": "2023-01-01T00:00:00.000Z", "price": 152, "volume": 12000000},
    "6": {"id": "6", "timestamp": "2023-01-01T00:00:00.000Z", "price": 190000, "volume": 150}
}"#;

const HISTORY_RESPONSE: &str = r#"{
    "Coal": [
        {"id": "453", "timestamp": 1672531200000, "price": 145, "volume": 5400000},
        {"id": "453", "timestamp": 1672617600000, "price": 147, "volume": null}
    ]
}"#;

#[test]
fn test_latest_is_normalized() {
    let client = client(MockTransport::new().ok(LATEST_RESPONSE));

    let params = Params::new().with("id", "2|6");
    let query = exchange::request(&client, ExchangeGame::Osrs, ExchangeEndpoint::Latest, &params).unwrap();

    assert_eq!(query.url.as_deref(), Some("https://api.weirdgloop.org/exchange/history/osrs/latest?id=2%7C6"));

    // Keys follow the order of the requested ids
    assert_eq!(query.content.keys().collect::<Vec<_>>(), ["2", "6"]);

    assert_eq!(query.content["2"].len(), 1);
    assert_eq!(query.content["2"][0]["id"], "2");
    assert_eq!(query.content["6"][0]["price"], 190000);

    let point = serde_json::from_value::<ExchangePoint>(query.content["2"][0].clone()).unwrap();

    assert_eq!(point.timestamp, Timestamp::Date(String::from("2023-01-01T00:00:00.000Z")));
}

#[test]
fn test_history() {
    let client = client(MockTransport::new().ok(HISTORY_RESPONSE));

    let params = Params::new().with("name", "Coal");
    let query = exchange::request(&client, ExchangeGame::RsFsw2022, ExchangeEndpoint::Last90d, &params).unwrap();

    assert_eq!(query.url.as_deref(), Some("https://api.weirdgloop.org/exchange/history/rs-fsw-2022/last90d?name=Coal"));
    assert_eq!(query.content["Coal"].len(), 2);

    let points = query.content["Coal"].iter()
        .map(|point| serde_json::from_value::<ExchangePoint>(point.clone()))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(points[0], ExchangePoint {
        id: String::from("453"),
        timestamp: Timestamp::Millis(1672531200000),
        price: 145,
        volume: Some(5400000)
    });

    assert_eq!(points[1].volume, None);
}

#[test]
fn test_exclusive_rules_skip_request() {
    let client = client(MockTransport::new());

    let params = Params::new()
        .with("id", 453)
        .with("name", "Coal");

    let query = exchange::request(&client, ExchangeGame::Osrs, ExchangeEndpoint::All, &params).unwrap();

    assert!(!query.is_sent());
    assert!(query.content.is_empty());
    assert_eq!(query.json, serde_json::Value::Null);
    assert!(matches!(query.rejected, Some(ValidationError::Conflict { .. })));

    assert!(client.transport().requests().is_empty());
}

#[test]
fn test_permissive_rules_send_request() {
    let config = test_config().with_exchange_rules(ExchangeRules::Permissive);
    let client = Client::with_transport(config, MockTransport::new().ok(HISTORY_RESPONSE));

    let params = Params::new()
        .with("id", 453)
        .with("name", "Coal");

    let query = exchange::request(&client, ExchangeGame::Osrs, ExchangeEndpoint::Sample, &params).unwrap();

    assert!(query.is_sent());
    assert_eq!(client.transport().urls(), ["https://api.weirdgloop.org/exchange/history/osrs/sample?id=453&name=Coal"]);
}

#[test]
fn test_normalize_errors() {
    let error = serde_json::json!({ "success": false, "error": "Item not found" });

    assert!(matches!(normalize(ExchangeEndpoint::Latest, &error), Err(QueryError::MalformedResponse(_))));

    let history_as_latest = serde_json::json!({ "2": [{ "id": "2" }] });

    assert!(normalize(ExchangeEndpoint::All, &history_as_latest).is_ok());
    assert!(matches!(normalize(ExchangeEndpoint::All, &serde_json::json!({ "2": { "id": "2" } })), Err(QueryError::MalformedResponse(_))));
    assert!(matches!(normalize(ExchangeEndpoint::Latest, &serde_json::json!([])), Err(QueryError::MalformedResponse(_))));
}
