use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExchangePoint {
    /// Item id or trade index name
    pub id: String,

    pub timestamp: Timestamp,

    pub price: u64,
    pub volume: Option<u64>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerchantItem {
    pub id: String,
    pub en: Option<String>,
    pub pt: Option<String>
}

/// `latest` responds with ISO 8601 dates, history endpoints with UNIX timestamps in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(u64),
    Date(String)
}
