use serde::{Serialize, Deserialize};

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LatestPrice {
    /// Instant buy price
    pub high: Option<u64>,
    pub highTime: Option<u64>,

    /// Instant sell price
    pub low: Option<u64>,
    pub lowTime: Option<u64>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemMapping {
    pub id: u32,
    pub name: String,
    pub examine: String,
    pub members: bool,
    pub icon: String,

    /// Grand Exchange buy limit
    pub limit: Option<u32>,

    pub value: Option<u64>,
    pub lowalch: Option<u64>,
    pub highalch: Option<u64>
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AveragePrice {
    pub avgHighPrice: Option<u64>,
    pub highPriceVolume: u64,
    pub avgLowPrice: Option<u64>,
    pub lowPriceVolume: u64
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeseriesPoint {
    pub timestamp: u64,
    pub avgHighPrice: Option<u64>,
    pub avgLowPrice: Option<u64>,
    pub highPriceVolume: u64,
    pub lowPriceVolume: u64
}
