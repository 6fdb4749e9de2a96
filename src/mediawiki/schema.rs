use serde::{Serialize, Deserialize};
use serde_json::Value;

/// Decoded `Production JSON` printout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionJson {
    #[serde(default)]
    pub ticks: Value,

    #[serde(default)]
    pub materials: Vec<Material>,

    #[serde(default)]
    pub facilities: String,

    #[serde(default)]
    pub skills: Vec<Skill>,

    /// `Yes` or `No`
    #[serde(default)]
    pub members: String,

    pub output: Output
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub quantity: String
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: String,
    pub experience: String,

    /// `Yes` or `No`
    #[serde(default)]
    pub boostable: String
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub name: String,
    pub quantity: String,

    #[serde(default)]
    pub cost: Value,

    #[serde(default)]
    pub image: String
}

/// Decoded `Exchange JSON` printout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExchangeJson {
    pub id: u32,
    pub name: String,

    /// Lua module holding the price data, like `Module:Exchange/Cake`
    pub info: String,

    #[serde(default)]
    pub historical: bool,

    #[serde(default)]
    pub isalchable: bool,

    pub value: Option<u64>,
    pub limit: Option<u32>,
    pub lowalch: Option<u64>,
    pub highalch: Option<u64>
}
