use serde::{Deserialize, Serialize};

/// A savings or credit product offered by a sacco.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceProduct {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub interest_rate: Option<f64>,
    pub min_amount: Option<f64>,
}
