use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionRecord {
    pub id: i64,
    pub amount: f64,
    pub transaction_type: Option<String>,
    pub provider_name: Option<String>,
    pub status: Option<String>,
    pub reference: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of a payment posted to `/payments/transactions/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub transaction_type: String,
    pub provider: i64,
    pub phone_number: Option<String>,
}
