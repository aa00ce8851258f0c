use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Loan {
    pub id: i64,
    pub amount: f64,
    pub purpose: Option<String>,
    pub status: Option<String>,
    pub repayment_period: Option<u32>,
    pub applied_at: Option<DateTime<Utc>>,
}

/// Body of a loan application posted to `/services/loans/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanApplication {
    pub service: Option<i64>,
    pub amount: f64,
    pub purpose: String,
    pub repayment_period: Option<u32>,
}
