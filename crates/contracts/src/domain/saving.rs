use serde::{Deserialize, Serialize};

/// Body of a savings movement posted to `/services/savings/`.
/// `transaction_type` is either "deposit" or "withdrawal".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingRequest {
    pub service: i64,
    pub amount: f64,
    pub transaction_type: String,
}
