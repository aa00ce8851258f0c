use serde::{Deserialize, Serialize};

/// Mobile-money or bank channel listed by `/payments/providers/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentProvider {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
}
