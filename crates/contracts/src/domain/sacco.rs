use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A savings and credit cooperative as listed by `/accounts/saccos/`.
///
/// The API is loose about which fields it includes per row, so everything
/// beyond the identifier is optional or defaulted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sacco {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub member_count: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}
