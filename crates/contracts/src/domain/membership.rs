use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Relation between the logged-in member and a sacco.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Membership {
    pub id: i64,
    pub sacco: i64,
    pub sacco_name: Option<String>,
    pub role: Option<String>,
    pub is_active: bool,
    pub date_joined: Option<DateTime<Utc>>,
}
