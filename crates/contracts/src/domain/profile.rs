use serde::{Deserialize, Serialize};

/// Member profile, both as returned by GET `/accounts/profiles/` and as the
/// body of the create/update calls. `id` is absent until the profile exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub id_number: Option<String>,
    pub address: Option<String>,
}
