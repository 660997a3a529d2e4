use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inbound lookup request as sent by callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    #[serde(default)]
    pub account_number: Option<String>,
}

impl AccountRequest {
    pub fn new(account_number: impl Into<String>) -> Self {
        Self { account_number: Some(account_number.into()) }
    }
}

/// Domain account. Identified by `account_number`; `id` is the storage key contacts point at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: Uuid,
    pub account_number: String,
    pub name: String,
    pub my_field: Option<String>,
}

/// Domain contact belonging to exactly one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub is_active: bool,
}
