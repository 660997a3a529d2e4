use serde::{Deserialize, Serialize};

use super::domain::{AccountRecord, ContactRecord};
use super::errors::AccountError;
use super::status::ReturnCode;

/// Contact as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub name: String,
    pub is_active: bool,
}

impl From<&ContactRecord> for ContactResponse {
    fn from(c: &ContactRecord) -> Self {
        Self { name: c.name.clone(), is_active: c.is_active }
    }
}

/// Response envelope: either a payload with a success code, or a failure code with a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_code: Option<ReturnCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_awesome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<ContactResponse>>,
}

impl AccountResponse {
    pub fn from_account(account: &AccountRecord) -> Self {
        Self::with_flag(account, true)
    }

    pub fn with_flag(account: &AccountRecord, is_awesome: bool) -> Self {
        Self {
            return_code: Some(ReturnCode::Ok),
            name: Some(account.name.clone()),
            account_number: Some(account.account_number.clone()),
            my_field: account.my_field.clone(),
            is_awesome: Some(is_awesome),
            ..Self::default()
        }
    }

    pub fn failure(err: &AccountError) -> Self {
        Self::status(err.return_code(), err.message())
    }

    pub fn status(code: ReturnCode, message: impl Into<String>) -> Self {
        Self { return_code: Some(code), message: Some(message.into()), ..Self::default() }
    }

    /// Append contacts; repeated calls accumulate.
    pub fn add_contacts(&mut self, contacts: &[ContactRecord]) {
        self.contacts
            .get_or_insert_with(Vec::new)
            .extend(contacts.iter().map(ContactResponse::from));
    }

    pub fn is_success(&self) -> bool {
        self.return_code.map_or(false, ReturnCode::is_success)
    }
}
