use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::account::{Account, Role};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAccount {
    name: String,
    email: String,
    password: String,
    role: Role,
    created_at: DateTime<Utc>,
}

impl From<Account> for StoredAccount {
    fn from(acc: Account) -> Self {
        StoredAccount {
            name: acc.name,
            email: acc.email,
            password: acc.password,
            role: acc.role,
            created_at: acc.created_at,
        }
    }
}

impl From<StoredAccount> for Account {
    fn from(acc: StoredAccount) -> Self {
        Account {
            name: acc.name,
            email: acc.email,
            password: acc.password,
            role: acc.role,
            created_at: acc.created_at,
        }
    }
}
