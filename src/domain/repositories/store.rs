use async_trait::async_trait;

use super::repository::RepositoryResult;

pub const SESSION_KEY: &str = "current_user";
pub const ACCOUNT_PREFIX: &str = "user:";
pub const TICKET_PREFIX: &str = "ticket:";

pub fn account_key(email: &str) -> String {
    format!("{ACCOUNT_PREFIX}{email}")
}

pub fn ticket_key(id: &str) -> String {
    format!("{TICKET_PREFIX}{id}")
}

/// String-to-string storage. Values are serialized records.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>>;
    async fn set(&self, key: &str, value: String) -> RepositoryResult<()>;
    /// Writes `value` only when `key` is free. Returns `false`, leaving the
    /// stored value untouched, when the key is already taken.
    async fn insert_if_absent(&self, key: &str, value: String) -> RepositoryResult<bool>;
    async fn delete(&self, key: &str) -> RepositoryResult<()>;
    /// Keys starting with `prefix`, in ascending order.
    async fn list(&self, prefix: &str) -> RepositoryResult<Vec<String>>;
}
