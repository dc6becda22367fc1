use async_trait::async_trait;

use crate::domain::models::account::Account;

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn is_account(&self, email: &str) -> RepositoryResult<bool>;
    /// `false` when an account with the same email already exists.
    async fn insert(&self, account: &Account) -> RepositoryResult<bool>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>>;
}
