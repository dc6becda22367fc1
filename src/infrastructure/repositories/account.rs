use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::account::Account;
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::domain::repositories::store::{KeyValueStore, account_key};
use crate::infrastructure::models::account::StoredAccount;

pub struct AccountRepositoryImpl {
    store: Arc<dyn KeyValueStore>,
}

impl AccountRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn is_account(&self, email: &str) -> RepositoryResult<bool> {
        Ok(self.store.get(&account_key(email)).await?.is_some())
    }

    async fn insert(&self, account: &Account) -> RepositoryResult<bool> {
        let record = serde_json::to_string(&StoredAccount::from(account.clone()))?;

        self.store
            .insert_if_absent(&account_key(&account.email), record)
            .await
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>> {
        match self.store.get(&account_key(email)).await? {
            Some(record) => Ok(Some(
                serde_json::from_str::<StoredAccount>(&record)?.into(),
            )),
            None => Ok(None),
        }
    }
}
