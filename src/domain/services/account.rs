use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, Registration};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn register(&self, registration: Registration) -> AppResult<Account>;
}
