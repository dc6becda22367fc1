use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::Credentials;
use crate::domain::models::session::Session;

#[async_trait]
pub trait SessionService: 'static + Sync + Send {
    async fn login(&self, credentials: Credentials) -> AppResult<Session>;
    async fn logout(&self) -> AppResult<()>;
    async fn restore(&self) -> AppResult<Option<Session>>;
}
