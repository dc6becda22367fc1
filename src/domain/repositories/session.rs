use async_trait::async_trait;

use crate::domain::models::session::Session;

use super::repository::RepositoryResult;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn save(&self, session: &Session) -> RepositoryResult<()>;
    async fn load(&self) -> RepositoryResult<Option<Session>>;
    async fn clear(&self) -> RepositoryResult<()>;
}
