use async_trait::async_trait;

use crate::domain::models::ticket::Ticket;

use super::repository::RepositoryResult;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn list(&self) -> RepositoryResult<Vec<Ticket>>;
    async fn get(&self, id: &str) -> RepositoryResult<Option<Ticket>>;
    /// `false` when the id is already taken.
    async fn insert(&self, ticket: &Ticket) -> RepositoryResult<bool>;
    async fn update(&self, ticket: Ticket) -> RepositoryResult<Ticket>;
}
