use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::session::Session;
use crate::domain::models::ticket::{NewTicket, Status, Ticket};

#[async_trait]
pub trait TicketService: 'static + Sync + Send {
    async fn create(&self, new_ticket: NewTicket, author: &Session) -> AppResult<Ticket>;
    /// Tickets visible to `user`, newest first.
    async fn list(&self, user: &Session) -> AppResult<Vec<Ticket>>;
    async fn get(&self, id: &str, user: &Session) -> AppResult<Ticket>;
    async fn add_response(&self, id: &str, text: &str, author: &Session) -> AppResult<Ticket>;
    async fn update_status(&self, id: &str, status: Status, actor: &Session)
    -> AppResult<Ticket>;
}
