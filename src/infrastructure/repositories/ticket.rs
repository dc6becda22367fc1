use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::ticket::Ticket;
use crate::domain::repositories::repository::RepositoryResult;
use crate::domain::repositories::store::{KeyValueStore, TICKET_PREFIX, ticket_key};
use crate::domain::repositories::ticket::TicketRepository;
use crate::infrastructure::models::ticket::StoredTicket;

pub struct TicketRepositoryImpl {
    store: Arc<dyn KeyValueStore>,
}

impl TicketRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn read(&self, key: &str) -> RepositoryResult<Option<Ticket>> {
        match self.store.get(key).await? {
            Some(record) => Ok(Some(serde_json::from_str::<StoredTicket>(&record)?.into())),
            None => Ok(None),
        }
    }

    fn record(ticket: &Ticket) -> RepositoryResult<String> {
        Ok(serde_json::to_string(&StoredTicket::from(ticket.clone()))?)
    }
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn list(&self) -> RepositoryResult<Vec<Ticket>> {
        let keys = self.store.list(TICKET_PREFIX).await?;

        let mut tickets = Vec::with_capacity(keys.len());

        // A key listed but gone by the time it is read was removed concurrently.
        for key in keys {
            if let Some(ticket) = self.read(&key).await? {
                tickets.push(ticket);
            }
        }

        Ok(tickets)
    }

    async fn get(&self, id: &str) -> RepositoryResult<Option<Ticket>> {
        self.read(&ticket_key(id)).await
    }

    async fn insert(&self, ticket: &Ticket) -> RepositoryResult<bool> {
        self.store
            .insert_if_absent(&ticket_key(&ticket.id), Self::record(ticket)?)
            .await
    }

    async fn update(&self, ticket: Ticket) -> RepositoryResult<Ticket> {
        self.store
            .set(&ticket_key(&ticket.id), Self::record(&ticket)?)
            .await?;

        Ok(ticket)
    }
}
