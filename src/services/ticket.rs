use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use validator::Validate;

use crate::domain::{
    error::{AppError, AppResult},
    models::{
        session::Session,
        ticket::{NewTicket, Response, Status, Ticket},
    },
    repositories::ticket::TicketRepository,
    services::ticket::TicketService,
};

pub struct TicketServiceImpl {
    repository: Arc<dyn TicketRepository>,
}

impl TicketServiceImpl {
    pub fn new(repository: Arc<dyn TicketRepository>) -> Self {
        Self { repository }
    }

    /// Stores `ticket` under `ticket_<millis>`, moving forward one millisecond
    /// at a time while the id is taken.
    async fn insert_with_next_id(&self, mut ticket: Ticket) -> AppResult<Ticket> {
        let mut millis = ticket.created_at.timestamp_millis();

        loop {
            ticket.id = format!("ticket_{millis}");

            if self.repository.insert(&ticket).await? {
                return Ok(ticket);
            }

            millis += 1;
        }
    }

    async fn find(&self, id: &str) -> AppResult<Ticket> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket not found"))
    }

    async fn find_visible(&self, id: &str, user: &Session) -> AppResult<Ticket> {
        let ticket = self.find(id).await?;

        if !can_access(&ticket, user) {
            return Err(AppError::Forbidden(
                "Only the ticket author or a technician can access this ticket",
            ));
        }

        Ok(ticket)
    }
}

fn can_access(ticket: &Ticket, user: &Session) -> bool {
    user.is_technician() || ticket.is_owned_by(&user.email)
}

fn next_response_id(ticket: &Ticket, now: DateTime<Utc>) -> String {
    let mut millis = now.timestamp_millis();

    loop {
        let id = format!("response_{millis}");

        if ticket.responses.iter().all(|response| response.id != id) {
            return id;
        }

        millis += 1;
    }
}

#[async_trait]
impl TicketService for TicketServiceImpl {
    #[tracing::instrument(skip_all, fields(author = %author.email))]
    async fn create(&self, new_ticket: NewTicket, author: &Session) -> AppResult<Ticket> {
        new_ticket.validate()?;

        let now = Utc::now();

        let ticket = Ticket {
            id: String::new(),
            title: new_ticket.title,
            description: new_ticket.description,
            priority: new_ticket.priority,
            category: new_ticket.category,
            status: Status::Open,
            created_by: author.email.to_owned(),
            created_by_name: author.name.to_owned(),
            created_at: now,
            updated_at: now,
            responses: vec![],
        };

        let ticket = self.insert_with_next_id(ticket).await?;

        tracing::info!(ticket = %ticket.id, "ticket created");

        Ok(ticket)
    }

    async fn list(&self, user: &Session) -> AppResult<Vec<Ticket>> {
        let mut tickets: Vec<Ticket> = self
            .repository
            .list()
            .await?
            .into_iter()
            .filter(|ticket| can_access(ticket, user))
            .collect();

        tickets.sort_by_key(|ticket| Reverse((ticket.created_at, ticket.id.clone())));

        Ok(tickets)
    }

    async fn get(&self, id: &str, user: &Session) -> AppResult<Ticket> {
        self.find_visible(id, user).await
    }

    #[tracing::instrument(skip(self, text, author), fields(author = %author.email))]
    async fn add_response(&self, id: &str, text: &str, author: &Session) -> AppResult<Ticket> {
        let mut ticket = self.find_visible(id, author).await?;

        if text.trim().is_empty() {
            return Ok(ticket);
        }

        let now = Utc::now();

        ticket.responses.push(Response {
            id: next_response_id(&ticket, now),
            text: text.to_owned(),
            author: author.name.to_owned(),
            author_email: author.email.to_owned(),
            is_technician: author.is_technician(),
            created_at: now,
        });
        ticket.updated_at = now;

        let ticket = self.repository.update(ticket).await?;

        tracing::info!(responses = ticket.responses.len(), "response added");

        Ok(ticket)
    }

    #[tracing::instrument(skip(self, actor), fields(actor = %actor.email))]
    async fn update_status(
        &self,
        id: &str,
        status: Status,
        actor: &Session,
    ) -> AppResult<Ticket> {
        if !actor.is_technician() {
            return Err(AppError::Forbidden("Only technicians can change the status"));
        }

        let mut ticket = self.find(id).await?;

        ticket.status = status;
        ticket.updated_at = Utc::now();

        let ticket = self.repository.update(ticket).await?;

        tracing::info!("status updated");

        Ok(ticket)
    }
}
