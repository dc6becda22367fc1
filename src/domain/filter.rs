//! In-memory views over an already loaded ticket list.
//!
//! Nothing here touches the store: callers load the tickets visible to the
//! session first and derive the view from that full set on every request.

use crate::domain::models::ticket::{Status, Ticket};

#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    /// `None` keeps every status.
    pub status: Option<Status>,
    pub search: String,
}

impl TicketFilter {
    pub fn matches(&self, ticket: &Ticket) -> bool {
        let status_matches = self.status.is_none_or(|status| ticket.status == status);

        let term = self.search.to_lowercase();
        let search_matches = ticket.title.to_lowercase().contains(&term)
            || ticket.description.to_lowercase().contains(&term);

        status_matches && search_matches
    }

    pub fn apply(&self, tickets: Vec<Ticket>) -> Vec<Ticket> {
        tickets
            .into_iter()
            .filter(|ticket| self.matches(ticket))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusSummary {
    pub fn of(tickets: &[Ticket]) -> Self {
        let mut summary = StatusSummary {
            total: tickets.len(),
            ..Default::default()
        };

        for ticket in tickets {
            match ticket.status {
                Status::Open => summary.open += 1,
                Status::InProgress => summary.in_progress += 1,
                Status::Resolved => summary.resolved += 1,
            }
        }

        summary
    }
}
