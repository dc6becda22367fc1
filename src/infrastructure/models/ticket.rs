use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::ticket::{Category, Priority, Response, Status, Ticket};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResponse {
    id: String,
    text: String,
    author: String,
    author_email: String,
    is_technician: bool,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTicket {
    id: String,
    title: String,
    description: String,
    priority: Priority,
    category: Category,
    status: Status,
    created_by: String,
    created_by_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    responses: Vec<StoredResponse>,
}

impl From<Response> for StoredResponse {
    fn from(res: Response) -> Self {
        StoredResponse {
            id: res.id,
            text: res.text,
            author: res.author,
            author_email: res.author_email,
            is_technician: res.is_technician,
            created_at: res.created_at,
        }
    }
}

impl From<StoredResponse> for Response {
    fn from(res: StoredResponse) -> Self {
        Response {
            id: res.id,
            text: res.text,
            author: res.author,
            author_email: res.author_email,
            is_technician: res.is_technician,
            created_at: res.created_at,
        }
    }
}

impl From<Ticket> for StoredTicket {
    fn from(ticket: Ticket) -> Self {
        StoredTicket {
            id: ticket.id,
            title: ticket.title,
            description: ticket.description,
            priority: ticket.priority,
            category: ticket.category,
            status: ticket.status,
            created_by: ticket.created_by,
            created_by_name: ticket.created_by_name,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
            responses: ticket.responses.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<StoredTicket> for Ticket {
    fn from(ticket: StoredTicket) -> Self {
        Ticket {
            id: ticket.id,
            title: ticket.title,
            description: ticket.description,
            priority: ticket.priority,
            category: ticket.category,
            status: ticket.status,
            created_by: ticket.created_by,
            created_by_name: ticket.created_by_name,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
            responses: ticket.responses.into_iter().map(Into::into).collect(),
        }
    }
}
