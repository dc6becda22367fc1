use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::filter::{StatusSummary, TicketFilter};
use crate::domain::models::ticket::{Category, NewTicket, Priority, Response, Status, Ticket};
use crate::domain::validation::{is_description, is_title};

#[derive(Debug, Serialize, ToSchema)]
pub struct ResponseDTO {
    id: String,
    text: String,
    author: String,
    author_email: String,
    is_technician: bool,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketDTO {
    #[schema(examples("ticket_1714564800000"))]
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
    responses: Vec<ResponseDTO>,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateTicketDTO {
    #[validate(custom(function = "is_title"))]
    #[schema(examples("VPN keeps disconnecting"))]
    pub title: String,

    #[validate(custom(function = "is_description"))]
    #[schema(examples("The connection drops roughly every hour since Monday"))]
    pub description: String,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub category: Category,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateResponseDTO {
    #[schema(examples("Could you attach the VPN client logs?"))]
    pub text: String,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct UpdateStatusDTO {
    pub status: Status,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilterDTO {
    #[default]
    All,
    Open,
    InProgress,
    Resolved,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TicketFilterDTO {
    #[serde(default)]
    pub status: StatusFilterDTO,
    /// Case-insensitive text matched against title and description.
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryDTO {
    total: usize,
    open: usize,
    in_progress: usize,
    resolved: usize,
}

impl From<Response> for ResponseDTO {
    fn from(res: Response) -> Self {
        ResponseDTO {
            id: res.id,
            text: res.text,
            author: res.author,
            author_email: res.author_email,
            is_technician: res.is_technician,
            created_at: res.created_at,
        }
    }
}

impl From<Ticket> for TicketDTO {
    fn from(ticket: Ticket) -> Self {
        TicketDTO {
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

impl From<CreateTicketDTO> for NewTicket {
    fn from(dto: CreateTicketDTO) -> Self {
        NewTicket {
            title: dto.title,
            description: dto.description,
            priority: dto.priority,
            category: dto.category,
        }
    }
}

impl From<TicketFilterDTO> for TicketFilter {
    fn from(dto: TicketFilterDTO) -> Self {
        let status = match dto.status {
            StatusFilterDTO::All => None,
            StatusFilterDTO::Open => Some(Status::Open),
            StatusFilterDTO::InProgress => Some(Status::InProgress),
            StatusFilterDTO::Resolved => Some(Status::Resolved),
        };

        TicketFilter {
            status,
            search: dto.search,
        }
    }
}

impl From<StatusSummary> for SummaryDTO {
    fn from(summary: StatusSummary) -> Self {
        SummaryDTO {
            total: summary.total,
            open: summary.open,
            in_progress: summary.in_progress,
            resolved: summary.resolved,
        }
    }
}
