use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::validation::{is_description, is_title};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Technical,
    Billing,
    General,
}

/// Any status may be set from any other; there is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Open,
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub id: String,
    pub text: String,
    pub author: String,
    pub author_email: String,
    pub is_technician: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: Category,
    pub status: Status,
    pub created_by: String,
    pub created_by_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub responses: Vec<Response>,
}

impl Ticket {
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.created_by == email
    }
}

#[derive(Debug, Clone, Validate)]
pub struct NewTicket {
    #[validate(custom(function = "is_title"))]
    pub title: String,

    #[validate(custom(function = "is_description"))]
    pub description: String,

    pub priority: Priority,
    pub category: Category,
}
