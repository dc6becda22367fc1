use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::validation::{is_email, is_name, is_password};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Client,
    Technician,
}

impl Role {
    pub fn is_technician(self) -> bool {
        matches!(self, Role::Technician)
    }
}

/// A registered user. `password` is an argon2 PHC string, never the clear text.
#[derive(Debug, Clone)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Validate)]
pub struct Registration {
    #[validate(custom(function = "is_name"))]
    pub name: String,

    #[validate(custom(function = "is_email"))]
    pub email: String,

    #[validate(custom(function = "is_password"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,

    pub role: Role,
}

#[derive(Clone, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
