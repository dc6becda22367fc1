use crate::domain::models::account::{Account, Registration, Role};
use crate::domain::validation::{is_email, is_name, is_password};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    name: String,
    email: String,
    role: Role,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateAccountDTO {
    #[validate(custom(function = "is_name"))]
    #[schema(examples("Maria Souza"))]
    pub name: String,

    #[validate(custom(function = "is_email"))]
    #[schema(examples("your@email.com"))]
    pub email: String,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("s3cret"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    #[schema(examples("s3cret"))]
    pub confirm_password: String,

    #[serde(default)]
    pub role: Role,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            name: val.name,
            email: val.email,
            role: val.role,
            created_at: val.created_at,
        }
    }
}

impl From<CreateAccountDTO> for Registration {
    fn from(create_account: CreateAccountDTO) -> Self {
        Registration {
            name: create_account.name,
            email: create_account.email,
            password: create_account.password,
            confirm_password: create_account.confirm_password,
            role: create_account.role,
        }
    }
}
