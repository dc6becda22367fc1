use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::models::account::{Credentials, Role};
use crate::domain::models::session::Session;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CredentialsDTO {
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(examples("your@email.com"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(examples("s3cret"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionDTO {
    name: String,
    email: String,
    role: Role,
    login_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SignedInDTO {
    #[schema(examples("eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9"))]
    pub token: String,
    #[schema(examples(1385903))]
    pub expires_at: i64,
    pub session: SessionDTO,
}

impl From<CredentialsDTO> for Credentials {
    fn from(credentials: CredentialsDTO) -> Self {
        Credentials {
            email: credentials.email,
            password: credentials.password,
        }
    }
}

impl From<Session> for SessionDTO {
    fn from(session: Session) -> Self {
        SessionDTO {
            name: session.name,
            email: session.email,
            role: session.role,
            login_at: session.login_at,
        }
    }
}
