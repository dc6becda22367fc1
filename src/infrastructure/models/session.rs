use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::{account::Role, session::Session};

/// Persisted under `current_user`. Carries no password field.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    name: String,
    email: String,
    role: Role,
    login_at: DateTime<Utc>,
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> Self {
        StoredSession {
            name: session.name.to_owned(),
            email: session.email.to_owned(),
            role: session.role,
            login_at: session.login_at,
        }
    }
}

impl From<StoredSession> for Session {
    fn from(session: StoredSession) -> Self {
        Session {
            name: session.name,
            email: session.email,
            role: session.role,
            login_at: session.login_at,
        }
    }
}
