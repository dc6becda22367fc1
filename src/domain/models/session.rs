use chrono::{DateTime, Utc};

use crate::domain::models::account::{Account, Role};

/// The logged-in user, as handed to every ticket operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub login_at: DateTime<Utc>,
}

impl Session {
    pub fn start(account: &Account, login_at: DateTime<Utc>) -> Self {
        Session {
            name: account.name.to_owned(),
            email: account.email.to_owned(),
            role: account.role,
            login_at,
        }
    }

    pub fn is_technician(&self) -> bool {
        self.role.is_technician()
    }
}
