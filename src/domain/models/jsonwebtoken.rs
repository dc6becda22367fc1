use serde::{Deserialize, Serialize};

use crate::domain::models::account::Role;

pub struct AccessToken {
    pub token: String,
    pub expiration: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub role: Role,
    pub login_at: i64,
    pub exp: usize,
    pub iat: usize,
}
