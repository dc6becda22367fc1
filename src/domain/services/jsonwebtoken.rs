use crate::domain::{
    error::AppResult,
    models::{
        jsonwebtoken::{AccessToken, Claims},
        session::Session,
    },
};

pub trait JsonWebTokenService: 'static + Sync + Send {
    fn generate_token(&self, session: &Session) -> AppResult<AccessToken>;
    fn validate_token(&self, token: &str) -> AppResult<Claims>;
}
