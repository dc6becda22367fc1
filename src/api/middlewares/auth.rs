use crate::domain::error::{AppError, AppResult};
use crate::domain::models::jsonwebtoken::Claims;
use crate::domain::models::session::Session;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use chrono::DateTime;
use futures::future::{Ready, ready};
use std::sync::Arc;

pub const AUTHORIZATION: &str = "Authorization";

/// The caller's session, decoded from the `Authorization` cookie or bearer header.
#[derive(Debug)]
pub struct RequireSession {
    pub session: Session,
}

fn get_token(req: &HttpRequest) -> AppResult<String> {
    if let Some(cookie) = req.cookie(AUTHORIZATION) {
        return Ok(cookie.value().to_string());
    }

    if let Some(header) = req.headers().get(AUTHORIZATION) {
        return Ok(header
            .to_str()
            .map_err(|_| AppError::Unauthorized())?
            .trim_start_matches("Bearer")
            .to_string());
    }

    Err(AppError::Unauthorized())
}

fn session_from(claims: Claims) -> AppResult<Session> {
    let login_at = DateTime::from_timestamp_millis(claims.login_at).ok_or_else(|| {
        AppError::Unauthorized().trace("login timestamp out of range in token claims")
    })?;

    Ok(Session {
        name: claims.name,
        email: claims.sub,
        role: claims.role,
        login_at,
    })
}

fn authenticate(req: &HttpRequest) -> AppResult<RequireSession> {
    let jsonwebtoken_service = req
        .app_data::<web::Data<Arc<dyn JsonWebTokenService>>>()
        .ok_or_else(|| AppError::InternalError().trace("JsonWebTokenService is not defined"))?;

    let token = get_token(req)?;
    let claims = jsonwebtoken_service.validate_token(token.trim())?;

    Ok(RequireSession {
        session: session_from(claims)?,
    })
}

impl FromRequest for RequireSession {
    type Error = AppError;
    type Future = Ready<Result<RequireSession, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
