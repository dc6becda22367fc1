use std::sync::Arc;

use crate::api::dto::session::{CredentialsDTO, SessionDTO, SignedInDTO};
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::{AUTHORIZATION, RequireSession};
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use crate::domain::services::session::SessionService;

use actix_web::{
    HttpResponse,
    cookie::time::OffsetDateTime,
    cookie::{Cookie, SameSite},
    get, post,
    web::Data as State,
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(signin).service(signout).service(current);
}

fn session_cookie(token: &str, expires: OffsetDateTime) -> Cookie<'_> {
    Cookie::build(AUTHORIZATION, token)
        .http_only(true)
        .secure(true)
        .path("/api")
        .same_site(SameSite::Strict)
        .expires(expires)
        .finish()
}

#[utoipa::path(
    responses(
        (status = 200, body = SignedInDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::InvalidCredentials())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CredentialsDTO,
    tag = "Session"
)]
#[post("/signin")]
pub async fn signin(
    payload: Json<CredentialsDTO>,
    session_service: State<Arc<dyn SessionService>>,
    jsonwebtoken_service: State<Arc<dyn JsonWebTokenService>>,
) -> ApiResult {
    let credentials_dto = payload.into_inner();

    let session = session_service.login(credentials_dto.into()).await?;

    let access_token = jsonwebtoken_service.generate_token(&session)?;

    let expires = OffsetDateTime::from_unix_timestamp(access_token.expiration)
        .map_err(|err| AppError::InternalError().trace(&err.to_string()))?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&access_token.token, expires))
        .json(SignedInDTO {
            token: access_token.token,
            expires_at: access_token.expiration,
            session: session.into(),
        }))
}

#[utoipa::path(
    responses(
        (status = 204, description = "Session removed"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Session"
)]
#[post("/signout")]
pub async fn signout(
    auth: RequireSession,
    session_service: State<Arc<dyn SessionService>>,
) -> ApiResult {
    // the persisted session may belong to someone who signed in later
    if let Some(stored) = session_service.restore().await? {
        if stored.email == auth.session.email {
            session_service.logout().await?;
        }
    }

    let mut cookie = session_cookie("", OffsetDateTime::UNIX_EPOCH);
    cookie.make_removal();

    Ok(HttpResponse::NoContent().cookie(cookie).finish())
}

#[utoipa::path(
    responses(
        (status = 200, body = SessionDTO, description = "Persisted session of the caller"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Session"
)]
#[get("/session")]
pub async fn current(
    auth: RequireSession,
    session_service: State<Arc<dyn SessionService>>,
) -> ApiResult {
    match session_service.restore().await? {
        Some(session) if session.email == auth.session.email => {
            Ok(HttpResponse::Ok().json(SessionDTO::from(session)))
        }
        _ => Err(AppError::NotFound("No active session")),
    }
}
