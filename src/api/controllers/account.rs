use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

use crate::api::dto::account::{AccountDTO, CreateAccountDTO};

use actix_web::{HttpResponse, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(signup);
}

#[utoipa::path(
    responses(
        (status = 201, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CreateAccountDTO,
    tag = "Account",
)]
#[post("/signup")]
pub async fn signup(
    payload: Json<CreateAccountDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account_dto = payload.into_inner();

    let created_account = account_service.register(account_dto.into()).await?;

    Ok(HttpResponse::Created().json(AccountDTO::from(created_account)))
}
