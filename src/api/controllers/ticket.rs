use std::sync::Arc;

use crate::api::dto::ticket::{
    CreateResponseDTO, CreateTicketDTO, SummaryDTO, TicketDTO, TicketFilterDTO, UpdateStatusDTO,
};
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::RequireSession;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::filter::{StatusSummary, TicketFilter};
use crate::domain::services::ticket::TicketService;

use actix_web::{
    HttpResponse, get, post, put,
    web::{Data as State, Path, Query},
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(summary)
        .service(list)
        .service(create)
        .service(show)
        .service(respond)
        .service(update_status);
}

#[utoipa::path(
    params(TicketFilterDTO),
    responses(
        (status = 200, body = Vec<TicketDTO>, description = "Visible tickets, newest first"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Ticket"
)]
#[get("/tickets")]
pub async fn list(
    auth: RequireSession,
    query: Query<TicketFilterDTO>,
    ticket_service: State<Arc<dyn TicketService>>,
) -> ApiResult {
    let filter = TicketFilter::from(query.into_inner());

    let tickets = ticket_service.list(&auth.session).await?;

    Ok(HttpResponse::Ok().json(
        filter
            .apply(tickets)
            .into_iter()
            .map(TicketDTO::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    responses(
        (status = 200, body = SummaryDTO, description = "Ticket counts per status"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Ticket"
)]
#[get("/tickets/summary")]
pub async fn summary(
    auth: RequireSession,
    ticket_service: State<Arc<dyn TicketService>>,
) -> ApiResult {
    let tickets = ticket_service.list(&auth.session).await?;

    Ok(HttpResponse::Ok().json(SummaryDTO::from(StatusSummary::of(&tickets))))
}

#[utoipa::path(
    responses(
        (status = 201, body = TicketDTO, description = "Ticket opened"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = CreateTicketDTO,
    security(("jsonwebtoken" = [])),
    tag = "Ticket"
)]
#[post("/tickets")]
pub async fn create(
    auth: RequireSession,
    payload: Json<CreateTicketDTO>,
    ticket_service: State<Arc<dyn TicketService>>,
) -> ApiResult {
    let ticket = ticket_service
        .create(payload.into_inner().into(), &auth.session)
        .await?;

    Ok(HttpResponse::Created().json(TicketDTO::from(ticket)))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Ticket id", example = "ticket_1714564800000")),
    responses(
        (status = 200, body = TicketDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Ticket"
)]
#[get("/tickets/{id}")]
pub async fn show(
    auth: RequireSession,
    id: Path<String>,
    ticket_service: State<Arc<dyn TicketService>>,
) -> ApiResult {
    let ticket = ticket_service.get(&id, &auth.session).await?;

    Ok(HttpResponse::Ok().json(TicketDTO::from(ticket)))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Ticket id", example = "ticket_1714564800000")),
    responses(
        (status = 200, body = TicketDTO, description = "Ticket with the response appended; unchanged when the text is blank"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = CreateResponseDTO,
    security(("jsonwebtoken" = [])),
    tag = "Ticket"
)]
#[post("/tickets/{id}/responses")]
pub async fn respond(
    auth: RequireSession,
    id: Path<String>,
    payload: Json<CreateResponseDTO>,
    ticket_service: State<Arc<dyn TicketService>>,
) -> ApiResult {
    let ticket = ticket_service
        .add_response(&id, &payload.text, &auth.session)
        .await?;

    Ok(HttpResponse::Ok().json(TicketDTO::from(ticket)))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Ticket id", example = "ticket_1714564800000")),
    responses(
        (status = 200, body = TicketDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = UpdateStatusDTO,
    security(("jsonwebtoken" = [])),
    tag = "Ticket"
)]
#[put("/tickets/{id}/status")]
pub async fn update_status(
    auth: RequireSession,
    id: Path<String>,
    payload: Json<UpdateStatusDTO>,
    ticket_service: State<Arc<dyn TicketService>>,
) -> ApiResult {
    let ticket = ticket_service
        .update_status(&id, payload.status, &auth.session)
        .await?;

    Ok(HttpResponse::Ok().json(TicketDTO::from(ticket)))
}
