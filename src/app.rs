use actix_web::HttpMessage;
use actix_web::{
    App,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::header,
    middleware::{Next, from_fn},
    web,
};

use tracing_actix_web::{RequestId, TracingLogger};

use actix_cors::Cors;

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::openapi::{Components, OpenApi, Server};
use utoipa_actix_web::AppExt;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::container::Container;

use std::sync::Arc;

pub fn create(
    container: Arc<Container>,
    allowed_origin: String,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    App::new()
        .into_utoipa_app()
        .openapi(docs())
        .configure(api::routes)
        .openapi_service(|api| {
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", api)
        })
        .into_app()
        .wrap(TracingLogger::default())
        .wrap(cors(&allowed_origin))
        .wrap(from_fn(request_headers))
        .app_data(web::Data::new(container.account_service.clone()))
        .app_data(web::Data::new(container.session_service.clone()))
        .app_data(web::Data::new(container.ticket_service.clone()))
        .app_data(web::Data::new(container.jsonwebtoken_service.clone()))
}

fn cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(vec!["GET", "POST", "PUT"])
        .allowed_headers(&[header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .block_on_origin_mismatch(false)
        .max_age(3600)
}

async fn request_headers(
    req: ServiceRequest,
    svc: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let mut res = svc.call(req).await?;

    // set by TracingLogger, which runs inside this middleware
    let request_id = res.request().extensions().get::<RequestId>().copied();

    if let Some(request_id) = request_id {
        if let Ok(value) = header::HeaderValue::from_str(&request_id.to_string()) {
            res.headers_mut()
                .insert(header::HeaderName::from_static("x-request-id"), value);
        }
    }
    Ok(res)
}

pub fn docs() -> OpenApi {
    let mut openapi = OpenApi::default();

    openapi.info.title = String::from("Helpdesk API");
    openapi.info.description = Some(String::from(
        "Support tickets filed by clients and answered by technicians",
    ));
    openapi.info.version = String::from(env!("CARGO_PKG_VERSION"));

    openapi.servers = Some(servers());
    openapi.components = Some(components());

    openapi
}

fn servers() -> Vec<Server> {
    vec![server("http://localhost:8080", "Localhost")]
}

fn server(url: &str, description: &str) -> Server {
    Server::builder()
        .description(Some(description.to_owned()))
        .url(url.to_owned())
        .build()
}

fn components() -> Components {
    Components::builder()
        .security_scheme(
            "jsonwebtoken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        )
        .build()
}
