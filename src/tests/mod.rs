mod account;

pub mod utils;

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::header::{AUTHORIZATION, HeaderName},
    test::TestRequest,
};
use rstest::*;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::container::Container;
use crate::infrastructure::stores::memory::MemoryStore;
use crate::tests::utils::crypto::generate_keypair;

pub const ALLOWED_ORIGIN: &str = "http://localhost:8080";

pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub container: Arc<Container>,
}

#[fixture]
fn context() -> TestContext {
    let store = Arc::new(MemoryStore::new());
    let container = Arc::new(Container::new(store.clone(), generate_keypair()));

    TestContext { store, container }
}

async fn request_token<S, B>(app: &S, email: &str, password: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = TestRequest::post()
        .uri("/api/v1/signin")
        .set_json(json!({
            "email": email,
            "password": password,
        }))
        .send_request(app)
        .await;

    let body: Value = actix_web::test::read_body_json(res).await;

    body["token"].as_str().unwrap().to_string()
}

fn bearer(token: &str) -> (HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {token}"))
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    message: String,
}
