use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use rstest::*;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::models::account::Role;
use crate::domain::repositories::store::KeyValueStore;
use crate::tests::utils::seed::seed_account;
use crate::tests::{ALLOWED_ORIGIN, Error, TestContext, bearer, context, request_token};

use crate::app;
use actix_web::test;
use actix_web::test::TestRequest;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Account {
    name: String,
    email: String,
    role: String,
    #[allow(dead_code)]
    created_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Session {
    name: String,
    email: String,
    role: String,
    #[allow(dead_code)]
    login_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignedIn {
    token: String,
    expires_at: i64,
    session: Session,
}

#[rstest]
#[actix_web::test]
async fn test_success_signup(context: TestContext) {
    let app = test::init_service(app::create(context.container, ALLOWED_ORIGIN.to_string())).await;

    let res = TestRequest::post()
        .uri("/api/v1/signup")
        .set_json(json!({
            "name": "New Account",
            "email": "new_account@email.com",
            "password": "s3cret",
            "confirm_password": "s3cret",
            "role": "technician"
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::CREATED);

    let acc: Account = test::read_body_json(res).await;

    assert_eq!(acc.name, "New Account");
    assert_eq!(acc.email, "new_account@email.com");
    assert_eq!(acc.role, "technician");

    let record = context
        .store
        .get("user:new_account@email.com")
        .await
        .unwrap()
        .unwrap();
    assert!(!record.contains("\"s3cret\""));
}

#[rstest]
#[actix_web::test]
async fn test_signup_defaults_to_client(context: TestContext) {
    let app = test::init_service(app::create(context.container, ALLOWED_ORIGIN.to_string())).await;

    let res = TestRequest::post()
        .uri("/api/v1/signup")
        .set_json(json!({
            "name": "Client",
            "email": "client@email.com",
            "password": "s3cret",
            "confirm_password": "s3cret"
        }))
        .send_request(&app)
        .await;

    let acc: Account = test::read_body_json(res).await;

    assert_eq!(acc.role, "client");
}

#[rstest]
#[actix_web::test]
async fn test_signup_twice(context: TestContext) {
    let account = seed_account(&context.container, "Carla", Role::Client).await;

    let app = test::init_service(app::create(context.container, ALLOWED_ORIGIN.to_string())).await;

    let res = TestRequest::post()
        .uri("/api/v1/signup")
        .set_json(json!({
            "name": account.name,
            "email": account.email,
            "password": account.password,
            "confirm_password": account.password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::CONFLICT);

    let err: Error = test::read_body_json(res).await;

    assert_eq!(err.code, 409);
    assert_eq!(err.message, "Account already exists");
}

#[rstest]
#[actix_web::test]
async fn test_success_signin(context: TestContext) {
    let account = seed_account(&context.container, "Tess", Role::Technician).await;

    let app = test::init_service(app::create(context.container, ALLOWED_ORIGIN.to_string())).await;

    let res = TestRequest::post()
        .uri("/api/v1/signin")
        .set_json(json!({
            "email": account.email,
            "password": account.password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let headers = res.headers().clone();
    let header = headers.get("set-cookie").unwrap();
    let cookie = header.to_str().unwrap();

    let cookie = Cookie::parse_encoded(cookie.to_owned()).unwrap();

    let signed_in: SignedIn = test::read_body_json(res).await;

    assert_eq!(cookie.name(), "Authorization");
    assert_eq!(cookie.value(), signed_in.token);
    assert!(cookie.http_only().unwrap_or(false));
    assert_eq!(
        cookie
            .expires()
            .unwrap()
            .datetime()
            .unwrap()
            .unix_timestamp(),
        signed_in.expires_at
    );

    assert_eq!(signed_in.session.name, "Tess");
    assert_eq!(signed_in.session.email, "tess@helpdesk.io");
    assert_eq!(signed_in.session.role, "technician");

    let record = context.store.get("current_user").await.unwrap().unwrap();
    assert!(record.contains("tess@helpdesk.io"));
    assert!(!record.contains("password"));
}

#[rstest]
#[case::unknown_email("fake_account@helpdesk.io", "s3cret!")]
#[case::wrong_password("tess@helpdesk.io", "p4ssw0rd")]
#[actix_web::test]
async fn test_invalid_signin(
    context: TestContext,
    #[case] email: String,
    #[case] password: String,
) {
    seed_account(&context.container, "Tess", Role::Technician).await;

    let app = test::init_service(app::create(context.container, ALLOWED_ORIGIN.to_string())).await;

    let res = TestRequest::post()
        .uri("/api/v1/signin")
        .set_json(json!({
            "email": email,
            "password": password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.code, 401);
    assert_eq!(err.message, "Invalid email or password");
}

#[rstest]
#[actix_web::test]
async fn test_session_restore_and_signout(context: TestContext) {
    let account = seed_account(&context.container, "Tess", Role::Technician).await;

    let app = test::init_service(app::create(context.container, ALLOWED_ORIGIN.to_string())).await;

    let token = request_token(&app, &account.email, &account.password).await;

    let res = TestRequest::get()
        .uri("/api/v1/session")
        .insert_header(bearer(&token))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let session: Session = test::read_body_json(res).await;
    assert_eq!(session.email, "tess@helpdesk.io");

    let res = TestRequest::post()
        .uri("/api/v1/signout")
        .insert_header(bearer(&token))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(context.store.get("current_user").await.unwrap().is_none());

    let res = TestRequest::get()
        .uri("/api/v1/session")
        .insert_header(bearer(&token))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case::session(TestRequest::get().uri("/api/v1/session"))]
#[case::signout(TestRequest::post().uri("/api/v1/signout"))]
#[actix_web::test]
async fn test_session_routes_reject_anonymous(
    context: TestContext,
    #[case] request: TestRequest,
) {
    let account = seed_account(&context.container, "Tess", Role::Technician).await;

    let app = test::init_service(app::create(context.container, ALLOWED_ORIGIN.to_string())).await;

    request_token(&app, &account.email, &account.password).await;

    let res = request.send_request(&app).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.code, 401);

    let record = context.store.get("current_user").await.unwrap().unwrap();
    assert!(record.contains("tess@helpdesk.io"));
}

#[rstest]
#[actix_web::test]
async fn test_session_of_another_user_stays_private(context: TestContext) {
    let carla = seed_account(&context.container, "Carla", Role::Client).await;
    let tess = seed_account(&context.container, "Tess", Role::Technician).await;

    let app = test::init_service(app::create(context.container, ALLOWED_ORIGIN.to_string())).await;

    let carla_token = request_token(&app, &carla.email, &carla.password).await;
    request_token(&app, &tess.email, &tess.password).await;

    let res = TestRequest::get()
        .uri("/api/v1/session")
        .insert_header(bearer(&carla_token))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = TestRequest::post()
        .uri("/api/v1/signout")
        .insert_header(bearer(&carla_token))
        .send_request(&app)
        .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let record = context.store.get("current_user").await.unwrap().unwrap();
    assert!(record.contains("tess@helpdesk.io"));
}

#[rstest]
#[actix_web::test]
async fn test_signin_with_empty_fields(context: TestContext) {
    let app = test::init_service(app::create(context.container, ALLOWED_ORIGIN.to_string())).await;

    let res = TestRequest::post()
        .uri("/api/v1/signin")
        .set_json(json!({ "email": "", "password": "" }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let err: Error = test::read_body_json(res).await;
    let fields: Value = serde_json::from_str(&err.message).unwrap();

    assert_eq!(fields["email"], "Email is required");
    assert_eq!(fields["password"], "Password is required");
}

#[rstest]
#[actix_web::test]
async fn test_responses_echo_request_id(context: TestContext) {
    let app = test::init_service(app::create(context.container, ALLOWED_ORIGIN.to_string())).await;

    let res = TestRequest::get()
        .uri("/api/v1/session")
        .send_request(&app)
        .await;

    let request_id = res.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(!request_id.is_empty());
}
