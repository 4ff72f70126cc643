//! Registration through `POST /sign-up`

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use serde_json::{Value, json};

use lighter_timeline::entities::v1::users;
use lighter_timeline::requests::v1::user::SignUpRequest;

fn request() -> SignUpRequest {
    SignUpRequest {
        name: "John Doe".to_string(),
        email: "John.Doe@Local.Test".to_string(),
        password: "SecureP@ss123".to_string(),
        profile: "hello".to_string(),
    }
}

#[actix_web::test]
async fn test_sign_up_then_login() {
    let (service, db) = lighter_timeline::service!();
    let payload = request();

    let req = TestRequest::post()
        .uri("/sign-up")
        .set_json(&payload)
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["email"], "john.doe@local.test");
    assert_eq!(body["profile"], "hello");
    assert!(body.get("hashed_password").is_none());

    let id = body["id"].as_i64().unwrap() as i32;
    let user = users::Model::find_by_id(&db, id).await.unwrap().unwrap();
    assert!(user.hashed_password.starts_with("$argon2id$"));

    let req = TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": payload.email, "password": payload.password }))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_sign_up_duplicate_email() {
    let (service, _db) = lighter_timeline::service!();

    let req = TestRequest::post()
        .uri("/sign-up")
        .set_json(json!({
            "name": "Someone",
            "email": "SONGEW@gmail.com",
            "password": "long enough",
        }))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["errors"]["email"][0], "Email already exists");
}

#[actix_web::test]
async fn test_sign_up_invalid_fields() {
    let (service, _db) = lighter_timeline::service!();

    let req = TestRequest::post()
        .uri("/sign-up")
        .set_json(json!({
            "name": "  ",
            "email": "not-an-email",
            "password": "short",
        }))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = read_body_json(resp).await;
    assert!(body["errors"]["name"].is_array());
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["password"].is_array());
}
