//! Login, logout and token handling

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use serde_json::{Value, json};

use lighter_timeline::entities::v1::tokens;
use lighter_timeline::security::{decode_token, encode_token};
use lighter_timeline::testing::setup::PASSWORD;
use sea_orm::EntityTrait;

#[actix_web::test]
async fn test_login_returns_token_stored_in_database() {
    let (service, db) = lighter_timeline::service!();

    let req = TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "songew@gmail.com", "password": PASSWORD }))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    let access_token = body["access_token"].as_str().unwrap();
    let id = decode_token(access_token).expect("token should decode");

    let token = tokens::Entity::find_by_id(id).one(db.get_ref()).await.unwrap().unwrap();
    assert_eq!(token.user_id, 1);
    assert!(token.expired_at.is_some());
}

#[actix_web::test]
async fn test_login_email_is_case_insensitive() {
    let (service, _db) = lighter_timeline::service!();

    let req = TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "  SongEW@Gmail.com ", "password": PASSWORD }))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_login_wrong_password() {
    let (service, _db) = lighter_timeline::service!();

    let req = TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "songew@gmail.com", "password": "wrong password" }))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = read_body_json(resp).await;
    assert!(body.get("access_token").is_none());
}

#[actix_web::test]
async fn test_login_unknown_email() {
    let (service, _db) = lighter_timeline::service!();

    let req = TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "nobody@gmail.com", "password": PASSWORD }))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_empty_fields() {
    let (service, _db) = lighter_timeline::service!();

    let req = TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "", "password": "" }))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = read_body_json(resp).await;
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["password"].is_array());
}

#[actix_web::test]
async fn test_bearer_prefix_is_accepted() {
    let (service, db) = lighter_timeline::service!();
    let token = lighter_timeline::testing::instance::token(&db, 1).await.unwrap();

    let req = TestRequest::post()
        .uri("/tweet")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({ "tweet": "with bearer" }))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_garbage_and_unknown_tokens_are_rejected() {
    let (service, _db) = lighter_timeline::service!();
    let unknown = encode_token(uuid::Uuid::new_v4());

    for token in ["not-a-token!", "0OIl", unknown.as_str()] {
        let req = TestRequest::post()
            .uri("/tweet")
            .insert_header(("Authorization", token))
            .set_json(json!({ "tweet": "nope" }))
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "token {:?}", token);
    }
}

#[actix_web::test]
async fn test_logout_revokes_only_current_token() {
    let (service, db) = lighter_timeline::service!();
    let first = lighter_timeline::testing::instance::token(&db, 1).await.unwrap();
    let second = lighter_timeline::testing::instance::token(&db, 1).await.unwrap();

    // warm the session cache so logout has to evict it
    let req = TestRequest::post()
        .uri("/follow")
        .insert_header(("Authorization", first.clone()))
        .set_json(json!({ "follow": 2 }))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    let req = TestRequest::post()
        .uri("/logout")
        .insert_header(("Authorization", first.clone()))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    let req = TestRequest::post()
        .uri("/unfollow")
        .insert_header(("Authorization", first))
        .set_json(json!({ "unfollow": 2 }))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = TestRequest::post()
        .uri("/unfollow")
        .insert_header(("Authorization", second))
        .set_json(json!({ "unfollow": 2 }))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    let (service, db) = lighter_timeline::service!();
    let id = uuid::Uuid::new_v4();

    tokens::Model {
        id,
        user_id: 1,
        expired_at: Some(lighter_timeline::prelude::now() - chrono::Duration::minutes(1)),
    }
    .store(&db)
    .await
    .unwrap();

    let req = TestRequest::post()
        .uri("/tweet")
        .insert_header(("Authorization", encode_token(id)))
        .set_json(json!({ "tweet": "too late" }))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
