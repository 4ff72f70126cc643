use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_and_read_body_json, call_service};
use serde_json::{Value, json};

use crate::entities::v1::tweets;
use crate::testing::instance::token;

#[actix_web::test]
async fn store() {
    let (service, db) = crate::service!();
    let token = token(&db, 1).await.unwrap();

    let request = TestRequest::post()
        .uri("/tweet")
        .insert_header(("Authorization", token))
        .set_json(json!({ "tweet": "  Hi world  " }))
        .to_request();
    let response = call_service(&service, request).await;

    assert_eq!(response.status(), StatusCode::OK);

    let stored = tweets::Model::timeline(&db, 1).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_id, 1);
    assert_eq!(stored[0].tweet, "Hi world");
}

#[actix_web::test]
async fn store_rejects_empty_tweet() {
    let (service, db) = crate::service!();
    let token = token(&db, 1).await.unwrap();

    let request = TestRequest::post()
        .uri("/tweet")
        .insert_header(("Authorization", token))
        .set_json(json!({ "tweet": "   " }))
        .to_request();
    let response = call_service(&service, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(tweets::Model::timeline(&db, 1).await.unwrap().is_empty());
}

#[actix_web::test]
async fn store_rejects_long_tweet() {
    let (service, db) = crate::service!();
    let token = token(&db, 1).await.unwrap();

    let request = TestRequest::post()
        .uri("/tweet")
        .insert_header(("Authorization", token))
        .set_json(json!({ "tweet": "가".repeat(301) }))
        .to_request();
    let body: Value = call_and_read_body_json(&service, request).await;

    assert_eq!(body["message"], "Validation failed");
    assert!(body["errors"]["tweet"].is_array());
}

#[actix_web::test]
async fn store_accepts_tweet_at_limit() {
    let (service, db) = crate::service!();
    let token = token(&db, 1).await.unwrap();

    let request = TestRequest::post()
        .uri("/tweet")
        .insert_header(("Authorization", token))
        .set_json(json!({ "tweet": "가".repeat(300) }))
        .to_request();
    let response = call_service(&service, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn store_rejects_malformed_body() {
    let (service, db) = crate::service!();
    let token = token(&db, 1).await.unwrap();

    let request = TestRequest::post()
        .uri("/tweet")
        .insert_header(("Authorization", token))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"tweet\":")
        .to_request();
    let response = call_service(&service, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
