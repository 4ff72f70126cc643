use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service};
use serde_json::json;

use crate::entities::v1::users_follow_list;
use crate::testing::instance::token;

#[actix_web::test]
async fn follow_is_idempotent() {
    let (service, db) = crate::service!();
    let token = token(&db, 1).await.unwrap();

    for _ in 0..2 {
        let request = TestRequest::post()
            .uri("/follow")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({ "follow": 2 }))
            .to_request();
        let response = call_service(&service, request).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    assert!(users_follow_list::Model::is_following(&db, 1, 2).await.unwrap());
    assert!(!users_follow_list::Model::is_following(&db, 2, 1).await.unwrap());
}

#[actix_web::test]
async fn follow_unknown_user() {
    let (service, db) = crate::service!();
    let token = token(&db, 1).await.unwrap();

    let request = TestRequest::post()
        .uri("/follow")
        .insert_header(("Authorization", token))
        .set_json(json!({ "follow": 404 }))
        .to_request();
    let response = call_service(&service, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(!users_follow_list::Model::is_following(&db, 1, 404).await.unwrap());
}

#[actix_web::test]
async fn unfollow_without_edge() {
    let (service, db) = crate::service!();
    let token = token(&db, 1).await.unwrap();

    let request = TestRequest::post()
        .uri("/unfollow")
        .insert_header(("Authorization", token))
        .set_json(json!({ "unfollow": 2 }))
        .to_request();
    let response = call_service(&service, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}
