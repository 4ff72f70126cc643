//! End-to-end flow over the public HTTP surface with the seeded fixture:
//! user 1 (`songew@gmail.com`) and user 2 (`tet@gmail.com`, who tweeted
//! "i am id 2").

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body, read_body_json};
use serde_json::{Value, json};

use lighter_timeline::testing::setup::PASSWORD;

async fn body_string(resp: ServiceResponse) -> String {
    let bytes = read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

macro_rules! login {
    ($service:expr) => {{
        let req = TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "songew@gmail.com", "password": PASSWORD }))
            .to_request();
        let resp = call_service(&$service, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "Login should succeed");

        let body: Value = read_body_json(resp).await;
        body["access_token"].as_str().unwrap().to_string()
    }};
}

macro_rules! timeline {
    ($service:expr, $user_id:expr) => {{
        let req = TestRequest::get()
            .uri(&format!("/timeline/{}", $user_id))
            .to_request();
        let resp = call_service(&$service, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = read_body_json(resp).await;
        body
    }};
}

#[actix_web::test]
async fn test_ping() {
    let (service, _db) = lighter_timeline::service!();

    let req = TestRequest::get().uri("/ping").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("pong"));
}

#[actix_web::test]
async fn test_login() {
    let (service, _db) = lighter_timeline::service!();

    let req = TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "songew@gmail.com", "password": PASSWORD }))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("access_token"));
}

#[actix_web::test]
async fn test_unauthorized() {
    let (service, _db) = lighter_timeline::service!();

    for (uri, payload) in [
        ("/tweet", json!({ "tweet": "hello world" })),
        ("/follow", json!({ "follow": 2 })),
        ("/unfollow", json!({ "unfollow": 2 })),
    ] {
        let req = TestRequest::post().uri(uri).set_json(payload).to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{} without token", uri);
    }
}

#[actix_web::test]
async fn test_tweet() {
    let (service, _db) = lighter_timeline::service!();
    let access_token = login!(service);

    let req = TestRequest::post()
        .uri("/tweet")
        .insert_header(("Authorization", access_token))
        .set_json(json!({ "tweet": "Hi world" }))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(
        timeline!(service, 1),
        json!({
            "user_id": 1,
            "timeline": [
                { "user_id": 1, "tweet": "Hi world" },
            ],
        })
    );
}

#[actix_web::test]
async fn test_follow() {
    let (service, _db) = lighter_timeline::service!();
    let access_token = login!(service);

    assert_eq!(
        timeline!(service, 1),
        json!({ "user_id": 1, "timeline": [] })
    );

    let req = TestRequest::post()
        .uri("/follow")
        .insert_header(("Authorization", access_token))
        .set_json(json!({ "follow": 2 }))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(
        timeline!(service, 1),
        json!({
            "user_id": 1,
            "timeline": [
                { "user_id": 2, "tweet": "i am id 2" },
            ],
        })
    );
}

#[actix_web::test]
async fn test_unfollow() {
    let (service, _db) = lighter_timeline::service!();
    let access_token = login!(service);

    let req = TestRequest::post()
        .uri("/follow")
        .insert_header(("Authorization", access_token.clone()))
        .set_json(json!({ "follow": 2 }))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(
        timeline!(service, 1),
        json!({
            "user_id": 1,
            "timeline": [
                { "user_id": 2, "tweet": "i am id 2" },
            ],
        })
    );

    let req = TestRequest::post()
        .uri("/unfollow")
        .insert_header(("Authorization", access_token))
        .set_json(json!({ "unfollow": 2 }))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(
        timeline!(service, 1),
        json!({ "user_id": 1, "timeline": [] })
    );
}

#[actix_web::test]
async fn test_timeline_merges_own_and_followed_tweets_in_order() {
    let (service, _db) = lighter_timeline::service!();
    let access_token = login!(service);

    for tweet in ["first", "second"] {
        let req = TestRequest::post()
            .uri("/tweet")
            .insert_header(("Authorization", access_token.clone()))
            .set_json(json!({ "tweet": tweet }))
            .to_request();
        assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);
    }

    let req = TestRequest::post()
        .uri("/follow")
        .insert_header(("Authorization", access_token))
        .set_json(json!({ "follow": 2 }))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    // user 2 tweeted before user 1
    assert_eq!(
        timeline!(service, 1),
        json!({
            "user_id": 1,
            "timeline": [
                { "user_id": 2, "tweet": "i am id 2" },
                { "user_id": 1, "tweet": "first" },
                { "user_id": 1, "tweet": "second" },
            ],
        })
    );

    // following is directed
    assert_eq!(
        timeline!(service, 2),
        json!({
            "user_id": 2,
            "timeline": [
                { "user_id": 2, "tweet": "i am id 2" },
            ],
        })
    );
}

#[actix_web::test]
async fn test_timeline_of_unknown_user_is_empty() {
    let (service, _db) = lighter_timeline::service!();

    assert_eq!(
        timeline!(service, 999),
        json!({ "user_id": 999, "timeline": [] })
    );
}

#[actix_web::test]
async fn test_timeline_rejects_non_numeric_id() {
    let (service, _db) = lighter_timeline::service!();

    let req = TestRequest::get().uri("/timeline/abc").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
