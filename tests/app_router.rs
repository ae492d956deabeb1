mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::FixtureResolver;
use geoip_api::routes::app_router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let state = common::create_test_state(Arc::new(FixtureResolver::default()), true);
    let app = app_router(state);

    let response = app
        .oneshot(Request::builder().uri("/health/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}
