//! Liveness route tests.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;
use unwind_api::create_router;

#[tokio::test]
async fn root_returns_readiness_string() {
    let app = create_router(Duration::from_secs(30));

    let request =
        Request::builder().method("GET").uri("/").body(Body::empty()).expect("build request");

    let response = app.oneshot(request).await.expect("execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body =
        axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read response body");
    let body_str = std::str::from_utf8(&body).expect("parse response body");

    assert_eq!(body_str, "<pre>BKT Outcome Unwind - ready to go!!!</pre>");
    assert!(body_str.contains("ready"));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = create_router(Duration::from_secs(30));

    let request =
        Request::builder().method("GET").uri("/").body(Body::empty()).expect("build request");

    let response = app.oneshot(request).await.expect("execute request");

    assert!(response.headers().contains_key("X-Request-Id"));
}
