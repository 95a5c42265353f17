use std::sync::Arc;
use std::time::Duration;

use leavedesk_client::{
    ApiRequest, CancellationToken, ClientConfig, ClientError, HttpTransport, NoAuth,
    RequestOptions, StaticToken, Transport,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport(server: &MockServer) -> HttpTransport {
    HttpTransport::new(
        ClientConfig::with_base_url(server.uri()),
        Arc::new(StaticToken::new("secret-token")),
    )
    .unwrap()
}

// ── Headers ─────────────────────────────────────────────────────

#[tokio::test]
async fn sends_bearer_and_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/v1/modules/hr/v1/health"))
        .and(header("authorization", "Bearer secret-token"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = transport(&server)
        .execute(ApiRequest::get("/health"), &RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn anonymous_requests_have_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let transport =
        HttpTransport::new(ClientConfig::with_base_url(server.uri()), Arc::new(NoAuth)).unwrap();
    transport
        .execute(ApiRequest::get("/stats"), &RequestOptions::default())
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn per_call_headers_override_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer impersonated"))
        .and(header("x-tenant", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::new()
        .with_header("Authorization", "Bearer impersonated")
        .with_header("X-Tenant", "42");
    transport(&server)
        .execute(ApiRequest::get("/stats"), &options)
        .await
        .unwrap();
}

// ── Scopes, query, body ─────────────────────────────────────────

#[tokio::test]
async fn admin_scope_uses_admin_base_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/admin/v1/users"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [], "total": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::get("/users")
        .admin()
        .with_query(&json!({"page": 1}))
        .unwrap();
    transport(&server)
        .execute(request, &RequestOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn repeated_query_keys_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let request = ApiRequest::get("/leave-requests")
        .with_query(&json!({"status": ["A", "B"]}))
        .unwrap();
    transport(&server)
        .execute(request, &RequestOptions::default())
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), Some("status=A&status=B"));
}

#[tokio::test]
async fn json_body_is_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/v1/modules/hr/v1/absence-types"))
        .and(body_json(json!({"name": "Vacation"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"absenceType": {"id": "at-1"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::post("/absence-types")
        .with_json(&json!({"name": "Vacation"}))
        .unwrap();
    let body = transport(&server)
        .execute(request, &RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(body["absenceType"]["id"], "at-1");
}

#[tokio::test]
async fn empty_success_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let body = transport(&server)
        .execute(ApiRequest::delete("/absence-types/at-1"), &RequestOptions::default())
        .await
        .unwrap();
    assert!(body.is_null());
}

// ── Failures ────────────────────────────────────────────────────

#[tokio::test]
async fn non_2xx_carries_status_without_parsing_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "down"})))
        .mount(&server)
        .await;

    let err = transport(&server)
        .execute(ApiRequest::get("/stats"), &RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Transport { status: 503 }));
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn not_found_status_is_recognizable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = transport(&server)
        .execute(ApiRequest::get("/absence-types/nope"), &RequestOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(
        err.into_not_found("absence type", "nope"),
        ClientError::NotFound { id, .. } if id == "nope"
    ));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = transport(&server)
        .execute(ApiRequest::get("/stats"), &RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

// ── Cancellation ────────────────────────────────────────────────

#[tokio::test]
async fn cancelling_in_flight_call_yields_cancelled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let options = RequestOptions::new().with_cancellation(token.clone());
    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let err = transport(&server)
        .execute(ApiRequest::get("/stats"), &options)
        .await
        .unwrap_err();
    canceller.await.unwrap();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn pre_cancelled_call_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    token.cancel();
    let err = transport(&server)
        .execute(
            ApiRequest::get("/stats"),
            &RequestOptions::new().with_cancellation(token),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Cancelled));
}
