use std::sync::Arc;
use std::time::Duration;

use mtransport::{
    ApiErrorKind, ApiRequest, AuthContext, BackoffSleeper, FilePart, ReqwestTransport, Session,
};
use mcommon::BoxFuture;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Default)]
struct InstantSleeper;

impl BackoffSleeper for InstantSleeper {
    fn sleep(&self, _delay: Duration) -> BoxFuture<'_, ()> {
        Box::pin(async {})
    }
}

fn session_for(server: &MockServer, auth: AuthContext) -> Session {
    let transport = ReqwestTransport::default().with_base_url(server.uri());
    Session::new(Arc::new(transport), auth).with_sleeper(Arc::new(InstantSleeper))
}

#[tokio::test]
async fn transient_failure_is_retried_then_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/memories/m1"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/memories/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "m1"})))
        .with_priority(2)
        .mount(&server)
        .await;

    let session = session_for(&server, AuthContext::bearer("k"));
    let value = session
        .send(ApiRequest::get("get_memory", "memories/m1"))
        .await
        .expect("second attempt succeeds");

    assert_eq!(value, json!({"id": "m1"}));
    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 2);
    for request in received {
        assert_eq!(
            request
                .headers
                .get("authorization")
                .and_then(|value| value.to_str().ok()),
            Some("Bearer k")
        );
    }
}

#[tokio::test]
async fn not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/memories/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Memory not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server, AuthContext::bearer("k"));
    let error = session
        .send(ApiRequest::get("get_memory", "memories/missing"))
        .await
        .expect_err("404 surfaces");

    assert_eq!(error.kind, ApiErrorKind::NotFound);
    assert_eq!(error.status, Some(404));
    assert_eq!(error.message, "Memory not found");
}

#[tokio::test]
async fn persistent_server_error_uses_full_attempt_budget() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/memories"))
        .respond_with(ResponseTemplate::new(500))
        .expect(4)
        .mount(&server)
        .await;

    let session = session_for(&server, AuthContext::anonymous());
    let error = session
        .send(ApiRequest::post("add_memory", "memories").with_json(json!({"content": "x"})))
        .await
        .expect_err("budget exhausted");

    assert_eq!(error.kind, ApiErrorKind::Server);
}

#[tokio::test]
async fn anonymous_session_sends_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let session = session_for(&server, AuthContext::new(Some(String::new())));
    session
        .send(ApiRequest::get("health_check", "health"))
        .await
        .expect("health ok");

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn json_body_and_query_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/memories/search"))
        .and(query_param("trace", "1"))
        .and(header("authorization", "Bearer k"))
        .and(body_json(json!({"user_id": "u1", "query": "coffee"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "m1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server, AuthContext::bearer("k"));
    let value = session
        .send(
            ApiRequest::post("search_memories", "memories/search")
                .with_query("trace", 1)
                .with_json(json!({"user_id": "u1", "query": "coffee"})),
        )
        .await
        .expect("search ok");

    assert_eq!(value, json!([{"id": "m1"}]));
}

#[tokio::test]
async fn empty_success_body_is_null_and_html_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/memories/m1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server, AuthContext::anonymous());
    let deleted = session
        .send(ApiRequest::delete("delete_memory", "memories/m1"))
        .await
        .expect("delete ok");
    assert!(deleted.is_null());

    let error = session
        .send(ApiRequest::get("get_global_statistics", "statistics"))
        .await
        .expect_err("html body");
    assert_eq!(error.kind, ApiErrorKind::Protocol);
}

#[tokio::test]
async fn status_only_request_skips_body_parsing() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/memories/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/memories/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server, AuthContext::anonymous());
    let deleted = session
        .send(ApiRequest::delete("delete_memory", "memories/m1").ignoring_body())
        .await
        .expect("plain text body is not parsed");
    assert!(deleted.is_null());

    let error = session
        .send(ApiRequest::delete("delete_memory", "memories/missing").ignoring_body())
        .await
        .expect_err("status still checked");
    assert_eq!(error.kind, ApiErrorKind::NotFound);
}

#[tokio::test]
async fn multipart_upload_is_resent_on_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/memories/image/upload"))
        .and(query_param("user_id", "u1"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/memories/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "img-1"})))
        .with_priority(2)
        .mount(&server)
        .await;

    let session = session_for(&server, AuthContext::bearer("k"));
    let value = session
        .send(
            ApiRequest::post("upload_image", "memories/image/upload")
                .with_query("user_id", "u1")
                .with_file(FilePart::new("cat.png", b"png-bytes".to_vec())),
        )
        .await
        .expect("upload ok");

    assert_eq!(value, json!({"id": "img-1"}));
    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 2);
    for request in received {
        let body = String::from_utf8_lossy(&request.body);
        assert!(body.contains("name=\"file\""));
        assert!(body.contains("png-bytes"));
    }
}
