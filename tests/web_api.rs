//! Web API 集成测试
//!
//! 不启动真实监听，直接通过 tower 的 oneshot 驱动路由器。

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use common::{MockBehavior, MockTranslationService};
use transpage::core::TranslationOptions;
use transpage::translation::service::TranslationService;
use transpage::web::{create_router, AppState, WebConfig};

fn test_app(translator: Arc<dyn TranslationService>) -> Router {
    let state = Arc::new(AppState {
        translator,
        options: TranslationOptions::default(),
        request_timeout: Duration::from_secs(5),
    });

    let config = WebConfig {
        bind_addr: "127.0.0.1".to_string(),
        port: 3001,
        static_dir: None,
        request_timeout: Duration::from_secs(5),
    };

    create_router(state, &config)
}

fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// 纯文本端点：网关桩返回 Bonjour 时响应 TranslatedText
#[tokio::test]
async fn test_translate_text_endpoint() {
    let mock = Arc::new(MockTranslationService::replacing(&[("Hello", "Bonjour")]));
    let app = test_app(mock.clone());

    let body = r#"{"SourceLanguage":"en","TargetLanguage":"fr","Text":"Hello"}"#;
    let response = app.oneshot(json_request("/translate", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["TranslatedText"], "Bonjour");
    assert_eq!(mock.received(), vec!["Hello"]);
}

/// HTML 端点：端到端示例，script 内容原样返回
#[tokio::test]
async fn test_translate_html_endpoint() {
    let mock = Arc::new(MockTranslationService::uppercase());
    let app = test_app(mock.clone());

    let body = serde_json::json!({
        "SourceLanguage": "en",
        "TargetLanguage": "fr",
        "html": "<html><body><p>Hi</p><script>var x=1;</script></body></html>",
    })
    .to_string();
    let response = app
        .oneshot(json_request("/translateHtml", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    let translated = json["translatedHtml"].as_str().unwrap();
    assert!(translated.contains("<p>HI</p>"));
    assert!(translated.contains("var x=1;"));
}

/// 请求体缺少必填字段时返回 400，且不触发网关调用
#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let mock = Arc::new(MockTranslationService::uppercase());
    let app = test_app(mock.clone());

    let body = r#"{"SourceLanguage":"en","Text":"Hello"}"#;
    let response = app.oneshot(json_request("/translate", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(mock.call_count(), 0);
}

/// 请求体不是合法 JSON 时返回 400
#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let mock = Arc::new(MockTranslationService::uppercase());
    let app = test_app(mock);

    let response = app
        .oneshot(json_request("/translateHtml", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// 语言字段为空字符串时返回 400，错误消息可读
#[tokio::test]
async fn test_empty_language_is_bad_request() {
    let mock = Arc::new(MockTranslationService::uppercase());
    let app = test_app(mock.clone());

    let body = r#"{"SourceLanguage":"","TargetLanguage":"fr","Text":"Hello"}"#;
    let response = app.oneshot(json_request("/translate", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("SourceLanguage"));
    assert_eq!(mock.call_count(), 0);
}

/// 网关失败映射为 500，响应是错误而不是部分译文
#[tokio::test]
async fn test_gateway_failure_is_internal_error() {
    let mock = Arc::new(MockTranslationService::new(MockBehavior::FailAlways));
    let app = test_app(mock);

    let body = serde_json::json!({
        "SourceLanguage": "en",
        "TargetLanguage": "fr",
        "html": "<html><body><p>Hello</p></body></html>",
    })
    .to_string();
    let response = app
        .oneshot(json_request("/translateHtml", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response_json(response).await;
    assert!(json.get("error").is_some());
    assert!(json.get("translatedHtml").is_none());
}

/// 空 Text 返回 400 而不是把空串转发给提供商
#[tokio::test]
async fn test_empty_text_is_bad_request() {
    let mock = Arc::new(MockTranslationService::uppercase());
    let app = test_app(mock.clone());

    let body = r#"{"SourceLanguage":"en","TargetLanguage":"fr","Text":"   "}"#;
    let response = app.oneshot(json_request("/translate", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(mock.call_count(), 0);
}

/// 落地页
#[tokio::test]
async fn test_index_page() {
    let mock = Arc::new(MockTranslationService::passthrough());
    let app = test_app(mock);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Transpage"));
}

/// 健康检查
#[tokio::test]
async fn test_health_endpoint() {
    let mock = Arc::new(MockTranslationService::passthrough());
    let app = test_app(mock);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "ok");
}
