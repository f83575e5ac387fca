//! 翻译 API 处理器

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Json as ExtractJson, State},
    http::StatusCode,
    response::Json,
};
use tokio::time::timeout;

use crate::core::{translate_html_document, translate_plain_text};
use crate::translation::error::TranslationError;
use crate::web::types::{
    AppState, HealthResponse, HtmlTranslateRequest, HtmlTranslateResponse, TextTranslateRequest,
    TextTranslateResponse,
};

/// 把翻译错误映射为 HTTP 错误响应
///
/// 对外只暴露人类可读的消息字符串，不泄漏内部错误结构。
fn error_response(error: &TranslationError) -> (StatusCode, Json<serde_json::Value>) {
    let status = if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (
        status,
        Json(serde_json::json!({ "error": error.to_string() })),
    )
}

/// 校验语言字段；缺失或为空的请求不会触发任何网关调用
fn validate_languages(
    source_language: &str,
    target_language: &str,
) -> Result<(), (StatusCode, Json<serde_json::Value>)> {
    if source_language.trim().is_empty() {
        return Err(error_response(&TranslationError::InvalidRequest(
            "SourceLanguage 不能为空".to_string(),
        )));
    }
    if target_language.trim().is_empty() {
        return Err(error_response(&TranslationError::InvalidRequest(
            "TargetLanguage 不能为空".to_string(),
        )));
    }
    Ok(())
}

/// 解包 JSON 请求体；解码失败一律按 400 处理
fn require_json<T>(
    payload: Result<ExtractJson<T>, JsonRejection>,
) -> Result<T, (StatusCode, Json<serde_json::Value>)> {
    match payload {
        Ok(ExtractJson(request)) => Ok(request),
        Err(rejection) => Err(error_response(&TranslationError::InvalidRequest(
            rejection.body_text(),
        ))),
    }
}

/// HTML 翻译处理器
pub async fn translate_html(
    State(state): State<Arc<AppState>>,
    payload: Result<ExtractJson<HtmlTranslateRequest>, JsonRejection>,
) -> Result<Json<HtmlTranslateResponse>, (StatusCode, Json<serde_json::Value>)> {
    let request = require_json(payload)?;
    validate_languages(&request.source_language, &request.target_language)?;

    tracing::info!(
        "开始处理 HTML 翻译请求: {} -> {}, {} 字节",
        request.source_language,
        request.target_language,
        request.html.len()
    );

    let result = timeout(
        state.request_timeout,
        translate_html_document(
            &request.html,
            &request.source_language,
            &request.target_language,
            state.translator.as_ref(),
            &state.options,
        ),
    )
    .await;

    match result {
        Ok(Ok(translated_html)) => Ok(Json(HtmlTranslateResponse { translated_html })),
        Ok(Err(e)) => {
            tracing::error!("HTML 翻译失败: {}", e);
            Err(error_response(&e))
        }
        Err(_) => {
            tracing::error!("HTML 翻译超时");
            Err(error_response(&TranslationError::Timeout))
        }
    }
}

/// 纯文本翻译处理器
pub async fn translate_text(
    State(state): State<Arc<AppState>>,
    payload: Result<ExtractJson<TextTranslateRequest>, JsonRejection>,
) -> Result<Json<TextTranslateResponse>, (StatusCode, Json<serde_json::Value>)> {
    let request = require_json(payload)?;
    validate_languages(&request.source_language, &request.target_language)?;

    if request.text.trim().is_empty() {
        return Err(error_response(&TranslationError::InvalidRequest(
            "Text 不能为空".to_string(),
        )));
    }

    tracing::info!(
        "开始处理文本翻译请求: {} -> {}",
        request.source_language,
        request.target_language
    );

    let result = timeout(
        state.request_timeout,
        translate_plain_text(
            &request.text,
            &request.source_language,
            &request.target_language,
            state.translator.as_ref(),
        ),
    )
    .await;

    match result {
        Ok(Ok(translated_text)) => Ok(Json(TextTranslateResponse { translated_text })),
        Ok(Err(e)) => {
            tracing::error!("文本翻译失败: {}", e);
            Err(error_response(&e))
        }
        Err(_) => {
            tracing::error!("文本翻译超时");
            Err(error_response(&TranslationError::Timeout))
        }
    }
}

/// 健康检查处理器
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
