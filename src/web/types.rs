//! Web 模块的数据类型定义
//!
//! 请求/响应字段名沿用既有客户端依赖的线上格式，不做改名。

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::TranslationOptions;
use crate::translation::service::TranslationService;

/// 应用状态
///
/// 翻译网关客户端在启动时创建一次，作为只读能力注入各处理器，
/// 不走进程级全局变量。
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<dyn TranslationService>,
    pub options: TranslationOptions,
    /// 单个请求的整体处理期限
    pub request_timeout: Duration,
}

/// HTML 翻译请求
#[derive(Deserialize)]
pub struct HtmlTranslateRequest {
    #[serde(rename = "SourceLanguage")]
    pub source_language: String,
    #[serde(rename = "TargetLanguage")]
    pub target_language: String,
    pub html: String,
}

/// HTML 翻译响应
#[derive(Serialize)]
pub struct HtmlTranslateResponse {
    #[serde(rename = "translatedHtml")]
    pub translated_html: String,
}

/// 纯文本翻译请求
#[derive(Deserialize)]
pub struct TextTranslateRequest {
    #[serde(rename = "SourceLanguage")]
    pub source_language: String,
    #[serde(rename = "TargetLanguage")]
    pub target_language: String,
    #[serde(rename = "Text")]
    pub text: String,
}

/// 纯文本翻译响应
#[derive(Serialize)]
pub struct TextTranslateResponse {
    #[serde(rename = "TranslatedText")]
    pub translated_text: String,
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
