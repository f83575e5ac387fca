//! 翻译网关
//!
//! 封装对外部翻译服务的调用。网关每次调用只发起一个网络请求，
//! 不做批处理、缓存或重试，所有失败统一上报为网关错误。

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::env;
use crate::translation::error::{TranslationError, TranslationResult};

/// 翻译服务的统一接口
///
/// 树遍历器只依赖这一个操作，具体提供商实现可以互换。
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// 将一段非空文本从源语言翻译为目标语言
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String>;
}

/// 翻译提供商配置
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// 提供商 API 端点
    pub endpoint: String,
    /// API 密钥（可选，取决于提供商部署方式）
    pub api_key: Option<String>,
    /// 单次网关调用的超时时间
    pub call_timeout: Duration,
}

impl GatewayConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> TranslationResult<Self> {
        use crate::env::translation;
        use crate::env::EnvVar;

        let api_key_str = translation::ApiKey::get()
            .map_err(|e| TranslationError::Internal(e.to_string()))?;
        let api_key = if api_key_str.is_empty() {
            None
        } else {
            Some(api_key_str)
        };

        Ok(Self {
            endpoint: translation::Endpoint::get()
                .map_err(|e| TranslationError::Internal(e.to_string()))?,
            api_key,
            call_timeout: Duration::from_secs(
                translation::CallTimeoutSecs::get()
                    .map_err(|e| TranslationError::Internal(e.to_string()))?,
            ),
        })
    }

    /// 验证配置
    pub fn validate(&self) -> TranslationResult<()> {
        Url::parse(&self.endpoint).map_err(|e| {
            TranslationError::Internal(format!(
                "无效的翻译服务端点 '{}': {}",
                self.endpoint, e
            ))
        })?;
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: env::translation::DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            call_timeout: Duration::from_secs(10),
        }
    }
}

/// 提供商请求体（LibreTranslate 兼容格式）
#[derive(Serialize)]
struct ProviderRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// 提供商响应体
#[derive(Deserialize)]
struct ProviderResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// 基于 HTTP 的翻译服务实现
///
/// 请求一个 LibreTranslate 兼容的端点。客户端在进程启动时创建一次，
/// 之后作为只读能力在各请求间共享。
pub struct HttpTranslationService {
    client: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl HttpTranslationService {
    /// 创建新的翻译服务客户端
    pub fn new(config: GatewayConfig) -> TranslationResult<Self> {
        config.validate()?;

        // validate() 已确认端点可解析
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| TranslationError::Internal(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(config.call_timeout)
            .build()
            .map_err(|e| TranslationError::Internal(format!("创建 HTTP 客户端失败: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl TranslationService for HttpTranslationService {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String> {
        // 调用约定：空文本不应到达网关
        if text.trim().is_empty() {
            return Err(TranslationError::InvalidRequest(
                "待翻译文本为空".to_string(),
            ));
        }

        let body = ProviderRequest {
            q: text,
            source: source_lang,
            target: target_lang,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::Gateway(format!("请求翻译服务失败: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::Gateway(format!(
                "翻译服务返回错误状态 {}",
                status
            )));
        }

        let parsed: ProviderResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::Gateway(format!("解析翻译服务响应失败: {}", e)))?;

        if parsed.translated_text.is_empty() {
            return Err(TranslationError::Gateway(
                "翻译服务返回了空结果".to_string(),
            ));
        }

        Ok(parsed.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_config_validate() {
        let config = GatewayConfig {
            endpoint: "http://127.0.0.1:5000/translate".to_string(),
            api_key: None,
            call_timeout: Duration::from_secs(5),
        };
        assert!(config.validate().is_ok());

        let bad = GatewayConfig {
            endpoint: "not a url".to_string(),
            ..config
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_provider_request_omits_missing_key() {
        let request = ProviderRequest {
            q: "Hello",
            source: "en",
            target: "fr",
            format: "text",
            api_key: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("api_key").is_none());
        assert_eq!(json["q"], "Hello");
    }
}
