//! 翻译模块统一错误处理
//!
//! 提供结构化错误类型，覆盖从请求校验到文档序列化的完整失败路径

use thiserror::Error;

/// 翻译错误类型
#[derive(Error, Debug)]
pub enum TranslationError {
    /// 请求格式错误或缺少必要字段
    #[error("请求无效: {0}")]
    InvalidRequest(String),

    /// 输入无法解析为 HTML
    #[error("HTML 解析失败: {0}")]
    ParseFailure(String),

    /// 翻译服务调用失败（网络错误、服务拒绝、响应格式错误）
    #[error("翻译服务错误: {0}")]
    Gateway(String),

    /// DOM 树无法序列化回 HTML
    #[error("序列化错误: {0}")]
    Serialization(String),

    /// 请求整体处理超时
    #[error("操作超时")]
    Timeout,

    /// 内部错误
    #[error("内部错误: {0}")]
    Internal(String),
}

impl TranslationError {
    /// 判断错误是否由调用方的输入引起
    pub fn is_client_error(&self) -> bool {
        matches!(self, TranslationError::InvalidRequest(_))
    }
}

/// 错误结果类型别名
pub type TranslationResult<T> = Result<T, TranslationError>;
