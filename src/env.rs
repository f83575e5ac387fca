//! 统一的环境变量管理
//!
//! 提供类型安全、可验证的环境变量访问器

use std::env;
use std::fmt;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Environment variable '{}': {}",
            self.variable, self.message
        )
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    /// 变量未设置时的默认值；返回 `None` 表示必填
    fn default_value() -> Option<T> {
        None
    }

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => match Self::default_value() {
                Some(default) => Ok(default),
                None => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Required environment variable not set".to_string(),
                }),
            },
        }
    }
}

fn parse_u16(value: &str, name: &str) -> EnvResult<u16> {
    value.parse::<u16>().map_err(|_| EnvError {
        variable: name.to_string(),
        message: format!("Invalid number '{}'", value),
    })
}

fn parse_u64(value: &str, name: &str) -> EnvResult<u64> {
    value.parse::<u64>().map_err(|_| EnvError {
        variable: name.to_string(),
        message: format!("Invalid number '{}'", value),
    })
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "TRANSPAGE_LOG_LEVEL";
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn default_value() -> Option<String> {
            Some("info".to_string())
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }
}

/// Web 服务器环境变量
pub mod web {
    use super::*;

    /// 绑定地址
    pub struct BindAddress;
    impl EnvVar<String> for BindAddress {
        const NAME: &'static str = "TRANSPAGE_BIND_ADDRESS";
        const DESCRIPTION: &'static str = "Address the HTTP server binds to";

        fn default_value() -> Option<String> {
            Some("127.0.0.1".to_string())
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.to_string())
        }
    }

    /// 监听端口
    pub struct Port;
    impl EnvVar<u16> for Port {
        const NAME: &'static str = "TRANSPAGE_PORT";
        const DESCRIPTION: &'static str = "Port the HTTP server listens on";

        fn default_value() -> Option<u16> {
            Some(3001)
        }

        fn parse(value: &str) -> EnvResult<u16> {
            parse_u16(value, Self::NAME)
        }
    }

    /// 静态文件目录（空字符串表示不提供静态文件服务）
    pub struct StaticDir;
    impl EnvVar<String> for StaticDir {
        const NAME: &'static str = "TRANSPAGE_STATIC_DIR";
        const DESCRIPTION: &'static str = "Directory served under /static, empty to disable";

        fn default_value() -> Option<String> {
            Some(String::new())
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.to_string())
        }
    }

    /// 单个请求的整体处理超时（秒）
    pub struct RequestTimeoutSecs;
    impl EnvVar<u64> for RequestTimeoutSecs {
        const NAME: &'static str = "TRANSPAGE_REQUEST_TIMEOUT_SECS";
        const DESCRIPTION: &'static str = "Overall deadline for one translation request";

        fn default_value() -> Option<u64> {
            Some(60)
        }

        fn parse(value: &str) -> EnvResult<u64> {
            parse_u64(value, Self::NAME)
        }
    }
}

/// 翻译相关环境变量
pub mod translation {
    use super::*;

    /// 默认的翻译服务端点（LibreTranslate 本地部署）
    pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/translate";

    /// 翻译服务端点
    pub struct Endpoint;
    impl EnvVar<String> for Endpoint {
        const NAME: &'static str = "TRANSPAGE_TRANSLATION_URL";
        const DESCRIPTION: &'static str = "Translation provider endpoint URL";

        fn default_value() -> Option<String> {
            Some(DEFAULT_ENDPOINT.to_string())
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.to_string())
        }
    }

    /// 翻译服务 API 密钥（空字符串表示不需要密钥）
    pub struct ApiKey;
    impl EnvVar<String> for ApiKey {
        const NAME: &'static str = "TRANSPAGE_TRANSLATION_API_KEY";
        const DESCRIPTION: &'static str = "Translation provider API key, empty if not required";

        fn default_value() -> Option<String> {
            Some(String::new())
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.to_string())
        }
    }

    /// 单次网关调用超时（秒）
    pub struct CallTimeoutSecs;
    impl EnvVar<u64> for CallTimeoutSecs {
        const NAME: &'static str = "TRANSPAGE_TRANSLATION_TIMEOUT_SECS";
        const DESCRIPTION: &'static str = "Timeout for a single provider call";

        fn default_value() -> Option<u64> {
            Some(10)
        }

        fn parse(value: &str) -> EnvResult<u64> {
            parse_u64(value, Self::NAME)
        }
    }

    /// 排除标签集合（逗号分隔，覆盖默认的 script,style）
    pub struct ExcludedTags;
    impl EnvVar<String> for ExcludedTags {
        const NAME: &'static str = "TRANSPAGE_EXCLUDED_TAGS";
        const DESCRIPTION: &'static str = "Comma-separated tags whose subtree text is never translated";

        fn default_value() -> Option<String> {
            Some(String::new())
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.to_string())
        }
    }
}
