//! # Transpage Library
//!
//! 把 HTML 文档中用户可见的文本翻译为目标语言的 Web 服务库。
//! 标记结构、属性和不可见内容（script/style）保持原样。
//!
//! ## 模块组织
//!
//! - `core` - 核心翻译管道：解析 → 收集 → 翻译 → 写回 → 序列化
//! - `html` - DOM 解析、文本节点遍历和序列化
//! - `translation` - 翻译网关接口、HTTP 实现和错误类型
//! - `web` - HTTP 服务器、路由和处理器
//! - `env` - 类型安全的环境变量访问

pub mod core;
pub mod env;
pub mod html;
pub mod translation;
pub mod web;

// Re-export commonly used items for convenience
pub use crate::core::*;
pub use crate::html::*;
