//! Web 路由定义

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers::*, types::AppState};

/// 创建路由结构
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // 落地页
        .route("/", get(index))
        // 翻译端点：纯文本与 HTML 共用同一个网关，仅 HTML 走树遍历器
        .route("/translate", post(translate_text))
        .route("/translateHtml", post(translate_html))
        // 健康检查
        .route("/health", get(health))
}
