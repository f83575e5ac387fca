//! 页面处理器

use axum::response::Html;

/// 主页处理器
///
/// 落地页随二进制一起分发，单文件部署时无需额外的静态目录。
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../templates/index.html"))
}
