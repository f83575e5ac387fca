//! 核心翻译流程
//!
//! 把解析、遍历、网关调用和序列化串成完整的文档翻译管道。
//! HTTP 层只负责解码请求和编码响应，所有翻译语义都在这里。

use std::collections::HashSet;

use crate::html::{
    apply_translations, collect_translatable_texts, html_to_dom, serialize_document,
};
use crate::translation::error::TranslationResult;
use crate::translation::service::TranslationService;

/// 默认排除的标签：其子树文本对用户不可见，不参与翻译
pub const DEFAULT_EXCLUDED_TAGS: &[&str] = &["script", "style"];

/// 文档翻译选项
#[derive(Debug, Clone)]
pub struct TranslationOptions {
    /// 其子树文本不参与翻译的标签集合（小写标签名）
    pub excluded_tags: HashSet<String>,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            excluded_tags: DEFAULT_EXCLUDED_TAGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl TranslationOptions {
    /// 从环境变量创建选项
    pub fn from_env() -> Self {
        use crate::env::translation::ExcludedTags;
        use crate::env::EnvVar;

        match ExcludedTags::get() {
            Ok(tags) if !tags.is_empty() => Self {
                excluded_tags: tags
                    .split(',')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            _ => Self::default(),
        }
    }
}

/// 翻译完整的 HTML 文档
///
/// 流程：解析 → 按文档顺序收集可翻译文本 → 逐节点顺序调用网关 →
/// 全部成功后写回 → 序列化。任何一个节点失败都会中止整个文档的
/// 翻译，调用方拿到的要么是完整译文，要么是错误。
pub async fn translate_html_document(
    html: &str,
    source_lang: &str,
    target_lang: &str,
    service: &dyn TranslationService,
    options: &TranslationOptions,
) -> TranslationResult<String> {
    let dom = html_to_dom(html)?;

    let texts = collect_translatable_texts(&dom.document, &options.excluded_tags);
    tracing::debug!("收集到 {} 个待翻译文本节点", texts.len());

    let mut translations = Vec::with_capacity(texts.len());
    for item in &texts {
        // 顺序调用，首个失败立即返回，后续节点不再请求
        let translated = service
            .translate(item.core(), source_lang, target_lang)
            .await?;
        translations.push(translated);
    }

    apply_translations(&texts, &translations)?;

    serialize_document(dom)
}

/// 翻译一段纯文本
///
/// 纯文本端点是到网关的直通调用，不经过 DOM 管道。
pub async fn translate_plain_text(
    text: &str,
    source_lang: &str,
    target_lang: &str,
    service: &dyn TranslationService,
) -> TranslationResult<String> {
    service.translate(text, source_lang, target_lang).await
}
