//! 文本节点遍历器
//!
//! 这是整个服务的核心：深度优先遍历 DOM 树，按文档顺序收集可翻译的
//! 文本节点，在全部节点翻译成功后再把译文按原位置写回。
//!
//! # 收集规则
//!
//! - 只收集 `Text` 节点，且去除首尾空白后内容非空
//! - 被排除标签（默认 `script`/`style`）的整个子树都会被跳过
//! - 节点内容中首尾空白的字节区间被一并记录，写回时原样保留
//!
//! # 失败语义
//!
//! 任何一个节点的翻译失败都会使整个文档的翻译失败。写回发生在所有
//! 网关调用成功之后，因此失败的请求不会留下半翻译的 DOM 树。

use std::collections::HashSet;

use markup5ever_rcdom::{Handle, NodeData};

use crate::translation::error::{TranslationError, TranslationResult};

/// 一个待翻译的文本节点及其空白信息
#[derive(Debug, Clone)]
pub struct TranslatableText {
    /// DOM 节点引用
    pub node: Handle,
    /// 原始文本内容（含首尾空白）
    original: String,
    /// 去除空白后的核心文本在 `original` 中的起始字节偏移
    core_start: usize,
    /// 核心文本的结束字节偏移
    core_end: usize,
}

impl TranslatableText {
    /// 从节点内容创建文本项；内容去除空白后为空时返回 `None`
    pub fn new(node: Handle, original: String) -> Option<Self> {
        let trimmed = original.trim();
        if trimmed.is_empty() {
            return None;
        }

        // trim_start/trim 返回的是 original 的子切片，偏移按字节计算，
        // 对多字节字符同样成立
        let core_start = original.len() - original.trim_start().len();
        let core_end = core_start + trimmed.len();

        Some(Self {
            node,
            original,
            core_start,
            core_end,
        })
    }

    /// 送往翻译服务的核心文本
    pub fn core(&self) -> &str {
        &self.original[self.core_start..self.core_end]
    }

    /// 把译文拼回首尾空白之间
    ///
    /// 按字节区间拼接而不是子串查找替换，核心文本在节点内重复出现
    /// 或译文恰好是原文子串时行为依然确定。
    pub fn splice(&self, translated: &str) -> String {
        let mut result = String::with_capacity(
            self.original.len() - (self.core_end - self.core_start) + translated.len(),
        );
        result.push_str(&self.original[..self.core_start]);
        result.push_str(translated);
        result.push_str(&self.original[self.core_end..]);
        result
    }
}

/// 按文档顺序收集可翻译文本节点
///
/// 深度优先、先序遍历，子节点从左到右处理，收集结果的顺序即文档顺序。
pub fn collect_translatable_texts(
    root: &Handle,
    excluded_tags: &HashSet<String>,
) -> Vec<TranslatableText> {
    let mut texts = Vec::new();
    collect_recursive(root, excluded_tags, &mut texts);
    texts
}

fn collect_recursive(
    node: &Handle,
    excluded_tags: &HashSet<String>,
    texts: &mut Vec<TranslatableText>,
) {
    match node.data {
        NodeData::Text { ref contents } => {
            let original = contents.borrow().to_string();
            if let Some(item) = TranslatableText::new(node.clone(), original) {
                texts.push(item);
            }
        }
        NodeData::Element { ref name, .. } => {
            // html5ever 对 HTML 元素名做了小写规范化，排除集按小写匹配
            if excluded_tags.contains(name.local.as_ref()) {
                return;
            }

            for child in node.children.borrow().iter() {
                collect_recursive(child, excluded_tags, texts);
            }
        }
        // 文档节点直接下降；注释、doctype 等节点没有需要处理的内容
        _ => {
            for child in node.children.borrow().iter() {
                collect_recursive(child, excluded_tags, texts);
            }
        }
    }
}

/// 将译文写回对应的文本节点
///
/// 只修改 `Text` 节点的内容，树的拓扑结构保持不变。
pub fn apply_translations(
    texts: &[TranslatableText],
    translations: &[String],
) -> TranslationResult<()> {
    if texts.len() != translations.len() {
        return Err(TranslationError::Internal(format!(
            "文本项数量与翻译结果数量不匹配: {} vs {}",
            texts.len(),
            translations.len()
        )));
    }

    for (item, translated) in texts.iter().zip(translations.iter()) {
        if let NodeData::Text { contents } = &item.node.data {
            let spliced = item.splice(translated);
            let mut contents = contents.borrow_mut();
            *contents = spliced.as_str().into();
        }
    }

    Ok(())
}
