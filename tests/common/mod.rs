// 集成测试公共模块
//
// 提供模拟翻译网关和 HTML 测试辅助工具

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use transpage::html::html_to_dom;
use transpage::translation::error::{TranslationError, TranslationResult};
use transpage::translation::service::TranslationService;

/// 模拟网关的行为模式
#[allow(dead_code)]
pub enum MockBehavior {
    /// 原样返回输入
    Passthrough,
    /// 返回输入的大写形式
    Uppercase,
    /// 按映射表返回译文，未命中时原样返回
    Replace(HashMap<String, String>),
    /// 收到指定文本时失败，其余大写返回
    FailOn(String),
    /// 所有调用都失败
    FailAlways,
}

/// 模拟翻译网关
///
/// 记录每次收到的文本，便于断言调用次数和调用顺序。
pub struct MockTranslationService {
    behavior: MockBehavior,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockTranslationService {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn uppercase() -> Self {
        Self::new(MockBehavior::Uppercase)
    }

    pub fn passthrough() -> Self {
        Self::new(MockBehavior::Passthrough)
    }

    pub fn replacing(pairs: &[(&str, &str)]) -> Self {
        let map = pairs
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();
        Self::new(MockBehavior::Replace(map))
    }

    /// 网关收到的所有文本，按接收顺序排列
    pub fn received(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TranslationService for MockTranslationService {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> TranslationResult<String> {
        self.calls.lock().unwrap().push(text.to_string());

        match &self.behavior {
            MockBehavior::Passthrough => Ok(text.to_string()),
            MockBehavior::Uppercase => Ok(text.to_uppercase()),
            MockBehavior::Replace(map) => {
                Ok(map.get(text).cloned().unwrap_or_else(|| text.to_string()))
            }
            MockBehavior::FailOn(needle) => {
                if text == needle {
                    Err(TranslationError::Gateway(format!(
                        "mock failure on '{}'",
                        needle
                    )))
                } else {
                    Ok(text.to_uppercase())
                }
            }
            MockBehavior::FailAlways => {
                Err(TranslationError::Gateway("mock failure".to_string()))
            }
        }
    }
}

/// HTML 测试工具
#[allow(dead_code)]
pub struct HtmlTestHelper;

#[allow(dead_code)]
impl HtmlTestHelper {
    /// 创建测试用的DOM结构
    pub fn create_test_dom(html: &str) -> RcDom {
        html_to_dom(html).expect("test HTML should parse")
    }

    /// 先序收集树中所有元素标签名，用于断言树拓扑不变
    pub fn collect_tags(node: &Handle) -> Vec<String> {
        let mut tags = Vec::new();
        Self::collect_tags_recursive(node, &mut tags);
        tags
    }

    fn collect_tags_recursive(node: &Handle, tags: &mut Vec<String>) {
        if let NodeData::Element { ref name, .. } = node.data {
            tags.push(name.local.as_ref().to_string());
        }
        for child in node.children.borrow().iter() {
            Self::collect_tags_recursive(child, tags);
        }
    }

    /// 先序收集树中所有文本节点内容
    pub fn collect_texts(node: &Handle) -> Vec<String> {
        let mut texts = Vec::new();
        Self::collect_texts_recursive(node, &mut texts);
        texts
    }

    fn collect_texts_recursive(node: &Handle, texts: &mut Vec<String>) {
        if let NodeData::Text { ref contents } = node.data {
            texts.push(contents.borrow().to_string());
        }
        for child in node.children.borrow().iter() {
            Self::collect_texts_recursive(child, texts);
        }
    }

    /// 创建简单的英文HTML页面
    pub fn create_simple_english_page() -> String {
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>Test Page</title>
    <meta charset="UTF-8">
</head>
<body>
    <h1>Welcome to Test</h1>
    <p>This is a test paragraph with some <strong>important</strong> text.</p>
    <div>
        <p>Another paragraph in a div.</p>
        <a href="https://example.com" title="Example Link">Visit Example</a>
    </div>
    <script>var counter = 1;</script>
    <style>p { color: red; }</style>
</body>
</html>"#
            .to_string()
    }
}
