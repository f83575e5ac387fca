//! HTML 文档处理模块
//!
//! - `dom` - 解析和节点查询工具
//! - `walker` - 文本节点收集与写回（服务核心）
//! - `serializer` - DOM 序列化

pub mod dom;
pub mod serializer;
pub mod walker;

pub use dom::{find_nodes, get_node_attr, get_node_name, html_to_dom};
pub use serializer::serialize_document;
pub use walker::{apply_translations, collect_translatable_texts, TranslatableText};
