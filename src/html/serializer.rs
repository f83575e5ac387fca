use html5ever::serialize::{serialize, SerializeOpts};
use markup5ever_rcdom::{RcDom, SerializableHandle};

use crate::translation::error::{TranslationError, TranslationResult};

/// 将 DOM 序列化为 HTML 字符串
pub fn serialize_document(dom: RcDom) -> TranslationResult<String> {
    let mut buf: Vec<u8> = Vec::new();

    let serializable: SerializableHandle = dom.document.into();
    serialize(&mut buf, &serializable, SerializeOpts::default())
        .map_err(|e| TranslationError::Serialization(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| TranslationError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::dom::html_to_dom;

    #[test]
    fn test_parse_serialize_round_trip() {
        let html = "<html><head></head><body><p>Hello</p></body></html>";
        let dom = html_to_dom(html).unwrap();
        let serialized = serialize_document(dom).unwrap();
        assert_eq!(serialized, html);
    }
}
