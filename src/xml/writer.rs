//! XML Writer
//!
//! `Element`ツリーをquick-xmlでテキスト化する。

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::Element;
use crate::error::CrsToIatiError;

/// インデント付きXMLシリアライザ
#[derive(Debug, Clone, Copy)]
pub struct XmlWriter {
    /// インデント幅（スペース数）
    indent: usize,
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlWriter {
    /// 2スペースインデントのライターを生成
    pub fn new() -> Self {
        Self { indent: 2 }
    }

    /// インデント幅を指定してライターを生成
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// XML宣言とツリーを書き出す
    ///
    /// # 引数
    ///
    /// * `root` - ルート要素
    /// * `output` - 出力先のライター
    pub fn write<W: Write>(&self, root: &Element, output: W) -> Result<(), CrsToIatiError> {
        let mut writer = Writer::new_with_indent(output, b' ', self.indent);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(|e| CrsToIatiError::Xml(e.to_string()))?;
        Self::write_element(&mut writer, root)?;

        let inner = writer.get_mut();
        inner.write_all(b"\n")?;
        inner.flush()?;
        Ok(())
    }

    /// ツリーを文字列にする
    pub fn to_string(&self, root: &Element) -> Result<String, CrsToIatiError> {
        let mut buffer = Vec::new();
        self.write(root, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    fn write_element<W: Write>(
        writer: &mut Writer<W>,
        element: &Element,
    ) -> Result<(), CrsToIatiError> {
        let mut start = BytesStart::new(element.name.as_str());
        for (key, value) in &element.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        let is_empty = element.text.is_none() && element.children.is_empty();
        if is_empty {
            return writer
                .write_event(Event::Empty(start))
                .map_err(|e| CrsToIatiError::Xml(e.to_string()));
        }

        writer
            .write_event(Event::Start(start))
            .map_err(|e| CrsToIatiError::Xml(e.to_string()))?;

        if let Some(ref text) = element.text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(|e| CrsToIatiError::Xml(e.to_string()))?;
        }

        for child in &element.children {
            Self::write_element(writer, child)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(element.name.as_str())))
            .map_err(|e| CrsToIatiError::Xml(e.to_string()))
    }
}
