//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use serde::Deserialize;

/// シート選択方式
///
/// CRSデータを読み込むシートを選択する方法を指定します。
/// 設定ファイルでは`"first"`、`{"index": 0}`、`{"name": "CRS"}`のように記述します。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SheetSelector {
    /// 最初のシート（デフォルト）
    #[default]
    First,

    /// インデックスで指定（0始まり）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use crs2iati::{ConverterBuilder, SheetSelector};
    ///
    /// # fn main() -> Result<(), crs2iati::CrsToIatiError> {
    /// let converter = ConverterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Index(1))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Index(usize),

    /// シート名で指定
    Name(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_selector_default() {
        assert_eq!(SheetSelector::default(), SheetSelector::First);
    }

    #[test]
    fn test_sheet_selector_deserialize() {
        let first: SheetSelector = serde_json::from_str("\"first\"").unwrap();
        assert_eq!(first, SheetSelector::First);

        let index: SheetSelector = serde_json::from_str(r#"{"index": 2}"#).unwrap();
        assert_eq!(index, SheetSelector::Index(2));

        let name: SheetSelector = serde_json::from_str(r#"{"name": "CRS"}"#).unwrap();
        assert_eq!(name, SheetSelector::Name("CRS".to_string()));
    }
}
