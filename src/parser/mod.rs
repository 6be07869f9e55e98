//! Parser Module
//!
//! calamineを使用したCRSワークブックの読み込み。
//! 選択したシートの先頭行をヘッダーとして、`CrsTable`を構築します。

mod workbook;

pub use workbook::WorkbookReader;
