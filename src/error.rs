//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。
//!
//! フィールド単位の値変換失敗はエラーとして扱わない（「値なし」として処理する）。
//! ここで定義するのは、入力の読み込みや出力の書き込みなど境界で発生する致命的なエラーのみ。

use thiserror::Error;

/// crs2iatiクレート全体で使用するエラー型
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（入力ファイルが存在しないなど）
/// - `Parse`: スプレッドシートの解析中に発生したエラー（calamine由来）
/// - `Xml`: XMLのシリアライズ中に発生したエラー（quick-xml由来）
/// - `Zip`: エクスポートのZIPアーカイブ作成中に発生したエラー
/// - `Config`: 設定の検証に失敗したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use crs2iati::CrsToIatiError;
/// use std::fs::File;
///
/// fn open_crs_file(path: &str) -> Result<(), CrsToIatiError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     // ... 処理 ...
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum CrsToIatiError {
    /// I/O操作中に発生したエラー
    ///
    /// CRSファイルの読み込み失敗、エクスポート先への書き込み失敗など。
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// スプレッドシートの解析中に発生したエラー
    ///
    /// calamineがワークブックを開く際に発生したエラーです。
    #[error("Failed to parse CRS workbook: {0}")]
    Parse(#[from] calamine::Error),

    /// XMLのシリアライズエラー
    #[error("XML write error: {0}")]
    Xml(String),

    /// ZIPアーカイブの作成エラー
    #[error("ZIP archive error: {0}")]
    Zip(String),

    /// UTF-8文字列の変換エラー
    ///
    /// シリアライズ済みのXMLを文字列として取り出す際に発生します。
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時やシート選択時に、無効な設定が検出された
    /// 場合に発生します。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use crs2iati::{ConverterBuilder, CrsToIatiError};
    ///
    /// let result = ConverterBuilder::new()
    ///     .with_namespace_url("")
    ///     .build();
    ///
    /// match result {
    ///     Err(CrsToIatiError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// 入力ファイルのサイズ制限に違反したエラー
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}
