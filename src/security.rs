//! Security Module
//!
//! 入出力時の安全性チェックを実装するモジュール。
//! 入力ブックのサイズ上限と、書き出すZIPアーカイブのエントリ名検証を提供します。

use crate::error::CrsToIatiError;

/// セキュリティ設定
///
/// ファイル処理時のセキュリティ制限を定義します。
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 256MB (268_435_456 bytes)
    pub max_input_file_size: u64,
    /// ZIPアーカイブに格納する最大ファイル数
    /// デフォルト: 10000
    pub max_archive_entries: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 268_435_456, // 256MB
            max_archive_entries: 10_000,
        }
    }
}

impl SecurityConfig {
    /// 入力サイズが上限以内か検証する
    pub fn check_input_size(&self, bytes_read: usize) -> Result<(), CrsToIatiError> {
        if bytes_read as u64 > self.max_input_file_size {
            return Err(CrsToIatiError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes_read, self.max_input_file_size
            )));
        }
        Ok(())
    }

    /// アーカイブのエントリ数が上限以内か検証する
    pub fn check_archive_entries(&self, count: usize) -> Result<(), CrsToIatiError> {
        if count > self.max_archive_entries {
            return Err(CrsToIatiError::SecurityViolation(format!(
                "Too many archive entries: {} (max: {})",
                count, self.max_archive_entries
            )));
        }
        Ok(())
    }
}

/// アーカイブのエントリ名の検証
///
/// パストラバーサルを含むエントリを書き出さないよう、エントリ名を検証します。
///
/// # 引数
///
/// * `path` - 検証するエントリ名（`/`区切りの相対パス）
///
/// # 戻り値
///
/// * `Ok(())` - エントリ名が安全な場合
/// * `Err(String)` - エントリ名が危険な場合（`..`や絶対パスを含む）
pub(crate) fn validate_archive_entry(path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err("Empty path is not allowed".to_string());
    }

    // 絶対パスを拒否（Windows形式の`C:\`やUnix形式の`/`で始まるパス）
    if path.starts_with('/') || path.get(1..3) == Some(":\\") {
        return Err(format!("Absolute path is not allowed: {}", path));
    }

    if path.split('/').any(|segment| segment == "..") {
        return Err(format!("Path traversal detected: {}", path));
    }

    if path.contains('\\') {
        return Err(format!("Backslash in path is not allowed: {}", path));
    }

    Ok(())
}
