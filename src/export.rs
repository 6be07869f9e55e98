//! Export Module
//!
//! 生成したXMLを日付ディレクトリに書き出し、ZIPアーカイブにまとめる。
//!
//! ```text
//! <out>/
//! ├── 09-06-2018/
//! │   └── new_crs1.xml
//! └── zip/
//!     └── export-09-06-2018.zip
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::CrsToIatiError;
use crate::security::{validate_archive_entry, SecurityConfig};

/// 出力ファイル名のデフォルト（拡張子なし）
pub const DEFAULT_FILE_STEM: &str = "new_crs1";

/// 日付ディレクトリ名の書式（`MM-DD-YYYY`）
const DATE_DIR_FORMAT: &str = "%m-%d-%Y";

/// エクスポートの結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// 書き出したXMLファイル
    pub xml_path: PathBuf,
    /// 作成したZIPアーカイブ（パッケージングしない場合は`None`）
    pub zip_path: Option<PathBuf>,
    /// 出力したアクティビティ数
    pub activities: usize,
    /// 入力の行数
    pub rows: usize,
}

/// 出力ディレクトリのレイアウト
#[derive(Debug, Clone)]
pub struct ExportLayout {
    out_dir: PathBuf,
    file_stem: String,
    package: bool,
}

impl ExportLayout {
    /// 出力先ディレクトリを指定してレイアウトを作る
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            file_stem: DEFAULT_FILE_STEM.to_string(),
            package: true,
        }
    }

    /// XMLファイル名（拡張子なし）を変更する
    pub fn with_file_stem(mut self, file_stem: impl Into<String>) -> Self {
        self.file_stem = file_stem.into();
        self
    }

    /// ZIPアーカイブを作るかどうか
    pub fn with_packaging(mut self, package: bool) -> Self {
        self.package = package;
        self
    }

    /// 日付ディレクトリ（`<out>/MM-DD-YYYY`）
    pub fn dated_dir(&self, date: NaiveDate) -> PathBuf {
        self.out_dir.join(date.format(DATE_DIR_FORMAT).to_string())
    }

    /// XMLファイルのパス（`<out>/MM-DD-YYYY/<stem>.xml`）
    pub fn xml_path(&self, date: NaiveDate) -> PathBuf {
        self.dated_dir(date).join(format!("{}.xml", self.file_stem))
    }

    /// ZIPアーカイブのパス（`<out>/zip/export-MM-DD-YYYY.zip`）
    pub fn zip_path(&self, date: NaiveDate) -> PathBuf {
        self.out_dir
            .join("zip")
            .join(format!("export-{}.zip", date.format(DATE_DIR_FORMAT)))
    }

    /// ドキュメントを書き出し、必要ならパッケージングする
    ///
    /// # 戻り値
    ///
    /// * `Ok((xml_path, zip_path))` - 書き出したファイルのパス
    /// * `Err(CrsToIatiError)` - 書き込みやアーカイブ作成に失敗した場合
    pub fn write(
        &self,
        date: NaiveDate,
        document: &[u8],
    ) -> Result<(PathBuf, Option<PathBuf>), CrsToIatiError> {
        validate_archive_entry(&format!("{}.xml", self.file_stem))
            .map_err(|msg| CrsToIatiError::Config(format!("Invalid file name: {}", msg)))?;

        let dir = self.dated_dir(date);
        fs::create_dir_all(&dir)?;
        let xml_path = self.xml_path(date);
        fs::write(&xml_path, document)?;
        info!(path = %xml_path.display(), bytes = document.len(), "Wrote IATI XML");

        if !self.package {
            return Ok((xml_path, None));
        }

        let zip_path = self.zip_path(date);
        if let Some(parent) = zip_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let entries = package_directory(&dir, &zip_path)?;
        info!(path = %zip_path.display(), entries, "Packaged export directory");

        Ok((xml_path, Some(zip_path)))
    }
}

/// ディレクトリの中身をZIPアーカイブにまとめる
///
/// エントリ名はディレクトリからの相対パス（`/`区切り）で、名前順に格納する。
///
/// # 戻り値
///
/// * `Ok(usize)` - 格納したファイル数
pub fn package_directory(dir: &Path, zip_path: &Path) -> Result<usize, CrsToIatiError> {
    let mut files = Vec::new();
    collect_files(dir, dir, &mut files)?;
    files.sort();
    SecurityConfig::default().check_archive_entries(files.len())?;

    let mut writer = ZipWriter::new(File::create(zip_path)?);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (entry_name, path) in &files {
        validate_archive_entry(entry_name).map_err(CrsToIatiError::SecurityViolation)?;
        writer
            .start_file(entry_name.as_str(), options)
            .map_err(|e| CrsToIatiError::Zip(e.to_string()))?;
        let mut contents = Vec::new();
        File::open(path)?.read_to_end(&mut contents)?;
        writer.write_all(&contents)?;
    }

    writer
        .finish()
        .map_err(|e| CrsToIatiError::Zip(e.to_string()))?;
    Ok(files.len())
}

fn collect_files(
    root: &Path,
    dir: &Path,
    files: &mut Vec<(String, PathBuf)>,
) -> Result<(), CrsToIatiError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(root, &path, files)?;
            continue;
        }
        let relative = path.strip_prefix(root).map_err(|e| {
            CrsToIatiError::Zip(format!("{}: {}", path.display(), e))
        })?;
        let entry_name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        files.push((entry_name, path));
    }
    Ok(())
}
