//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。
//! 変換パイプライン（`transform`）と、IATIルート要素の組み立て（`build_document`）もここに置く。

use std::fmt;
use std::io::{Read, Seek, Write};
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use tracing::info;

use crate::api::SheetSelector;
use crate::country::{CountryLookup, CountryTable};
use crate::error::CrsToIatiError;
use crate::export::{ExportLayout, ExportSummary};
use crate::grouper;
use crate::mapper::ActivityMapper;
use crate::parser::WorkbookReader;
use crate::records::ActivityRecord;
use crate::types::CrsTable;
use crate::xml::{Element, XmlWriter};

/// 出力するIATIスキーマのバージョン
pub const IATI_VERSION: &str = "2.03";

/// `xmlns:usg`のデフォルト値
pub const DEFAULT_NAMESPACE_URL: &str = "https://explorer.usaid.gov/";

/// `generated-datetime`および`last-updated-datetime`の書式
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// 取引日のデフォルト（2017-01-01）
fn default_transaction_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 1, 1).unwrap_or_default()
}

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// 取引日（`transaction-date`と金額の`value-date`）
    pub transaction_date: NaiveDate,

    /// 生成日時（Noneの場合は変換時の現在時刻）
    pub generated_at: Option<DateTime<Utc>>,

    /// `xmlns:usg`の値
    pub namespace_url: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::First,
            transaction_date: default_transaction_date(),
            generated_at: None,
            namespace_url: DEFAULT_NAMESPACE_URL.to_string(),
        }
    }
}

/// JSON設定ファイル
///
/// すべての項目は省略可能で、指定された項目だけがビルダーに反映される。
///
/// ```json
/// {
///   "sheet": {"name": "CRS"},
///   "transaction_date": "2017-01-01",
///   "namespace_url": "https://explorer.usaid.gov/"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub sheet: Option<SheetSelector>,
    /// `YYYY-MM-DD`
    pub transaction_date: Option<String>,
    pub namespace_url: Option<String>,
}

impl ConfigFile {
    /// ファイルから設定を読み込む
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CrsToIatiError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents).map_err(|e| match e {
            CrsToIatiError::Config(msg) => {
                CrsToIatiError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// JSON文字列から設定を読み込む
    pub fn from_json(json: &str) -> Result<Self, CrsToIatiError> {
        serde_json::from_str(json)
            .map_err(|e| CrsToIatiError::Config(format!("Invalid config file: {}", e)))
    }
}

/// `YYYY-MM-DD`形式の日付を解釈する
pub fn parse_date(value: &str) -> Result<NaiveDate, CrsToIatiError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| CrsToIatiError::Config(format!("Invalid date '{}': expected YYYY-MM-DD", value)))
}

/// Fluent Builder APIを提供する構造体
///
/// `Converter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use chrono::NaiveDate;
/// use crs2iati::{ConverterBuilder, SheetSelector};
///
/// # fn main() -> Result<(), crs2iati::CrsToIatiError> {
/// let converter = ConverterBuilder::new()
///     .with_sheet_selector(SheetSelector::Name("CRS".to_string()))
///     .with_transaction_date(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap())
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,

    /// 国名解決サービス（Noneの場合は組み込みの参照表）
    countries: Option<Box<dyn CountryLookup>>,
}

impl fmt::Debug for ConverterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterBuilder")
            .field("config", &self.config)
            .field("custom_country_lookup", &self.countries.is_some())
            .finish()
    }
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 最初のシート
    /// - 取引日: 2017-01-01
    /// - 生成日時: 変換時の現在時刻
    /// - `xmlns:usg`: `https://explorer.usaid.gov/`
    /// - 国名解決: 組み込みのISO 3166-1参照表
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
            countries: None,
        }
    }

    /// 読み込むシートを選択する
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// 取引日を指定する
    pub fn with_transaction_date(mut self, date: NaiveDate) -> Self {
        self.config.transaction_date = date;
        self
    }

    /// 生成日時を固定する
    ///
    /// 出力を再現可能にしたい場合（テストなど）に使用します。
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.config.generated_at = Some(generated_at);
        self
    }

    /// `xmlns:usg`名前空間のURLを指定する
    pub fn with_namespace_url(mut self, url: impl Into<String>) -> Self {
        self.config.namespace_url = url.into();
        self
    }

    /// 国名解決サービスを差し替える
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use crs2iati::ConverterBuilder;
    ///
    /// # fn main() -> Result<(), crs2iati::CrsToIatiError> {
    /// let converter = ConverterBuilder::new()
    ///     .with_country_lookup(|name: &str| (name == "Kosovo").then(|| "XK".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_country_lookup(mut self, lookup: impl CountryLookup + 'static) -> Self {
        self.countries = Some(Box::new(lookup));
        self
    }

    /// 設定ファイルの内容を反映する
    ///
    /// # 発生し得るエラー
    ///
    /// * `CrsToIatiError::Config(String)`: 取引日が`YYYY-MM-DD`形式でない場合
    pub fn with_config(mut self, file: &ConfigFile) -> Result<Self, CrsToIatiError> {
        if let Some(ref selector) = file.sheet {
            self.config.sheet_selector = selector.clone();
        }
        if let Some(ref date) = file.transaction_date {
            self.config.transaction_date = parse_date(date)?;
        }
        if let Some(ref url) = file.namespace_url {
            self.config.namespace_url = url.clone();
        }
        Ok(self)
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `CrsToIatiError::Config(String)`: 設定の検証に失敗した場合
    ///   * 名前空間URLが空
    ///   * シート名が空
    pub fn build(self) -> Result<Converter, CrsToIatiError> {
        if self.config.namespace_url.trim().is_empty() {
            return Err(CrsToIatiError::Config(
                "Namespace URL must not be empty".to_string(),
            ));
        }

        if let SheetSelector::Name(ref name) = self.config.sheet_selector {
            if name.trim().is_empty() {
                return Err(CrsToIatiError::Config(
                    "Sheet name must not be empty".to_string(),
                ));
            }
        }

        let countries = self
            .countries
            .unwrap_or_else(|| Box::new(CountryTable::iso3166()));

        Ok(Converter {
            config: self.config,
            countries,
            writer: XmlWriter::new(),
        })
    }
}

/// IATIルート要素の属性
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    /// `generated-datetime`（各アクティビティの`last-updated-datetime`にも使う）
    pub generated_at: String,
    /// `xmlns:usg`
    pub namespace_url: String,
}

/// アクティビティを`iati-activities`ルート要素にまとめる
pub fn build_document(activities: &[ActivityRecord], header: &DocumentHeader) -> Element {
    let mut root = Element::new("iati-activities")
        .attr("version", IATI_VERSION)
        .attr("generated-datetime", header.generated_at.as_str())
        .attr("xmlns:usg", header.namespace_url.as_str());
    for activity in activities {
        root.push(activity.to_element(&header.generated_at));
    }
    root
}

/// 行集合をアクティビティレコード列に変換する
///
/// ファイルシステムや現在時刻には依存しない純粋な変換。
///
/// # 引数
///
/// * `table` - 入力テーブル
/// * `countries` - 受取国名の解決サービス
/// * `transaction_date` - 取引日
pub fn transform(
    table: &CrsTable,
    countries: &dyn CountryLookup,
    transaction_date: NaiveDate,
) -> Vec<ActivityRecord> {
    let groups = grouper::group(table);
    info!(rows = table.len(), activities = groups.len(), "Grouped CRS rows");

    let mapper = ActivityMapper::new(
        table,
        countries,
        transaction_date.format("%Y-%m-%d").to_string(),
    );
    groups
        .iter()
        .map(|group| mapper.build_activity(group))
        .collect()
}

/// 変換処理のファサード
///
/// CRSワークブックをIATIアクティビティXMLに変換するためのメインエントリーポイントです。
///
/// # 使用例
///
/// ```rust,no_run
/// use crs2iati::ConverterBuilder;
/// use std::fs::File;
///
/// # fn main() -> Result<(), crs2iati::CrsToIatiError> {
/// let converter = ConverterBuilder::new().build()?;
/// let input = File::open("crs.xlsx")?;
/// let output = File::create("activities.xml")?;
/// converter.convert(input, output)?;
/// # Ok(())
/// # }
/// ```
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,

    /// 国名解決サービス
    countries: Box<dyn CountryLookup>,

    /// XMLシリアライザ
    writer: XmlWriter,
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("config", &self.config)
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}

impl Converter {
    /// ワークブックを読み込んで`CrsTable`を作る
    pub fn read_table<R: Read + Seek>(&self, input: R) -> Result<CrsTable, CrsToIatiError> {
        WorkbookReader::open(input)?.read_table(&self.config.sheet_selector)
    }

    /// 行集合をアクティビティレコード列に変換する
    pub fn transform(&self, table: &CrsTable) -> Vec<ActivityRecord> {
        transform(table, &*self.countries, self.config.transaction_date)
    }

    /// 生成日時（固定されていなければ現在時刻）
    fn generated_at(&self) -> DateTime<Utc> {
        self.config.generated_at.unwrap_or_else(Utc::now)
    }

    fn document_header(&self, generated_at: DateTime<Utc>) -> DocumentHeader {
        DocumentHeader {
            generated_at: generated_at.format(DATETIME_FORMAT).to_string(),
            namespace_url: self.config.namespace_url.clone(),
        }
    }

    /// アクティビティをルート要素にまとめる
    pub fn build_document(&self, activities: &[ActivityRecord]) -> Element {
        build_document(activities, &self.document_header(self.generated_at()))
    }

    /// CRSワークブックをIATI XMLに変換
    ///
    /// # 引数
    ///
    /// * `input` - ブックを読み込むためのリーダー（Read + Seekトレイトを実装）
    /// * `output` - XML出力先のライター（Writeトレイトを実装）
    ///
    /// # 処理フロー
    ///
    /// 1. ブックの読み込み（シート選択、ヘッダー解決）
    /// 2. 識別子によるグループ化
    /// 3. グループごとのアクティビティ構築
    /// 4. ルート要素の組み立てとシリアライズ
    pub fn convert<R: Read + Seek, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<(), CrsToIatiError> {
        let table = self.read_table(input)?;
        let activities = self.transform(&table);
        let document = self.build_document(&activities);
        self.writer.write(&document, output)
    }

    /// CRSワークブックをIATI XML文字列に変換
    pub fn convert_to_string<R: Read + Seek>(&self, input: R) -> Result<String, CrsToIatiError> {
        let mut buffer = Vec::new();
        self.convert(input, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// CRSワークブックを変換し、日付ディレクトリに書き出す
    ///
    /// ディレクトリ名とアーカイブ名の日付には生成日時の日付を使う。
    pub fn export<R: Read + Seek>(
        &self,
        input: R,
        layout: &ExportLayout,
    ) -> Result<ExportSummary, CrsToIatiError> {
        let table = self.read_table(input)?;
        let activities = self.transform(&table);

        let generated_at = self.generated_at();
        let document = build_document(&activities, &self.document_header(generated_at));
        let mut buffer = Vec::new();
        self.writer.write(&document, &mut buffer)?;

        let (xml_path, zip_path) = layout.write(generated_at.date_naive(), &buffer)?;
        Ok(ExportSummary {
            xml_path,
            zip_path,
            activities: activities.len(),
            rows: table.len(),
        })
    }
}
