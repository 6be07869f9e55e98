//! Workbook Reader
//!
//! calamineのラッパーとして、シート選択とセル値の変換を行う。

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::io::{Cursor, Read, Seek};
use tracing::{info, warn};

use crate::api::SheetSelector;
use crate::columns;
use crate::error::CrsToIatiError;
use crate::security::SecurityConfig;
use crate::types::{CellValue, CrsTable};

/// ワークブックリーダー
///
/// XLSX/XLS/ODSのいずれの形式でも開ける。
pub struct WorkbookReader {
    sheets: Sheets<Cursor<Vec<u8>>>,
}

impl WorkbookReader {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - ブックを読み込むためのリーダー（Read + Seekトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookReader)` - ワークブックの読み込みに成功した場合
    /// * `Err(CrsToIatiError::SecurityViolation)` - 入力サイズが上限を超えた場合
    /// * `Err(CrsToIatiError::Parse)` - ワークブックとして解釈できない場合
    pub fn open<R: Read + Seek>(mut reader: R) -> Result<Self, CrsToIatiError> {
        let security_config = SecurityConfig::default();

        let mut buffer = Vec::new();
        let bytes_read = reader.read_to_end(&mut buffer)?;
        security_config.check_input_size(bytes_read)?;

        let sheets = open_workbook_auto_from_rs(Cursor::new(buffer))?;
        Ok(Self { sheets })
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// シート選択方式に基づいてシート名を解決
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 選択されたシート名
    /// * `Err(CrsToIatiError::Config)` - シートが見つからない、またはインデックスが範囲外の場合
    pub fn select_sheet(&self, selector: &SheetSelector) -> Result<String, CrsToIatiError> {
        let all_sheet_names = self.sheet_names();

        match selector {
            SheetSelector::First => all_sheet_names
                .into_iter()
                .next()
                .ok_or_else(|| CrsToIatiError::Config("Workbook has no sheets".to_string())),

            SheetSelector::Index(index) => {
                all_sheet_names.get(*index).cloned().ok_or_else(|| {
                    CrsToIatiError::Config(format!(
                        "Sheet index {} is out of range (total: {})",
                        index,
                        all_sheet_names.len()
                    ))
                })
            }

            SheetSelector::Name(name) => {
                if !all_sheet_names.contains(name) {
                    return Err(CrsToIatiError::Config(format!("Sheet '{}' not found", name)));
                }
                Ok(name.clone())
            }
        }
    }

    /// シートを読み込んで`CrsTable`を作る
    ///
    /// 先頭行をヘッダーとし、すべてのセルが空の行は読み飛ばす。
    pub fn read_table(&mut self, selector: &SheetSelector) -> Result<CrsTable, CrsToIatiError> {
        let sheet_name = self.select_sheet(selector)?;
        let range = self.sheets.worksheet_range(&sheet_name)?;
        let table = table_from_range(&range);

        info!(
            sheet = %sheet_name,
            rows = table.len(),
            columns = table.headers().len(),
            "Loaded CRS sheet"
        );
        for column in columns::ALL {
            if !table.has_column(column) {
                warn!(column = *column, "Expected CRS column is absent; values treated as missing");
            }
        }

        Ok(table)
    }
}

/// セル範囲からテーブルを構築する
fn table_from_range(range: &Range<Data>) -> CrsTable {
    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(header_name).collect(),
        None => return CrsTable::default(),
    };
    let width = headers.len();
    let mut table = CrsTable::new(headers);

    for row in rows {
        let mut cells: Vec<CellValue> = row.iter().take(width).map(convert_cell).collect();
        if cells.iter().all(CellValue::is_missing) {
            continue;
        }
        cells.resize(width, CellValue::Missing);
        table.push_row(cells);
    }

    table
}

fn header_name(cell: &Data) -> String {
    match convert_cell(cell) {
        CellValue::Number(n) if n.fract() == 0.0 => format!("{}", n as i64),
        other => other.to_text().unwrap_or_default().trim().to_string(),
    }
}

/// calamineのセル値を変換
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => excel_serial_to_datetime(dt.as_f64())
            .map(CellValue::DateTime)
            .unwrap_or(CellValue::Missing),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        _ => CellValue::Missing,
    }
}

/// Excelのシリアル値（1900年システム）を日時に変換
///
/// 1899年12月30日起算。ミリ秒単位で丸める。
pub(crate) fn excel_serial_to_datetime(serial_value: f64) -> Option<NaiveDateTime> {
    if !serial_value.is_finite() {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial_value * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(Duration::try_milliseconds(millis)?)
}
