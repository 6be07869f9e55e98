//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。
//! 変換コアは`CrsTable::get(row, column)`経由でのみ入力データにアクセスする。

use std::collections::HashMap;

use chrono::NaiveDateTime;

/// セルの値を表す列挙型
///
/// 入力の値は型なしで届くため、各フィールドは`coerce`モジュールで必要な型に変換される。
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 数値（f64）
    Number(f64),

    /// 文字列
    Text(String),

    /// 論理値
    Bool(bool),

    /// 日時（Excelの日付セル）
    DateTime(NaiveDateTime),

    /// 欠損値（空セル、エラーセル、列自体が存在しない場合）
    Missing,
}

static MISSING: CellValue = CellValue::Missing;

impl CellValue {
    /// 欠損値かどうかを判定
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// 値をそのまま文字列として表現する（欠損値は`None`）
    ///
    /// 数値は小数部を必ず含む最短表現（`5.0`, `0.035`）、日時は`YYYY-MM-DD HH:MM:SS`になる。
    pub fn to_text(&self) -> Option<String> {
        match self {
            CellValue::Number(n) if n.is_nan() => None,
            CellValue::Number(n) => Some(format!("{:?}", n)),
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
            CellValue::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            CellValue::Missing => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::DateTime(value)
    }
}

/// 列名付きの行データ（CRSシート1枚分）
///
/// 先頭行のヘッダーから列名 -> 列インデックスの対応を作り、
/// `get(row, column)`で任意のセルを取り出せるようにする。
/// 存在しない列や範囲外のセルは`CellValue::Missing`として返す。
#[derive(Debug, Clone, Default)]
pub struct CrsTable {
    /// ヘッダー（列名）
    headers: Vec<String>,
    /// 列名 -> 列インデックス
    index: HashMap<String, usize>,
    /// 行データ（ヘッダー行を含まない）
    rows: Vec<Vec<CellValue>>,
}

impl CrsTable {
    /// ヘッダーから空のテーブルを生成
    ///
    /// 同名の列が複数ある場合は、最初に現れた列が使われる。
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(headers.len());
        for (col, name) in headers.iter().enumerate() {
            index.entry(name.clone()).or_insert(col);
        }
        Self {
            headers,
            index,
            rows: Vec::new(),
        }
    }

    /// ヘッダーと行データからテーブルを生成
    pub fn from_rows<S: Into<String>>(
        headers: impl IntoIterator<Item = S>,
        rows: Vec<Vec<CellValue>>,
    ) -> Self {
        let mut table = Self::new(headers);
        table.rows = rows;
        table
    }

    /// 行を追加
    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 行が1つもないかどうか
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// ヘッダー（列名）の一覧
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// 指定した列が存在するかどうか
    pub fn has_column(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    /// セルの値を取得
    ///
    /// 列が存在しない、または行が短い場合は`CellValue::Missing`を返す。
    pub fn get(&self, row: usize, column: &str) -> &CellValue {
        self.index
            .get(column)
            .and_then(|&col| self.rows.get(row).and_then(|cells| cells.get(col)))
            .unwrap_or(&MISSING)
    }
}
