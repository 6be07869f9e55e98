//! Grouper Module
//!
//! 取引行をアクティビティ識別子ごとにまとめるモジュール。
//! 識別子は数字以外の文字を取り除いて正規化し、最初に現れた順序でグループを並べる。

use std::collections::HashMap;

use crate::columns;
use crate::types::{CellValue, CrsTable};

/// 数字を1つも含まない識別子に割り当てるキー
pub const FALLBACK_ID: &str = "000";

/// 同じ正規化識別子を持つ行の集まり
///
/// `rows`は空にならず、入力での出現順に並ぶ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// 正規化済みのアクティビティ識別子
    pub id: String,
    /// グループに属する行インデックス（先頭が基準行）
    pub rows: Vec<usize>,
}

impl Group {
    /// ヘッダー情報を取る基準行
    pub fn base_row(&self) -> usize {
        self.rows[0]
    }
}

/// 識別子の生の値を正規化する
///
/// 数字以外の文字をすべて取り除く。数字が残らない場合（空、文字のみ、欠損値）は
/// `"000"`を返すため、そのような行はすべて1つのグループにまとまる。
/// 整数値の数値セルは小数部なしの表記から数字を取り出す（`12345.0` -> `"12345"`）。
pub fn normalize_id(value: &CellValue) -> String {
    let raw = match value {
        CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 => format!("{}", *n as i64),
        other => other.to_text().unwrap_or_default(),
    };
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        FALLBACK_ID.to_string()
    } else {
        digits
    }
}

/// 行集合を正規化識別子で分割する
///
/// すべての行はちょうど1つのグループに属する。グループの順序は識別子が最初に
/// 現れた順序になる。空の入力には空の結果を返す。
pub fn group(table: &CrsTable) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in 0..table.len() {
        let id = normalize_id(table.get(row, columns::CRS_ID_NUMBER));
        match positions.get(&id) {
            Some(&pos) => groups[pos].rows.push(row),
            None => {
                positions.insert(id.clone(), groups.len());
                groups.push(Group { id, rows: vec![row] });
            }
        }
    }

    groups
}
