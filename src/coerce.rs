//! Coercion Module
//!
//! 型なしのセル値を、各フィールドが必要とする型に変換するアクセサ群。
//! 変換に失敗した場合はエラーにせず`None`（値なし）を返す。
//!
//! 複数の候補列を優先順に試す処理は`probe`で表現する。最初に変換に成功した列が採用され、
//! それ以降の候補は参照されない。

use crate::types::{CellValue, CrsTable};

/// 優先順プローブの結果
///
/// `Found`は採用された値と、その値がどの候補から来たかを示すタグを保持する。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Probe<T, S> {
    /// 候補のいずれかで変換に成功した
    Found(T, S),
    /// すべての候補で変換に失敗した
    Missing,
}

impl<T, S> Probe<T, S> {
    /// `Found`なら`(値, タグ)`を返す
    pub fn found(self) -> Option<(T, S)> {
        match self {
            Probe::Found(value, tag) => Some((value, tag)),
            Probe::Missing => None,
        }
    }
}

/// 候補列を優先順に試し、最初に変換に成功した値を返す
///
/// # 引数
///
/// * `table` - 入力テーブル
/// * `row` - 行インデックス
/// * `candidates` - `(列名, タグ)`の優先順リスト
/// * `accessor` - セル値の変換関数
pub(crate) fn probe<T, S: Copy>(
    table: &CrsTable,
    row: usize,
    candidates: &[(&str, S)],
    accessor: fn(&CellValue) -> Option<T>,
) -> Probe<T, S> {
    candidates
        .iter()
        .find_map(|&(column, tag)| accessor(table.get(row, column)).map(|v| Probe::Found(v, tag)))
        .unwrap_or(Probe::Missing)
}

/// 整数として解釈する
///
/// 数値は0方向に切り捨てる。文字列は前後の空白を除いた整数表記のみ受け付ける（`"3.0"`は不可）。
/// 欠損値、NaN、日時は`None`。
pub(crate) fn as_int(value: &CellValue) -> Option<i64> {
    match value {
        CellValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
        CellValue::Text(s) => s.trim().parse::<i64>().ok(),
        CellValue::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// 0以外の整数として解釈する（コード値用）
pub(crate) fn as_nonzero_int(value: &CellValue) -> Option<i64> {
    as_int(value).filter(|&n| n != 0)
}

/// 浮動小数点数として解釈する
///
/// NaNや無限大になる値は欠損として扱う。
pub(crate) fn as_float(value: &CellValue) -> Option<f64> {
    let parsed = match value {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => s.trim().parse::<f64>().ok(),
        CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// 0以外の浮動小数点数として解釈する
pub(crate) fn as_nonzero_float(value: &CellValue) -> Option<f64> {
    as_float(value).filter(|&n| n != 0.0)
}

/// 空でない文字列として解釈する
///
/// 空白のみの文字列は空として扱う。
pub(crate) fn as_text(value: &CellValue) -> Option<String> {
    value.to_text().filter(|s| !s.trim().is_empty())
}

/// コード値の文字列として解釈する
///
/// 整数値の数値セルは小数部を付けずに表現する（`110.0` -> `"110"`）。
/// 空文字列や`"0"`は値なしとして扱う。
pub(crate) fn as_code(value: &CellValue) -> Option<String> {
    let code = match value {
        CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 => format!("{}", *n as i64),
        other => as_text(other)?.trim().to_string(),
    };
    if code == "0" {
        None
    } else {
        Some(code)
    }
}

/// 日付として解釈する（先頭10文字、`YYYY-MM-DD`精度）
pub(crate) fn as_date(value: &CellValue) -> Option<String> {
    match value {
        CellValue::DateTime(dt) => Some(dt.format("%Y-%m-%d").to_string()),
        other => as_text(other).map(|s| s.trim().chars().take(10).collect()),
    }
}

/// 金額を小数点以下2桁の固定小数点表記にする
pub(crate) fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// 金利を最短の往復可能な表記にする（小数部は最低1桁）
pub(crate) fn format_rate(value: f64) -> String {
    format!("{:?}", value)
}

/// 金額セルを出力用テキストにする
///
/// 数値として解釈できる場合は2桁表記、できない場合は元の文字列をそのまま使う。
pub(crate) fn as_amount_text(value: &CellValue) -> Option<String> {
    match as_float(value) {
        Some(n) => Some(format_amount(n)),
        None => as_text(value).map(|s| s.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_int() {
        assert_eq!(as_int(&CellValue::Number(2.0)), Some(2));
        assert_eq!(as_int(&CellValue::Number(2.9)), Some(2));
        assert_eq!(as_int(&CellValue::Number(-2.9)), Some(-2));
        assert_eq!(as_int(&CellValue::Text(" 3 ".into())), Some(3));
        assert_eq!(as_int(&CellValue::Text("3.0".into())), None);
        assert_eq!(as_int(&CellValue::Text("n/a".into())), None);
        assert_eq!(as_int(&CellValue::Number(f64::NAN)), None);
        assert_eq!(as_int(&CellValue::Missing), None);
    }

    #[test]
    fn test_as_nonzero_int() {
        assert_eq!(as_nonzero_int(&CellValue::Number(0.0)), None);
        assert_eq!(as_nonzero_int(&CellValue::Number(11.0)), Some(11));
    }

    #[test]
    fn test_as_float() {
        assert_eq!(as_float(&CellValue::Number(1234.5)), Some(1234.5));
        assert_eq!(as_float(&CellValue::Text("12.25".into())), Some(12.25));
        assert_eq!(as_float(&CellValue::Text("nan".into())), None);
        assert_eq!(as_float(&CellValue::Text("inf".into())), None);
        assert_eq!(as_float(&CellValue::Number(f64::NAN)), None);
        assert_eq!(as_float(&CellValue::Text("".into())), None);
        assert_eq!(as_float(&CellValue::Missing), None);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(as_text(&CellValue::Text("Water".into())).as_deref(), Some("Water"));
        assert_eq!(as_text(&CellValue::Text("".into())), None);
        assert_eq!(as_text(&CellValue::Text("   ".into())), None);
        assert_eq!(as_text(&CellValue::Missing), None);
    }

    #[test]
    fn test_as_code() {
        assert_eq!(as_code(&CellValue::Text("C01".into())).as_deref(), Some("C01"));
        assert_eq!(as_code(&CellValue::Number(110.0)).as_deref(), Some("110"));
        assert_eq!(as_code(&CellValue::Number(0.0)), None);
        assert_eq!(as_code(&CellValue::Text("".into())), None);
        assert_eq!(as_code(&CellValue::Missing), None);
    }

    #[test]
    fn test_as_date_truncates() {
        assert_eq!(
            as_date(&CellValue::Text("2017-10-01T00:00:00".into())).as_deref(),
            Some("2017-10-01")
        );
        assert_eq!(as_date(&CellValue::Text("2017".into())).as_deref(), Some("2017"));
        assert_eq!(as_date(&CellValue::Missing), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.5), "1234.50");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-17.0), "-17.00");
        assert_eq!(format_amount(2.675), "2.67");
        assert_eq!(format_amount(99.999), "100.00");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(5.0), "5.0");
        assert_eq!(format_rate(0.035), "0.035");
    }

    #[test]
    fn test_probe_first_success_wins() {
        let table = CrsTable::from_rows(
            ["a", "b", "c"],
            vec![vec![CellValue::Text("x".into()), 2.0.into(), 3.0.into()]],
        );
        let result = probe(&table, 0, &[("a", 'a'), ("b", 'b'), ("c", 'c')], as_float);
        assert_eq!(result, Probe::Found(2.0, 'b'));
    }

    #[test]
    fn test_probe_all_missing() {
        let table = CrsTable::from_rows(["a"], vec![vec![CellValue::Missing]]);
        let result = probe(&table, 0, &[("a", 1u8), ("zz", 2u8)], as_float);
        assert_eq!(result, Probe::Missing);
        assert_eq!(result.found(), None);
    }
}
