//! Country Lookup Module
//!
//! 受取国名をISO 3166-1 alpha-2コードに解決する。
//! 正式名（name）、通称（common name）、公式名（official name）の順に照合し、
//! どれにも一致しなければ`None`を返す（エラーにはしない）。

mod iso3166;

use std::collections::HashMap;

/// 国名 -> 国コードの解決サービス
///
/// 変換コアはこのトレイト経由でのみ国名を解決する。
/// 独自の参照表を使いたい場合は、このトレイトを実装して
/// `ConverterBuilder::with_country_lookup`に渡す。
pub trait CountryLookup: Send + Sync {
    /// 国名を2文字の国コードに解決する
    fn resolve(&self, name: &str) -> Option<String>;
}

impl<F> CountryLookup for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn resolve(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// 参照表の1エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    pub alpha_2: String,
    pub name: String,
    pub common_name: Option<String>,
    pub official_name: Option<String>,
}

/// 国名参照表
///
/// 照合は前後の空白を除き、大文字小文字を区別しない。
#[derive(Debug, Clone)]
pub struct CountryTable {
    entries: Vec<CountryEntry>,
    by_name: HashMap<String, usize>,
    by_common_name: HashMap<String, usize>,
    by_official_name: HashMap<String, usize>,
}

impl Default for CountryTable {
    fn default() -> Self {
        Self::iso3166()
    }
}

fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl CountryTable {
    /// 組み込みのISO 3166-1参照表
    pub fn iso3166() -> Self {
        Self::from_entries(iso3166::COUNTRIES.iter().map(
            |&(alpha_2, name, common_name, official_name)| CountryEntry {
                alpha_2: alpha_2.to_string(),
                name: name.to_string(),
                common_name: common_name.map(str::to_string),
                official_name: official_name.map(str::to_string),
            },
        ))
    }

    /// 任意のエントリから参照表を作る
    ///
    /// 同じ名前が複数のエントリにある場合は、先に現れたエントリが優先される。
    pub fn from_entries(entries: impl IntoIterator<Item = CountryEntry>) -> Self {
        let entries: Vec<CountryEntry> = entries.into_iter().collect();
        let mut by_name = HashMap::new();
        let mut by_common_name = HashMap::new();
        let mut by_official_name = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            by_name.entry(lookup_key(&entry.name)).or_insert(idx);
            if let Some(ref common) = entry.common_name {
                by_common_name.entry(lookup_key(common)).or_insert(idx);
            }
            if let Some(ref official) = entry.official_name {
                by_official_name.entry(lookup_key(official)).or_insert(idx);
            }
        }

        Self {
            entries,
            by_name,
            by_common_name,
            by_official_name,
        }
    }

    /// エントリ数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// エントリが1つもないかどうか
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CountryLookup for CountryTable {
    fn resolve(&self, name: &str) -> Option<String> {
        let key = lookup_key(name);
        if key.is_empty() {
            return None;
        }

        [&self.by_name, &self.by_common_name, &self.by_official_name]
            .iter()
            .find_map(|index| index.get(&key))
            .map(|&idx| self.entries[idx].alpha_2.clone())
    }
}
