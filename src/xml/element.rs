//! Element Tree
//!
//! 名前、属性、テキスト、子要素だけを持つシンプルな要素ツリー。
//! 名前空間付きの名前はコロン区切りの文字列（`dac:loan-terms`）としてそのまま保持する。

/// XML要素
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// 要素名
    pub name: String,
    /// 属性（挿入順を保持）
    pub attributes: Vec<(String, String)>,
    /// テキスト内容
    pub text: Option<String>,
    /// 子要素
    pub children: Vec<Element>,
}

impl Element {
    /// 新しい要素を生成
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// 属性を追加する
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// 値がある場合のみ属性を追加する
    pub fn attr_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(key, value),
            None => self,
        }
    }

    /// テキスト内容を設定する
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// 子要素を追加する
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// 子要素をまとめて追加する（`None`は無視）
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Option<Element>>,
    {
        self.children.extend(children.into_iter().flatten());
        self
    }

    /// 子要素を追加する（可変参照版）
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// 属性値を取得
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 指定した名前の最初の子要素を取得
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// 指定した名前の子要素をすべて取得
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }
}
