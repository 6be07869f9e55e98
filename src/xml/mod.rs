//! XML Module
//!
//! 出力用の抽象要素ツリーと、quick-xmlによるシリアライザを提供するモジュール。
//! 変換コアは`Element`ツリーだけを生成し、テキスト化は`XmlWriter`が担当する。

mod element;
mod writer;

pub use element::Element;
pub use writer::XmlWriter;
