//! Records Module
//!
//! マッパーが生成するアクティビティレコードの型と、その要素ツリーへの変換を定義する。
//!
//! レコードは構築後に変更されない。CRS-Addブロックは2段階で作られる:
//! マッパーが行ごとの`CrsAddEntry`を順に積み上げ、`CrsAddRecord::materialize`が
//! 空のブロックを取り除いた最終形を返す（残すものがなければ`None`）。

use crate::coerce::{format_amount, format_rate};
use crate::columns;
use crate::xml::Element;

/// アクティビティ識別子の種別（CRS識別子）
pub const IDENTIFIER_TYPE: &str = "A2";

/// 政策マーカーの語彙（OECD DAC CRS）
pub const POLICY_MARKER_VOCABULARY: &str = "1";

/// セクター配分率（1取引に1セクター）
pub const SECTOR_PERCENTAGE: &str = "100";

// ============================================================================
// CODE LISTS
// ============================================================================

/// 政策マーカーの種類（コード1〜9）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyMarkerKind {
    GenderEquality,
    AidToEnvironment,
    ParticipatoryDevelopment,
    TradeDevelopment,
    Biodiversity,
    ClimateMitigation,
    ClimateAdaptation,
    Desertification,
    MaternalChildHealth,
}

impl PolicyMarkerKind {
    /// コード順のすべての種類
    pub const ALL: [PolicyMarkerKind; 9] = [
        PolicyMarkerKind::GenderEquality,
        PolicyMarkerKind::AidToEnvironment,
        PolicyMarkerKind::ParticipatoryDevelopment,
        PolicyMarkerKind::TradeDevelopment,
        PolicyMarkerKind::Biodiversity,
        PolicyMarkerKind::ClimateMitigation,
        PolicyMarkerKind::ClimateAdaptation,
        PolicyMarkerKind::Desertification,
        PolicyMarkerKind::MaternalChildHealth,
    ];

    /// IATIコード
    pub fn code(self) -> &'static str {
        match self {
            PolicyMarkerKind::GenderEquality => "1",
            PolicyMarkerKind::AidToEnvironment => "2",
            PolicyMarkerKind::ParticipatoryDevelopment => "3",
            PolicyMarkerKind::TradeDevelopment => "4",
            PolicyMarkerKind::Biodiversity => "5",
            PolicyMarkerKind::ClimateMitigation => "6",
            PolicyMarkerKind::ClimateAdaptation => "7",
            PolicyMarkerKind::Desertification => "8",
            PolicyMarkerKind::MaternalChildHealth => "9",
        }
    }

    /// 元データの列名
    pub fn column(self) -> &'static str {
        match self {
            PolicyMarkerKind::GenderEquality => columns::GENDER_EQUITY,
            PolicyMarkerKind::AidToEnvironment => columns::AID_TO_ENVIRONMENT,
            PolicyMarkerKind::ParticipatoryDevelopment => columns::PD_GG,
            PolicyMarkerKind::TradeDevelopment => columns::TRADE_DEVELOPMENT,
            PolicyMarkerKind::Biodiversity => columns::BIODIVERSITY,
            PolicyMarkerKind::ClimateMitigation => columns::MITIGATION,
            PolicyMarkerKind::ClimateAdaptation => columns::ADAPTATION,
            PolicyMarkerKind::Desertification => columns::DESERTIFICATION,
            PolicyMarkerKind::MaternalChildHealth => columns::RMNCH,
        }
    }
}

/// 取引種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// 支出（コード3）
    Disbursement,
    /// 約束（コード2）
    Commitment,
    /// 受取資金（コード6）
    IncomingFunds,
}

impl TransactionType {
    /// IATIコード
    pub fn code(self) -> &'static str {
        match self {
            TransactionType::Disbursement => "3",
            TransactionType::Commitment => "2",
            TransactionType::IncomingFunds => "6",
        }
    }
}

/// タイド状況
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiedStatusKind {
    /// アンタイド（コード5）
    Untied,
    /// 部分タイド（コード3）
    PartiallyTied,
    /// タイド（コード4）
    Tied,
}

impl TiedStatusKind {
    /// IATIコード
    pub fn code(self) -> &'static str {
        match self {
            TiedStatusKind::Untied => "5",
            TiedStatusKind::PartiallyTied => "3",
            TiedStatusKind::Tied => "4",
        }
    }
}

/// CRS-Addのother-flags（コード1〜4）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherFlagKind {
    /// 独立技術協力（FTC）
    FreeStandingTechnicalCooperation,
    /// プログラム・ベースド・アプローチ
    ProgrammeBasedApproach,
    /// 投資プロジェクト
    InvestmentProject,
    /// 関連融資（AF）
    AssociatedFinancing,
}

impl OtherFlagKind {
    /// コード順のすべての種類
    pub const ALL: [OtherFlagKind; 4] = [
        OtherFlagKind::FreeStandingTechnicalCooperation,
        OtherFlagKind::ProgrammeBasedApproach,
        OtherFlagKind::InvestmentProject,
        OtherFlagKind::AssociatedFinancing,
    ];

    /// IATIコード
    pub fn code(self) -> &'static str {
        match self {
            OtherFlagKind::FreeStandingTechnicalCooperation => "1",
            OtherFlagKind::ProgrammeBasedApproach => "2",
            OtherFlagKind::InvestmentProject => "3",
            OtherFlagKind::AssociatedFinancing => "4",
        }
    }

    /// 元データの列名
    pub fn column(self) -> &'static str {
        match self {
            OtherFlagKind::FreeStandingTechnicalCooperation => columns::FTC,
            OtherFlagKind::ProgrammeBasedApproach => columns::PROGRAMME_BASED_APPROACH,
            OtherFlagKind::InvestmentProject => columns::INVESTMENT_PROJECT,
            OtherFlagKind::AssociatedFinancing => columns::AF,
        }
    }

    /// `ALL`内での位置
    pub fn index(self) -> usize {
        match self {
            OtherFlagKind::FreeStandingTechnicalCooperation => 0,
            OtherFlagKind::ProgrammeBasedApproach => 1,
            OtherFlagKind::InvestmentProject => 2,
            OtherFlagKind::AssociatedFinancing => 3,
        }
    }
}

/// CRS-Addのother-amounts（コード1〜4）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherAmountKind {
    /// 現物技術協力（irtc）
    InKindTechnicalCooperation,
    /// 専門家派遣（約束額）
    ExpertCommitment,
    /// 専門家派遣（支出額）
    ExpertExtended,
    /// 輸出信用
    ExportCredit,
}

impl OtherAmountKind {
    /// コード順のすべての種類
    pub const ALL: [OtherAmountKind; 4] = [
        OtherAmountKind::InKindTechnicalCooperation,
        OtherAmountKind::ExpertCommitment,
        OtherAmountKind::ExpertExtended,
        OtherAmountKind::ExportCredit,
    ];

    /// IATIコード
    pub fn code(self) -> &'static str {
        match self {
            OtherAmountKind::InKindTechnicalCooperation => "1",
            OtherAmountKind::ExpertCommitment => "2",
            OtherAmountKind::ExpertExtended => "3",
            OtherAmountKind::ExportCredit => "4",
        }
    }

    /// 元データの列名
    pub fn column(self) -> &'static str {
        match self {
            OtherAmountKind::InKindTechnicalCooperation => columns::IRTC,
            OtherAmountKind::ExpertCommitment => columns::EXPERT_COMMITMENT,
            OtherAmountKind::ExpertExtended => columns::EXPERT_EXTENDED,
            OtherAmountKind::ExportCredit => columns::EXPORT_CREDIT,
        }
    }
}

// ============================================================================
// ACTIVITY
// ============================================================================

/// 政策マーカー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyMarker {
    pub kind: PolicyMarkerKind,
    pub significance: i64,
}

/// アクティビティのヘッダー（基準行から作られる）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityHeader {
    pub title: Option<String>,
    pub description: Option<String>,
    /// 計画開始日（`YYYY-MM-DD`）
    pub planned_start: Option<String>,
    /// 実績終了日（`YYYY-MM-DD`）
    pub actual_end: Option<String>,
    pub location: Option<String>,
    /// コード順、値のあるものだけ
    pub policy_markers: Vec<PolicyMarker>,
    pub collaboration_type: Option<i64>,
    pub default_flow_type: Option<i64>,
    pub default_finance_type: Option<i64>,
    pub default_aid_type: Option<String>,
}

/// 取引レコード（1行から1件）
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// 金額列がどれも解釈できなかった場合は`None`
    pub transaction_type: Option<TransactionType>,
    pub amount: f64,
    /// 取引日および金額の基準日
    pub value_date: String,
    /// ISO 3166-1 alpha-2
    pub recipient_country: Option<String>,
    /// DACセクター（目的）コード
    pub sector: Option<i64>,
    pub tied_status: Option<TiedStatus>,
}

/// タイド状況のサブブロック
#[derive(Debug, Clone, PartialEq)]
pub struct TiedStatus {
    pub kind: TiedStatusKind,
    pub amount: f64,
    pub value_date: String,
}

/// アクティビティレコード
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    /// 正規化済み識別子
    pub identifier: String,
    pub header: ActivityHeader,
    /// グループ内の行順
    pub transactions: Vec<TransactionRecord>,
    /// other-flagsが1つもない場合は`None`
    pub crs_add: Option<CrsAddRecord>,
}

// ============================================================================
// CRS-ADD
// ============================================================================

/// 融資条件（`dac:loan-terms`）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanTerms {
    pub rate_1: Option<f64>,
    pub rate_2: Option<f64>,
    pub repayment_type: Option<i64>,
    pub repayment_plan: Option<i64>,
    pub repayment_first_date: Option<String>,
    pub repayment_final_date: Option<String>,
}

impl LoanTerms {
    /// 返済に関する子要素が1つでもあるか
    pub fn has_repayment(&self) -> bool {
        self.repayment_type.is_some()
            || self.repayment_plan.is_some()
            || self.repayment_first_date.is_some()
            || self.repayment_final_date.is_some()
    }
}

/// 融資状況のスナップショット（`loan-status`）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanStatus {
    pub year: Option<i64>,
    pub value_date: Option<String>,
    pub interest_received: Option<f64>,
    pub principal_outstanding: Option<f64>,
    pub principal_arrears: Option<f64>,
    pub interest_arrears: Option<f64>,
}

/// その他金額（`dac:other-amounts`）
#[derive(Debug, Clone, PartialEq)]
pub struct OtherAmount {
    pub kind: OtherAmountKind,
    pub value: String,
    /// その行の約束日
    pub value_date: Option<String>,
}

/// 民間資金動員（`dac:mobilisation`）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mobilisation {
    pub leverage: Option<i64>,
    pub origin: Option<i64>,
    pub amount: Option<f64>,
}

/// CRS-Addブロックの子要素（出現順に保持する）
#[derive(Debug, Clone, PartialEq)]
pub enum CrsAddEntry {
    OtherFlag {
        kind: OtherFlagKind,
        significance: i64,
    },
    LoanTerms(LoanTerms),
    GrantEquivalent(f64),
    LoanStatus(LoanStatus),
    ChannelCode(i64),
    ChannelDescription(String),
    ReportingYear(i64),
    DonorCode(i64),
    Agency(i64),
    NatureOfSubmission(i64),
    CommitmentDate(String),
    Currency(i64),
    OtherAmount(OtherAmount),
    Mobilisation(Mobilisation),
}

/// 確定済みのCRS-Addブロック
///
/// 少なくとも1つのother-flagsを含み、返済情報のない融資条件は含まない。
#[derive(Debug, Clone, PartialEq)]
pub struct CrsAddRecord {
    entries: Vec<CrsAddEntry>,
}

impl CrsAddRecord {
    /// 下書きのエントリ列から最終的なブロックを作る
    ///
    /// 1. 返済情報のない`LoanTerms`を取り除く
    /// 2. `OtherFlag`が1つもなければ、他に値があってもブロック全体を破棄する
    pub fn materialize(entries: Vec<CrsAddEntry>) -> Option<Self> {
        let entries: Vec<CrsAddEntry> = entries
            .into_iter()
            .filter(|entry| match entry {
                CrsAddEntry::LoanTerms(terms) => terms.has_repayment(),
                _ => true,
            })
            .collect();

        let has_flag = entries
            .iter()
            .any(|entry| matches!(entry, CrsAddEntry::OtherFlag { .. }));

        has_flag.then_some(Self { entries })
    }

    /// 子要素のエントリ
    pub fn entries(&self) -> &[CrsAddEntry] {
        &self.entries
    }
}

// ============================================================================
// ELEMENT MATERIALIZATION
// ============================================================================

fn narrative_block(name: &str, text: &str) -> Element {
    Element::new(name).child(Element::new("narrative").text(text))
}

impl ActivityRecord {
    /// `iati-activity`要素に変換する
    ///
    /// # 引数
    ///
    /// * `last_updated` - `last-updated-datetime`属性の値
    pub fn to_element(&self, last_updated: &str) -> Element {
        let header = &self.header;

        let mut activity = Element::new("iati-activity")
            .attr("last-updated-datetime", last_updated)
            .attr("xml:lang", "en")
            .attr("hierarchy", "1")
            .child(
                Element::new("other-identifier")
                    .attr("ref", self.identifier.as_str())
                    .attr("type", IDENTIFIER_TYPE),
            )
            .children([
                header.title.as_deref().map(|t| narrative_block("title", t)),
                header
                    .description
                    .as_deref()
                    .map(|d| narrative_block("description", d)),
                header.planned_start.as_deref().map(|date| {
                    Element::new("activity-date")
                        .attr("type", "1")
                        .attr("iso-date", date)
                }),
                header.actual_end.as_deref().map(|date| {
                    Element::new("activity-date")
                        .attr("type", "3")
                        .attr("iso-date", date)
                }),
                header
                    .location
                    .as_deref()
                    .map(|name| Element::new("location").child(narrative_block("name", name))),
            ]);

        for marker in &header.policy_markers {
            activity.push(
                Element::new("policy-marker")
                    .attr("code", marker.kind.code())
                    .attr("vocabulary", POLICY_MARKER_VOCABULARY)
                    .attr("significance", marker.significance.to_string()),
            );
        }

        let code_element = |name: &str, code: Option<String>| {
            code.map(|code| Element::new(name).attr("code", code))
        };
        activity = activity.children([
            code_element(
                "collaboration-type",
                header.collaboration_type.map(|c| c.to_string()),
            ),
            code_element(
                "default-flow-type",
                header.default_flow_type.map(|c| c.to_string()),
            ),
            code_element(
                "default-finance-type",
                header.default_finance_type.map(|c| c.to_string()),
            ),
            code_element("default-aid-type", header.default_aid_type.clone()),
        ]);

        for transaction in &self.transactions {
            activity.push(transaction.to_element());
        }

        if let Some(ref crs_add) = self.crs_add {
            activity.push(crs_add.to_element());
        }

        activity
    }
}

impl TransactionRecord {
    /// `transaction`要素に変換する
    pub fn to_element(&self) -> Element {
        Element::new("transaction").children([
            self.transaction_type
                .map(|t| Element::new("transaction-type").attr("code", t.code())),
            Some(Element::new("transaction-date").attr("iso-date", self.value_date.as_str())),
            Some(
                Element::new("value")
                    .attr("value-date", self.value_date.as_str())
                    .text(format_amount(self.amount)),
            ),
            self.recipient_country
                .as_deref()
                .map(|code| Element::new("recipient-country").attr("code", code)),
            self.sector.map(|code| {
                Element::new("sector")
                    .attr("code", code.to_string())
                    .attr("percentage", SECTOR_PERCENTAGE)
            }),
            self.tied_status.as_ref().map(|tied| {
                Element::new("dac:tied-status")
                    .attr("code", tied.kind.code())
                    .child(
                        Element::new("dac:value")
                            .attr("value-date", tied.value_date.as_str())
                            .text(format_amount(tied.amount)),
                    )
            }),
        ])
    }
}

impl CrsAddRecord {
    /// `crs-add`要素に変換する
    pub fn to_element(&self) -> Element {
        let mut crs_add = Element::new("crs-add");
        for entry in &self.entries {
            crs_add.push(entry.to_element());
        }
        crs_add
    }
}

impl CrsAddEntry {
    fn to_element(&self) -> Element {
        match self {
            CrsAddEntry::OtherFlag { kind, significance } => Element::new("other-flags")
                .attr("code", kind.code())
                .attr("significance", significance.to_string()),
            CrsAddEntry::LoanTerms(terms) => Element::new("dac:loan-terms")
                .attr_opt("rate-1", terms.rate_1.map(format_rate))
                .attr_opt("rate-2", terms.rate_2.map(format_rate))
                .children([
                    terms.repayment_type.map(|c| {
                        Element::new("dac:repayment-type").attr("code", c.to_string())
                    }),
                    terms.repayment_plan.map(|c| {
                        Element::new("dac:repayment-plan").attr("code", c.to_string())
                    }),
                    terms.repayment_first_date.as_deref().map(|date| {
                        Element::new("dac:repayment-first-date").attr("iso-date", date)
                    }),
                    terms.repayment_final_date.as_deref().map(|date| {
                        Element::new("dac:repayment-final-date").attr("iso-date", date)
                    }),
                ]),
            CrsAddEntry::GrantEquivalent(value) => {
                Element::new("dac:grant-equivalent").attr("value", format_amount(*value))
            }
            CrsAddEntry::LoanStatus(status) => {
                let amount = |name: &str, value: Option<f64>| {
                    value.map(|v| Element::new(name).text(format_amount(v)))
                };
                Element::new("loan-status")
                    .attr_opt("year", status.year.map(|y| y.to_string()))
                    .attr_opt("value-date", status.value_date.as_deref())
                    .children([
                        amount("interest-received", status.interest_received),
                        amount("principal-outstanding", status.principal_outstanding),
                        amount("principal-arrears", status.principal_arrears),
                        amount("interest-arrears", status.interest_arrears),
                    ])
            }
            CrsAddEntry::ChannelCode(code) => Element::new("channel-code").text(code.to_string()),
            CrsAddEntry::ChannelDescription(name) => {
                narrative_block("dac:channel-description", name)
            }
            CrsAddEntry::ReportingYear(year) => {
                Element::new("dac:reporting-year").text(year.to_string())
            }
            CrsAddEntry::DonorCode(code) => {
                Element::new("dac:donorcode").attr("code", code.to_string())
            }
            CrsAddEntry::Agency(code) => Element::new("dac:agency").attr("code", code.to_string()),
            CrsAddEntry::NatureOfSubmission(code) => {
                Element::new("dac:nature-submission").attr("code", code.to_string())
            }
            CrsAddEntry::CommitmentDate(date) => {
                Element::new("dac:commitment-date").attr("iso-date", date.as_str())
            }
            CrsAddEntry::Currency(code) => {
                Element::new("dac:currency").attr("code", code.to_string())
            }
            CrsAddEntry::OtherAmount(other) => Element::new("dac:other-amounts")
                .attr("code", other.kind.code())
                .child(
                    Element::new("dac:value")
                        .attr_opt("value-date", other.value_date.as_deref())
                        .text(other.value.as_str()),
                ),
            CrsAddEntry::Mobilisation(mobilisation) => Element::new("dac:mobilisation").children([
                mobilisation.leverage.map(|c| {
                    Element::new("dac:mobilisation-leverage").attr("code", c.to_string())
                }),
                mobilisation.origin.map(|c| {
                    Element::new("dac:mobilisation-origin").attr("code", c.to_string())
                }),
                mobilisation
                    .amount
                    .map(|v| Element::new("dac:value").text(format_amount(v))),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag(kind: OtherFlagKind, significance: i64) -> CrsAddEntry {
        CrsAddEntry::OtherFlag { kind, significance }
    }

    #[test]
    fn test_materialize_drops_block_without_flags() {
        let entries = vec![
            CrsAddEntry::GrantEquivalent(1200.0),
            CrsAddEntry::ChannelCode(11000),
        ];
        assert_eq!(CrsAddRecord::materialize(entries), None);
    }

    #[test]
    fn test_materialize_drops_loan_terms_without_repayment() {
        let entries = vec![
            flag(OtherFlagKind::FreeStandingTechnicalCooperation, 1),
            CrsAddEntry::LoanTerms(LoanTerms {
                rate_1: Some(2.5),
                ..Default::default()
            }),
            CrsAddEntry::LoanTerms(LoanTerms {
                rate_1: Some(1.0),
                repayment_plan: Some(2),
                ..Default::default()
            }),
        ];
        let record = CrsAddRecord::materialize(entries).unwrap();
        assert_eq!(record.entries().len(), 2);
        assert!(matches!(
            record.entries()[1],
            CrsAddEntry::LoanTerms(LoanTerms { rate_1: Some(r), .. }) if r == 1.0
        ));
    }

    #[test]
    fn test_transaction_element_without_type() {
        let transaction = TransactionRecord {
            transaction_type: None,
            amount: 0.0,
            value_date: "2017-01-01".into(),
            recipient_country: None,
            sector: None,
            tied_status: None,
        };
        let element = transaction.to_element();
        assert!(element.find("transaction-type").is_none());
        assert_eq!(element.find("value").unwrap().text.as_deref(), Some("0.00"));
        assert_eq!(
            element.find("transaction-date").unwrap().attribute("iso-date"),
            Some("2017-01-01")
        );
    }

    #[test]
    fn test_transaction_element_full() {
        let transaction = TransactionRecord {
            transaction_type: Some(TransactionType::Disbursement),
            amount: 1234.5,
            value_date: "2017-01-01".into(),
            recipient_country: Some("KE".into()),
            sector: Some(14030),
            tied_status: Some(TiedStatus {
                kind: TiedStatusKind::PartiallyTied,
                amount: 10.0,
                value_date: "2017-01-01".into(),
            }),
        };
        let element = transaction.to_element();
        let names: Vec<&str> = element.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "transaction-type",
                "transaction-date",
                "value",
                "recipient-country",
                "sector",
                "dac:tied-status"
            ]
        );
        assert_eq!(element.find("value").unwrap().text.as_deref(), Some("1234.50"));
        assert_eq!(element.find("sector").unwrap().attribute("percentage"), Some("100"));
        let tied = element.find("dac:tied-status").unwrap();
        assert_eq!(tied.attribute("code"), Some("3"));
        assert_eq!(tied.find("dac:value").unwrap().text.as_deref(), Some("10.00"));
    }

    #[test]
    fn test_loan_status_attributes_are_independent() {
        let entry = CrsAddEntry::LoanStatus(LoanStatus {
            value_date: Some("2016-05-01".into()),
            principal_arrears: Some(3.0),
            ..Default::default()
        });
        let element = entry.to_element();
        assert_eq!(element.attribute("year"), None);
        assert_eq!(element.attribute("value-date"), Some("2016-05-01"));
        assert_eq!(element.children.len(), 1);
        assert_eq!(element.children[0].name, "principal-arrears");
        assert_eq!(element.children[0].text.as_deref(), Some("3.00"));
    }

    #[test]
    fn test_other_amount_value_nested_in_own_block() {
        let entry = CrsAddEntry::OtherAmount(OtherAmount {
            kind: OtherAmountKind::ExportCredit,
            value: "250.00".into(),
            value_date: None,
        });
        let element = entry.to_element();
        assert_eq!(element.attribute("code"), Some("4"));
        let value = element.find("dac:value").unwrap();
        assert_eq!(value.attribute("value-date"), None);
        assert_eq!(value.text.as_deref(), Some("250.00"));
    }

    #[test]
    fn test_activity_element_header_order() {
        let activity = ActivityRecord {
            identifier: "001".into(),
            header: ActivityHeader {
                title: Some("Clean water".into()),
                planned_start: Some("2017-10-01".into()),
                policy_markers: vec![PolicyMarker {
                    kind: PolicyMarkerKind::ClimateAdaptation,
                    significance: 2,
                }],
                default_flow_type: Some(10),
                default_aid_type: Some("C01".into()),
                ..Default::default()
            },
            transactions: Vec::new(),
            crs_add: None,
        };
        let element = activity.to_element("2018-09-06T00:00:00.000Z");
        let names: Vec<&str> = element.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "other-identifier",
                "title",
                "activity-date",
                "policy-marker",
                "default-flow-type",
                "default-aid-type"
            ]
        );
        assert_eq!(element.attribute("hierarchy"), Some("1"));
        assert_eq!(element.attribute("xml:lang"), Some("en"));
        let identifier = element.find("other-identifier").unwrap();
        assert_eq!(identifier.attribute("ref"), Some("001"));
        assert_eq!(identifier.attribute("type"), Some("A2"));
        let marker = element.find("policy-marker").unwrap();
        assert_eq!(marker.attribute("code"), Some("7"));
        assert_eq!(marker.attribute("significance"), Some("2"));
    }
}
