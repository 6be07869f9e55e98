//! Activity Mapper Module
//!
//! 1つのグループ（同じ識別子を持つ行の集まり）から1件のアクティビティレコードを作る。
//!
//! - ヘッダー: グループの基準行（先頭行）から作る
//! - 取引: グループ内のすべての行から1件ずつ作る
//! - CRS-Add: グループ内の行を順に走査して下書きを積み上げ、最後に確定させる
//!
//! フィールド単位の変換失敗はエラーにならず、そのフィールドを「値なし」として扱う。

use tracing::debug;

use crate::coerce::{
    as_amount_text, as_code, as_date, as_float, as_int, as_nonzero_float, as_nonzero_int,
    as_text, probe,
};
use crate::columns;
use crate::country::CountryLookup;
use crate::grouper::Group;
use crate::records::{
    ActivityHeader, ActivityRecord, CrsAddEntry, CrsAddRecord, LoanStatus, LoanTerms,
    Mobilisation, OtherAmount, OtherAmountKind, OtherFlagKind, PolicyMarker, PolicyMarkerKind,
    TiedStatus, TiedStatusKind, TransactionRecord, TransactionType,
};
use crate::types::CrsTable;

/// 取引金額の候補列（優先順）
const TRANSACTION_AMOUNT_COLUMNS: [(&str, TransactionType); 4] = [
    (columns::AMT_EXTENDED, TransactionType::Disbursement),
    (columns::COMMITMENTS, TransactionType::Commitment),
    (columns::AMT_RECEIVED, TransactionType::IncomingFunds),
    (columns::INTEREST_RECEIVED, TransactionType::IncomingFunds),
];

/// タイド状況の候補列（優先順）
const TIED_AMOUNT_COLUMNS: [(&str, TiedStatusKind); 3] = [
    (columns::AMT_UNTIED, TiedStatusKind::Untied),
    (columns::AMT_PARTIAL, TiedStatusKind::PartiallyTied),
    (columns::AMT_TIED, TiedStatusKind::Tied),
];

/// アクティビティマッパー
///
/// 入力テーブルと国名解決サービスへの読み取り専用参照だけを持ち、
/// アクティビティ間で状態を共有しない。
pub struct ActivityMapper<'a> {
    table: &'a CrsTable,
    countries: &'a dyn CountryLookup,
    transaction_date: String,
}

impl<'a> ActivityMapper<'a> {
    /// 新しいマッパーを生成
    ///
    /// # 引数
    ///
    /// * `table` - 入力テーブル
    /// * `countries` - 受取国名の解決サービス
    /// * `transaction_date` - 取引日として使う日付（`YYYY-MM-DD`）
    pub fn new(
        table: &'a CrsTable,
        countries: &'a dyn CountryLookup,
        transaction_date: impl Into<String>,
    ) -> Self {
        Self {
            table,
            countries,
            transaction_date: transaction_date.into(),
        }
    }

    /// グループからアクティビティレコードを作る
    pub fn build_activity(&self, group: &Group) -> ActivityRecord {
        let header = self.build_header(group.base_row());
        let transactions: Vec<TransactionRecord> = group
            .rows
            .iter()
            .map(|&row| self.build_transaction(row))
            .collect();
        let crs_add = CrsAddRecord::materialize(self.draft_crs_add(&group.rows));

        debug!(
            identifier = %group.id,
            rows = group.rows.len(),
            transactions = transactions.len(),
            crs_add = crs_add.is_some(),
            "Built activity"
        );

        ActivityRecord {
            identifier: group.id.clone(),
            header,
            transactions,
            crs_add,
        }
    }

    // ========================================================================
    // HEADER
    // ========================================================================

    fn build_header(&self, base: usize) -> ActivityHeader {
        let cell = |column: &str| self.table.get(base, column);

        let policy_markers = PolicyMarkerKind::ALL
            .iter()
            .filter_map(|&kind| {
                as_int(cell(kind.column())).map(|significance| PolicyMarker { kind, significance })
            })
            .collect();

        ActivityHeader {
            title: as_text(cell(columns::PROJECT_TITLE)),
            description: as_text(cell(columns::DESCRIPTION)),
            planned_start: as_date(cell(columns::START_DATE)),
            actual_end: as_date(cell(columns::COMPLETION_DATE)),
            location: as_text(cell(columns::GEOGRAPHICAL_TARGET)),
            policy_markers,
            collaboration_type: as_nonzero_int(cell(columns::BI_MULTI)),
            default_flow_type: as_nonzero_int(cell(columns::FLOW_TYPE)),
            default_finance_type: as_nonzero_int(cell(columns::FINANCE_TYPE)),
            default_aid_type: as_code(cell(columns::DAC_TYPOLOGY)),
        }
    }

    // ========================================================================
    // TRANSACTION
    // ========================================================================

    fn build_transaction(&self, row: usize) -> TransactionRecord {
        let (amount, transaction_type) =
            match probe(self.table, row, &TRANSACTION_AMOUNT_COLUMNS, as_float).found() {
                Some((amount, kind)) => (amount, Some(kind)),
                None => (0.0, None),
            };

        let recipient_country = as_text(self.table.get(row, columns::RECIPIENT_COUNTRY))
            .and_then(|name| self.countries.resolve(&name));

        let tied_status = probe(self.table, row, &TIED_AMOUNT_COLUMNS, as_float)
            .found()
            .map(|(amount, kind)| TiedStatus {
                kind,
                amount,
                value_date: self.transaction_date.clone(),
            });

        TransactionRecord {
            transaction_type,
            amount,
            value_date: self.transaction_date.clone(),
            recipient_country,
            sector: as_nonzero_int(self.table.get(row, columns::PURPOSE_CODE)),
            tied_status,
        }
    }

    // ========================================================================
    // CRS-ADD
    // ========================================================================

    /// CRS-Addの下書きを作る
    ///
    /// other-flagsだけはグループ内で最初に値を持つ行が採用される。
    /// それ以外の子要素は、値を持つ行ごとに繰り返し積まれる。
    fn draft_crs_add(&self, rows: &[usize]) -> Vec<CrsAddEntry> {
        let mut entries = Vec::new();
        let mut captured = [false; 4];

        for &row in rows {
            let cell = |column: &str| self.table.get(row, column);
            let reporting_year = as_nonzero_int(cell(columns::REPORTING_YEAR));
            let commitment_date = as_date(cell(columns::COMMITMENT_DATE));

            for kind in OtherFlagKind::ALL {
                if captured[kind.index()] {
                    continue;
                }
                if let Some(significance) = as_int(cell(kind.column())) {
                    captured[kind.index()] = true;
                    entries.push(CrsAddEntry::OtherFlag { kind, significance });
                }
            }

            if let Some(terms) = self.loan_terms(row) {
                entries.push(CrsAddEntry::LoanTerms(terms));
            }

            if let Some(value) = as_nonzero_float(cell(columns::GRANT_EQUIVALENT)) {
                entries.push(CrsAddEntry::GrantEquivalent(value));
            }

            let status = LoanStatus {
                year: reporting_year,
                value_date: commitment_date.clone(),
                interest_received: as_float(cell(columns::INTEREST_RECEIVED)),
                principal_outstanding: as_float(cell(columns::PRINCIPAL_DISBURSED)),
                principal_arrears: as_float(cell(columns::PRINCIPAL_ARREARS)),
                interest_arrears: as_float(cell(columns::ARREARS_INTEREST)),
            };
            if status.interest_received.is_some()
                || status.principal_outstanding.is_some()
                || status.principal_arrears.is_some()
                || status.interest_arrears.is_some()
            {
                entries.push(CrsAddEntry::LoanStatus(status));
            }

            entries.extend(
                [
                    as_nonzero_int(cell(columns::CHANNEL_CODE)).map(CrsAddEntry::ChannelCode),
                    as_text(cell(columns::CHANNEL_NAME)).map(CrsAddEntry::ChannelDescription),
                    reporting_year.map(CrsAddEntry::ReportingYear),
                    as_nonzero_int(cell(columns::REPORTING_COUNTRY)).map(CrsAddEntry::DonorCode),
                    as_nonzero_int(cell(columns::EXTENDING_AGENCY)).map(CrsAddEntry::Agency),
                    as_nonzero_int(cell(columns::NATURE_OF_SUBMISSION))
                        .map(CrsAddEntry::NatureOfSubmission),
                    commitment_date.clone().map(CrsAddEntry::CommitmentDate),
                    as_nonzero_int(cell(columns::CURRENCY)).map(CrsAddEntry::Currency),
                ]
                .into_iter()
                .flatten(),
            );

            for kind in OtherAmountKind::ALL {
                if let Some(value) = as_amount_text(cell(kind.column())) {
                    entries.push(CrsAddEntry::OtherAmount(OtherAmount {
                        kind,
                        value,
                        value_date: commitment_date.clone(),
                    }));
                }
            }

            let mobilisation = Mobilisation {
                leverage: as_int(cell(columns::LEVERAGE_MECH)),
                origin: as_int(cell(columns::ORIGIN_OF_FUNDS)),
                amount: as_nonzero_float(cell(columns::AMOUNTS_MOBILIZED)),
            };
            if mobilisation != Mobilisation::default() {
                entries.push(CrsAddEntry::Mobilisation(mobilisation));
            }
        }

        entries
    }

    /// 金利のどちらかが解釈できる場合のみ融資条件を作る
    ///
    /// 返済情報のない融資条件も作るが、`CrsAddRecord::materialize`で取り除かれる。
    fn loan_terms(&self, row: usize) -> Option<LoanTerms> {
        let cell = |column: &str| self.table.get(row, column);
        let rate_1 = as_float(cell(columns::INTEREST_RATE));
        let rate_2 = as_float(cell(columns::SECOND_INTEREST_RATE));
        if rate_1.is_none() && rate_2.is_none() {
            return None;
        }

        Some(LoanTerms {
            rate_1,
            rate_2,
            repayment_type: as_int(cell(columns::REPAYMENT_TYPE)),
            repayment_plan: as_int(cell(columns::NO_REPAYMENTS)),
            repayment_first_date: as_date(cell(columns::FIRST_REPAY_DATE)),
            repayment_final_date: as_date(cell(columns::FINAL_REPAY_DATE)),
        })
    }
}
