//! CRS source column names.
//!
//! Exact header names of the CRS spreadsheet layout. Spelling follows the source
//! sheet (`Principa_disbursed`, `Orgin_of_funds` and the mixed casing included).

// ============================================================================
// ACTIVITY HEADER
// ============================================================================

pub const CRS_ID_NUMBER: &str = "crs_id_number";
pub const PROJECT_TITLE: &str = "project_title";
pub const DESCRIPTION: &str = "description";
pub const START_DATE: &str = "start_date";
pub const COMPLETION_DATE: &str = "completion_date";
pub const GEOGRAPHICAL_TARGET: &str = "geographical_target";

pub const GENDER_EQUITY: &str = "gender_equity";
pub const AID_TO_ENVIRONMENT: &str = "aid_to_environment";
pub const PD_GG: &str = "pd_GG";
pub const TRADE_DEVELOPMENT: &str = "Trade_Development";
pub const BIODIVERSITY: &str = "biodiversity";
pub const MITIGATION: &str = "mitigation";
pub const ADAPTATION: &str = "adaptation";
pub const DESERTIFICATION: &str = "desertification";
pub const RMNCH: &str = "RMNCH";

pub const BI_MULTI: &str = "bi_multi";
pub const FLOW_TYPE: &str = "flow_type";
pub const FINANCE_TYPE: &str = "finance_type";
pub const DAC_TYPOLOGY: &str = "dac_typology";

// ============================================================================
// TRANSACTION
// ============================================================================

pub const AMT_EXTENDED: &str = "amt_extended";
pub const COMMITMENTS: &str = "commitments";
pub const AMT_RECEIVED: &str = "amt_received";
pub const INTEREST_RECEIVED: &str = "interest_received";
pub const RECIPIENT_COUNTRY: &str = "recipient_country";
pub const PURPOSE_CODE: &str = "purpose_code";
pub const AMT_UNTIED: &str = "amt_untied";
pub const AMT_PARTIAL: &str = "amt_partial";
pub const AMT_TIED: &str = "amt_tied";

// ============================================================================
// CRS-ADD
// ============================================================================

pub const REPORTING_YEAR: &str = "reporting_year";
pub const COMMITMENT_DATE: &str = "commitment_date";

pub const FTC: &str = "FTC";
pub const PROGRAMME_BASED_APPROACH: &str = "Programme_based_approach";
pub const INVESTMENT_PROJECT: &str = "investment_project";
pub const AF: &str = "AF";

pub const INTEREST_RATE: &str = "Interest_rate";
pub const SECOND_INTEREST_RATE: &str = "Second_interest_rate";
pub const REPAYMENT_TYPE: &str = "Type";
pub const NO_REPAYMENTS: &str = "No_repayments";
pub const FIRST_REPAY_DATE: &str = "First_repay_date";
pub const FINAL_REPAY_DATE: &str = "Final_repay_date";

pub const GRANT_EQUIVALENT: &str = "grant_equivalent";

pub const PRINCIPAL_DISBURSED: &str = "Principa_disbursed";
pub const PRINCIPAL_ARREARS: &str = "Principal_arrears";
pub const ARREARS_INTEREST: &str = "arrears_interest";

pub const CHANNEL_CODE: &str = "channel_code";
pub const CHANNEL_NAME: &str = "channel_name";
pub const REPORTING_COUNTRY: &str = "reporting_country";
pub const EXTENDING_AGENCY: &str = "extending_agency";
pub const NATURE_OF_SUBMISSION: &str = "nature_of_submission";
pub const CURRENCY: &str = "currency";

pub const IRTC: &str = "irtc";
pub const EXPERT_COMMITMENT: &str = "expert_commitment";
pub const EXPERT_EXTENDED: &str = "expert_extended";
pub const EXPORT_CREDIT: &str = "export_credit";

pub const LEVERAGE_MECH: &str = "Leverage_mech";
pub const ORIGIN_OF_FUNDS: &str = "Orgin_of_funds";
pub const AMOUNTS_MOBILIZED: &str = "Amounts_mobilized";

/// Every column the mapper reads, in sheet order.
pub const ALL: &[&str] = &[
    CRS_ID_NUMBER,
    PROJECT_TITLE,
    DESCRIPTION,
    START_DATE,
    COMPLETION_DATE,
    GEOGRAPHICAL_TARGET,
    GENDER_EQUITY,
    AID_TO_ENVIRONMENT,
    PD_GG,
    TRADE_DEVELOPMENT,
    BIODIVERSITY,
    MITIGATION,
    ADAPTATION,
    DESERTIFICATION,
    RMNCH,
    BI_MULTI,
    FLOW_TYPE,
    FINANCE_TYPE,
    DAC_TYPOLOGY,
    AMT_EXTENDED,
    COMMITMENTS,
    AMT_RECEIVED,
    INTEREST_RECEIVED,
    RECIPIENT_COUNTRY,
    PURPOSE_CODE,
    AMT_UNTIED,
    AMT_PARTIAL,
    AMT_TIED,
    REPORTING_YEAR,
    COMMITMENT_DATE,
    FTC,
    PROGRAMME_BASED_APPROACH,
    INVESTMENT_PROJECT,
    AF,
    INTEREST_RATE,
    SECOND_INTEREST_RATE,
    REPAYMENT_TYPE,
    NO_REPAYMENTS,
    FIRST_REPAY_DATE,
    FINAL_REPAY_DATE,
    GRANT_EQUIVALENT,
    PRINCIPAL_DISBURSED,
    PRINCIPAL_ARREARS,
    ARREARS_INTEREST,
    CHANNEL_CODE,
    CHANNEL_NAME,
    REPORTING_COUNTRY,
    EXTENDING_AGENCY,
    NATURE_OF_SUBMISSION,
    CURRENCY,
    IRTC,
    EXPERT_COMMITMENT,
    EXPERT_EXTENDED,
    EXPORT_CREDIT,
    LEVERAGE_MECH,
    ORIGIN_OF_FUNDS,
    AMOUNTS_MOBILIZED,
];
