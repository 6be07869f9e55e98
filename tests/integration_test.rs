//! Integration Tests for crs2iati
//!
//! End-to-end conversion of generated CRS workbooks into IATI activity XML
//! through the public `Converter` API.

use chrono::{TimeZone, Utc};
use crs2iati::{ConverterBuilder, SheetSelector};
use rust_xlsxwriter::*;
use std::io::Cursor;

// Helper module for generating test fixtures
mod fixtures {
    use super::*;

    /// Cell value written into a generated CRS sheet
    pub enum Value {
        N(f64),
        S(&'static str),
        Blank,
    }

    pub use Value::{Blank, N, S};

    fn write_sheet(
        worksheet: &mut Worksheet,
        headers: &[&str],
        rows: &[Vec<Value>],
    ) -> Result<(), XlsxError> {
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header)?;
        }
        for (row_idx, row) in rows.iter().enumerate() {
            let row_num = row_idx as u32 + 1;
            for (col, value) in row.iter().enumerate() {
                match value {
                    Value::N(n) => {
                        worksheet.write_number(row_num, col as u16, *n)?;
                    }
                    Value::S(s) => {
                        worksheet.write_string(row_num, col as u16, *s)?;
                    }
                    Value::Blank => {}
                }
            }
        }
        Ok(())
    }

    /// Generate a single-sheet CRS workbook
    pub fn generate_crs(headers: &[&str], rows: &[Vec<Value>]) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("CRS")?;
        write_sheet(worksheet, headers, rows)?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a workbook whose CRS data lives on the second sheet
    pub fn generate_with_cover_sheet(
        headers: &[&str],
        rows: &[Vec<Value>],
    ) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let cover = workbook.add_worksheet();
        cover.set_name("Cover")?;
        cover.write_string(0, 0, "CRS submission 2017")?;

        let data = workbook.add_worksheet();
        data.set_name("CRS")?;
        write_sheet(data, headers, rows)?;
        Ok(workbook.save_to_buffer()?)
    }
}

use fixtures::{Blank, N, S};

fn convert(data: Vec<u8>) -> String {
    let converter = ConverterBuilder::new()
        .with_generated_at(Utc.with_ymd_and_hms(2018, 9, 6, 14, 30, 5).unwrap())
        .build()
        .unwrap();
    converter.convert_to_string(Cursor::new(data)).unwrap()
}

#[test]
fn test_document_root_and_declaration() {
    let data = fixtures::generate_crs(
        &["crs_id_number", "project_title", "commitments"],
        &[vec![S("AID-001"), S("Water supply"), N(1500.0)]],
    )
    .unwrap();
    let xml = convert(data);

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
    assert!(xml.contains(
        "<iati-activities version=\"2.03\" generated-datetime=\"2018-09-06T14:30:05.000Z\" xmlns:usg=\"https://explorer.usaid.gov/\">"
    ));
    assert!(xml.contains(
        "<iati-activity last-updated-datetime=\"2018-09-06T14:30:05.000Z\" xml:lang=\"en\" hierarchy=\"1\">"
    ));
    assert!(xml.contains("<other-identifier ref=\"001\" type=\"A2\"/>"));
    assert!(xml.contains("<narrative>Water supply</narrative>"));
    assert!(xml.trim_end().ends_with("</iati-activities>"));
}

#[test]
fn test_rows_with_same_normalized_id_are_merged() {
    let data = fixtures::generate_crs(
        &["crs_id_number", "amt_extended"],
        &[
            vec![S("AID-001"), N(100.0)],
            vec![S("AID-002"), N(50.0)],
            vec![S("AID001X"), N(25.0)],
        ],
    )
    .unwrap();
    let xml = convert(data);

    assert_eq!(xml.matches("<iati-activity ").count(), 2);
    assert_eq!(xml.matches("<transaction>").count(), 3);

    // First-seen order: 001 before 002, with both 001 transactions inside the first activity
    let first = xml.find("ref=\"001\"").unwrap();
    let second = xml.find("ref=\"002\"").unwrap();
    assert!(first < second);
    let first_activity = &xml[first..second];
    assert_eq!(first_activity.matches("<transaction>").count(), 2);
    assert!(first_activity.contains(">100.00</value>"));
    assert!(first_activity.contains(">25.00</value>"));
}

#[test]
fn test_transaction_type_priority() {
    let data = fixtures::generate_crs(
        &["crs_id_number", "amt_extended", "commitments", "amt_received"],
        &[
            vec![S("1"), N(100.0), N(500.0), Blank],
            vec![S("1"), Blank, N(500.0), Blank],
            vec![S("1"), Blank, Blank, N(7.0)],
        ],
    )
    .unwrap();
    let xml = convert(data);

    assert!(xml.contains(concat!(
        "      <transaction-type code=\"3\"/>\n",
        "      <transaction-date iso-date=\"2017-01-01\"/>\n",
        "      <value value-date=\"2017-01-01\">100.00</value>\n"
    )));
    assert!(xml.contains("<transaction-type code=\"2\"/>"));
    assert!(xml.contains("<transaction-type code=\"6\"/>"));
    assert_eq!(xml.matches(">500.00</value>").count(), 1);
}

#[test]
fn test_transaction_without_amount_has_no_type() {
    let data = fixtures::generate_crs(
        &["crs_id_number", "amt_extended", "commitments"],
        &[vec![S("1"), S("n/a"), Blank]],
    )
    .unwrap();
    let xml = convert(data);

    assert!(!xml.contains("<transaction-type"));
    assert!(xml.contains("<value value-date=\"2017-01-01\">0.00</value>"));
}

#[test]
fn test_transaction_country_sector_and_tied_status() {
    let data = fixtures::generate_crs(
        &[
            "crs_id_number",
            "commitments",
            "recipient_country",
            "purpose_code",
            "amt_untied",
        ],
        &[
            vec![S("1"), N(1234.5), S("Kenya"), N(12220.0), N(1234.5)],
            vec![S("1"), N(10.0), S("Africa, regional"), N(0.0), Blank],
        ],
    )
    .unwrap();
    let xml = convert(data);

    assert!(xml.contains(">1234.50</value>"));
    assert_eq!(xml.matches("<recipient-country code=\"KE\"/>").count(), 1);
    assert_eq!(xml.matches("<recipient-country").count(), 1);
    assert_eq!(xml.matches("<sector code=\"12220\" percentage=\"100\"/>").count(), 1);
    assert!(xml.contains(concat!(
        "      <dac:tied-status code=\"5\">\n",
        "        <dac:value value-date=\"2017-01-01\">1234.50</dac:value>\n",
        "      </dac:tied-status>\n"
    )));
}

#[test]
fn test_header_fields_from_first_row() {
    let data = fixtures::generate_crs(
        &[
            "crs_id_number",
            "project_title",
            "description",
            "start_date",
            "completion_date",
            "geographical_target",
            "gender_equity",
            "biodiversity",
            "bi_multi",
            "flow_type",
            "finance_type",
            "dac_typology",
        ],
        &[
            vec![
                S("AID-010"),
                S("Rural roads"),
                S("Feeder road rehabilitation"),
                S("2016-03-15 00:00:00"),
                Blank,
                S("Nakuru"),
                N(2.0),
                N(0.0),
                N(1.0),
                N(11.0),
                N(0.0),
                S("C01"),
            ],
            vec![
                S("AID-010"),
                S("Ignored title"),
                Blank,
                S("2019-01-01"),
                S("2020-01-01"),
                Blank,
                N(1.0),
                Blank,
                N(2.0),
                N(12.0),
                N(110.0),
                S("D02"),
            ],
        ],
    )
    .unwrap();
    let xml = convert(data);

    assert!(xml.contains("<narrative>Rural roads</narrative>"));
    assert!(!xml.contains("Ignored title"));
    assert!(xml.contains("<narrative>Feeder road rehabilitation</narrative>"));
    assert!(xml.contains("<activity-date type=\"1\" iso-date=\"2016-03-15\"/>"));
    assert!(!xml.contains("<activity-date type=\"3\""));
    assert!(xml.contains(concat!(
        "    <location>\n",
        "      <name>\n",
        "        <narrative>Nakuru</narrative>\n"
    )));
    assert!(xml.contains("<policy-marker code=\"1\" vocabulary=\"1\" significance=\"2\"/>"));
    assert!(xml.contains("<policy-marker code=\"5\" vocabulary=\"1\" significance=\"0\"/>"));
    assert_eq!(xml.matches("<policy-marker").count(), 2);
    assert!(xml.contains("<collaboration-type code=\"1\"/>"));
    assert!(xml.contains("<default-flow-type code=\"11\"/>"));
    assert!(!xml.contains("<default-finance-type"));
    assert!(xml.contains("<default-aid-type code=\"C01\"/>"));
}

#[test]
fn test_crs_add_flags_first_write_wins() {
    let data = fixtures::generate_crs(
        &["crs_id_number", "FTC", "investment_project", "channel_code"],
        &[
            vec![S("7"), N(1.0), Blank, N(11000.0)],
            vec![S("7"), Blank, N(0.0), Blank],
            vec![S("7"), N(2.0), N(1.0), N(11000.0)],
        ],
    )
    .unwrap();
    let xml = convert(data);

    assert!(xml.contains("<other-flags code=\"1\" significance=\"1\"/>"));
    assert!(!xml.contains("<other-flags code=\"1\" significance=\"2\"/>"));
    assert!(xml.contains("<other-flags code=\"3\" significance=\"0\"/>"));
    assert_eq!(xml.matches("<other-flags").count(), 2);
    // Per-row fields are repeated for every qualifying row
    assert_eq!(xml.matches("<channel-code>11000</channel-code>").count(), 2);
}

#[test]
fn test_crs_add_without_flags_is_absent() {
    let data = fixtures::generate_crs(
        &["crs_id_number", "grant_equivalent", "currency"],
        &[vec![S("7"), N(900.0), N(302.0)]],
    )
    .unwrap();
    let xml = convert(data);

    assert!(!xml.contains("<crs-add"));
    assert!(!xml.contains("dac:grant-equivalent"));
}

#[test]
fn test_loan_terms_require_repayment_detail() {
    let data = fixtures::generate_crs(
        &[
            "crs_id_number",
            "AF",
            "Interest_rate",
            "Second_interest_rate",
            "Type",
            "First_repay_date",
        ],
        &[
            vec![S("9"), N(1.0), N(2.5), Blank, Blank, Blank],
            vec![S("9"), Blank, N(5.0), N(0.035), N(1.0), S("2018-06-30T00:00:00")],
        ],
    )
    .unwrap();
    let xml = convert(data);

    assert_eq!(xml.matches("<dac:loan-terms").count(), 1);
    assert!(!xml.contains("rate-1=\"2.5\""));
    assert!(xml.contains(concat!(
        "      <dac:loan-terms rate-1=\"5.0\" rate-2=\"0.035\">\n",
        "        <dac:repayment-type code=\"1\"/>\n",
        "        <dac:repayment-first-date iso-date=\"2018-06-30\"/>\n",
        "      </dac:loan-terms>\n"
    )));
}

#[test]
fn test_crs_add_block_contents() {
    let data = fixtures::generate_crs(
        &[
            "crs_id_number",
            "FTC",
            "reporting_year",
            "commitment_date",
            "grant_equivalent",
            "Principa_disbursed",
            "channel_name",
            "reporting_country",
            "extending_agency",
            "nature_of_submission",
            "currency",
            "irtc",
            "export_credit",
            "Leverage_mech",
            "Amounts_mobilized",
        ],
        &[vec![
            S("12"),
            N(0.0),
            N(2016.0),
            S("2016-05-01 00:00:00"),
            N(1200.0),
            N(800.0),
            S("World Bank"),
            N(302.0),
            N(1.0),
            N(3.0),
            N(302.0),
            N(15.0),
            S("pending"),
            N(2.0),
            N(75000.0),
        ]],
    )
    .unwrap();
    let xml = convert(data);

    let expected = concat!(
        "    <crs-add>\n",
        "      <other-flags code=\"1\" significance=\"0\"/>\n",
        "      <dac:grant-equivalent value=\"1200.00\"/>\n",
        "      <loan-status year=\"2016\" value-date=\"2016-05-01\">\n",
        "        <principal-outstanding>800.00</principal-outstanding>\n",
        "      </loan-status>\n",
        "      <dac:channel-description>\n",
        "        <narrative>World Bank</narrative>\n",
        "      </dac:channel-description>\n",
        "      <dac:reporting-year>2016</dac:reporting-year>\n",
        "      <dac:donorcode code=\"302\"/>\n",
        "      <dac:agency code=\"1\"/>\n",
        "      <dac:nature-submission code=\"3\"/>\n",
        "      <dac:commitment-date iso-date=\"2016-05-01\"/>\n",
        "      <dac:currency code=\"302\"/>\n",
        "      <dac:other-amounts code=\"1\">\n",
        "        <dac:value value-date=\"2016-05-01\">15.00</dac:value>\n",
        "      </dac:other-amounts>\n",
        "      <dac:other-amounts code=\"4\">\n",
        "        <dac:value value-date=\"2016-05-01\">pending</dac:value>\n",
        "      </dac:other-amounts>\n",
        "      <dac:mobilisation>\n",
        "        <dac:mobilisation-leverage code=\"2\"/>\n",
        "        <dac:value>75000.00</dac:value>\n",
        "      </dac:mobilisation>\n",
        "    </crs-add>\n"
    );
    assert!(xml.contains(expected), "unexpected crs-add block:\n{}", xml);
}

#[test]
fn test_sheet_selection_by_name() {
    let data = fixtures::generate_with_cover_sheet(
        &["crs_id_number", "commitments"],
        &[vec![S("AID-5"), N(1.0)]],
    )
    .unwrap();

    let converter = ConverterBuilder::new()
        .with_sheet_selector(SheetSelector::Name("CRS".to_string()))
        .build()
        .unwrap();
    let xml = converter.convert_to_string(Cursor::new(data.clone())).unwrap();
    assert!(xml.contains("<other-identifier ref=\"5\" type=\"A2\"/>"));

    let converter = ConverterBuilder::new()
        .with_sheet_selector(SheetSelector::Index(1))
        .build()
        .unwrap();
    let by_index = converter.convert_to_string(Cursor::new(data.clone())).unwrap();
    assert!(by_index.contains("<other-identifier ref=\"5\" type=\"A2\"/>"));

    // The cover sheet has no CRS columns: one fallback activity from no rows
    let converter = ConverterBuilder::new().build().unwrap();
    let first = converter.convert_to_string(Cursor::new(data)).unwrap();
    assert!(!first.contains("<iati-activity "));
}

#[test]
fn test_custom_transaction_date_and_namespace() {
    let data = fixtures::generate_crs(
        &["crs_id_number", "commitments", "amt_tied"],
        &[vec![S("3"), N(10.0), N(4.0)]],
    )
    .unwrap();

    let converter = ConverterBuilder::new()
        .with_transaction_date(chrono::NaiveDate::from_ymd_opt(2019, 12, 31).unwrap())
        .with_namespace_url("https://example.org/usg/")
        .build()
        .unwrap();
    let xml = converter.convert_to_string(Cursor::new(data)).unwrap();

    assert!(xml.contains("xmlns:usg=\"https://example.org/usg/\""));
    assert!(xml.contains("<transaction-date iso-date=\"2019-12-31\"/>"));
    assert!(xml.contains("<value value-date=\"2019-12-31\">10.00</value>"));
    assert!(xml.contains("<dac:tied-status code=\"4\">"));
    assert!(xml.contains("<dac:value value-date=\"2019-12-31\">4.00</dac:value>"));
}

#[test]
fn test_custom_country_lookup() {
    let data = fixtures::generate_crs(
        &["crs_id_number", "commitments", "recipient_country"],
        &[vec![S("3"), N(10.0), S("Kosovo")]],
    )
    .unwrap();

    let converter = ConverterBuilder::new()
        .with_country_lookup(|name: &str| (name == "Kosovo").then(|| "XK".to_string()))
        .build()
        .unwrap();
    let xml = converter.convert_to_string(Cursor::new(data)).unwrap();
    assert!(xml.contains("<recipient-country code=\"XK\"/>"));
}
