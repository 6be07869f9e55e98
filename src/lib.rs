//! crs2iati - Pure-Rust converter from CRS aid spreadsheets to IATI activity XML
//!
//! This crate reads a CRS (Creditor Reporting System) workbook, where each row is a
//! single funding transaction, groups the rows by project identifier, and produces
//! one IATI 2.03 `iati-activity` per project.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use crs2iati::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a converter with default settings
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     let input = File::open("crs.xlsx")?;
//!     let output = File::create("activities.xml")?;
//!
//!     // Convert CRS rows to IATI XML
//!     converter.convert(input, output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Dated Export
//!
//! ```rust,no_run
//! use std::fs::File;
//! use crs2iati::{ConverterBuilder, ExportLayout};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new().build()?;
//!     let input = File::open("crs.xlsx")?;
//!
//!     // export/MM-DD-YYYY/new_crs1.xml + export/zip/export-MM-DD-YYYY.zip
//!     let summary = converter.export(input, &ExportLayout::new("export"))?;
//!     println!("{} activities -> {}", summary.activities, summary.xml_path.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! # In-Memory Transform
//!
//! The grouping and mapping core does not touch the file system. Any `CrsTable`
//! can be transformed directly:
//!
//! ```rust
//! use crs2iati::{columns, transform, CellValue, CountryTable, CrsTable};
//! use chrono::NaiveDate;
//!
//! let table = CrsTable::from_rows(
//!     [columns::CRS_ID_NUMBER, columns::AMT_EXTENDED],
//!     vec![
//!         vec![CellValue::from("AID-001"), CellValue::from(1234.5)],
//!         vec![CellValue::from("AID001X"), CellValue::from(10.0)],
//!     ],
//! );
//! let date = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
//! let activities = transform(&table, &CountryTable::iso3166(), date);
//! assert_eq!(activities.len(), 1);
//! assert_eq!(activities[0].transactions.len(), 2);
//! ```

mod api;
mod builder;
mod coerce;
pub mod columns;
mod country;
mod error;
mod export;
mod grouper;
mod mapper;
mod parser;
pub mod records;
mod security;
mod types;
mod xml;

// 公開API
pub use api::SheetSelector;
pub use builder::{
    build_document, parse_date, transform, ConfigFile, Converter, ConverterBuilder,
    DocumentHeader, DATETIME_FORMAT, DEFAULT_NAMESPACE_URL, IATI_VERSION,
};
pub use country::{CountryEntry, CountryLookup, CountryTable};
pub use error::CrsToIatiError;
pub use export::{package_directory, ExportLayout, ExportSummary, DEFAULT_FILE_STEM};
pub use grouper::{group, normalize_id, Group, FALLBACK_ID};
pub use mapper::ActivityMapper;
pub use parser::WorkbookReader;
pub use records::ActivityRecord;
pub use types::{CellValue, CrsTable};
pub use xml::{Element, XmlWriter};
