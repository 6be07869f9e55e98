//! crs2iati command-line tool
//!
//! Converts a CRS workbook into IATI activity XML and writes the dated export
//! layout (or prints the XML with `--stdout`).

use std::fs::File;
use std::io::{self, Write};
use std::process;

use crs2iati::{
    parse_date, ConfigFile, ConverterBuilder, CrsToIatiError, ExportLayout, SheetSelector,
};
use tracing_subscriber::EnvFilter;

/// Parsed command-line options
#[derive(Debug)]
struct Options {
    input_path: String,
    out_dir: String,
    sheet_selector: Option<SheetSelector>,
    transaction_date: Option<String>,
    config_path: Option<String>,
    use_stdout: bool,
    package: bool,
    print_summary: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <input.xlsx> [options]", program);
    eprintln!("\nOptions:");
    eprintln!("  --out <dir>                  Export directory (default: export)");
    eprintln!("  --sheet-index <n>            Select sheet by index (0-based)");
    eprintln!("  --sheet-name <name>          Select sheet by name");
    eprintln!("  --transaction-date <date>    Transaction date, YYYY-MM-DD (default: 2017-01-01)");
    eprintln!("  --config <file.json>         Read options from a JSON config file");
    eprintln!("  --stdout                     Write XML to stdout instead of the export directory");
    eprintln!("  --no-zip                     Do not package the export directory");
    eprintln!("  --summary                    Print the export summary as JSON");
    eprintln!("\nExamples:");
    eprintln!("  {} crs.xlsx", program);
    eprintln!("  {} crs.xlsx --out reports --sheet-name \"CRS\"", program);
    eprintln!("  {} crs.xlsx --stdout > activities.xml", program);
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let program = args.first().map(String::as_str).unwrap_or("crs2iati");
    let input_path = match args.get(1) {
        Some(path) if !path.starts_with("--") => path.clone(),
        _ => {
            print_usage(program);
            return Err("missing input file".to_string());
        }
    };

    let mut options = Options {
        input_path,
        out_dir: "export".to_string(),
        sheet_selector: None,
        transaction_date: None,
        config_path: None,
        use_stdout: false,
        package: true,
        print_summary: false,
    };

    let mut i = 2;
    while i < args.len() {
        let next = args.get(i + 1).cloned();
        let value = |flag: &str| {
            next.clone()
                .ok_or_else(|| format!("{} requires a value", flag))
        };
        match args[i].as_str() {
            "--out" => {
                options.out_dir = value("--out")?;
                i += 2;
            }
            "--sheet-index" => {
                let raw = value("--sheet-index")?;
                let index = raw
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid sheet index: {}", raw))?;
                options.sheet_selector = Some(SheetSelector::Index(index));
                i += 2;
            }
            "--sheet-name" => {
                options.sheet_selector = Some(SheetSelector::Name(value("--sheet-name")?));
                i += 2;
            }
            "--transaction-date" => {
                options.transaction_date = Some(value("--transaction-date")?);
                i += 2;
            }
            "--config" => {
                options.config_path = Some(value("--config")?);
                i += 2;
            }
            "--stdout" => {
                options.use_stdout = true;
                i += 1;
            }
            "--no-zip" => {
                options.package = false;
                i += 1;
            }
            "--summary" => {
                options.print_summary = true;
                i += 1;
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    Ok(options)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        handle_error(e);
        process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), CrsToIatiError> {
    // CLI flags override the config file
    let mut builder = ConverterBuilder::new();
    if let Some(ref path) = options.config_path {
        builder = builder.with_config(&ConfigFile::from_path(path)?)?;
    }
    if let Some(ref selector) = options.sheet_selector {
        builder = builder.with_sheet_selector(selector.clone());
    }
    if let Some(ref date) = options.transaction_date {
        builder = builder.with_transaction_date(parse_date(date)?);
    }
    let converter = builder.build()?;

    let input = File::open(&options.input_path)?;

    if options.use_stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        converter.convert(input, &mut handle)?;
        handle.flush()?;
        return Ok(());
    }

    let layout = ExportLayout::new(&options.out_dir).with_packaging(options.package);
    let summary = converter.export(input, &layout)?;

    if options.print_summary {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| CrsToIatiError::Config(format!("Failed to encode summary: {}", e)))?;
        println!("{}", json);
    } else {
        println!(
            "Conversion completed: {} -> {} ({} activities from {} rows)",
            options.input_path,
            summary.xml_path.display(),
            summary.activities,
            summary.rows
        );
    }

    Ok(())
}

fn handle_error(error: CrsToIatiError) {
    match error {
        CrsToIatiError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to access it.");
        }
        CrsToIatiError::Parse(parse_err) => {
            eprintln!("Parse Error: {}", parse_err);
            eprintln!("The file may not be a valid CRS workbook or may be corrupted.");
        }
        CrsToIatiError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
            eprintln!("Please check your sheet selection, dates and config file.");
        }
        CrsToIatiError::Xml(msg) => {
            eprintln!("XML Error: {}", msg);
        }
        CrsToIatiError::Zip(msg) => {
            eprintln!("ZIP Archive Error: {}", msg);
            eprintln!("The export directory could not be packaged.");
        }
        CrsToIatiError::Utf8(utf8_err) => {
            eprintln!("UTF-8 Conversion Error: {}", utf8_err);
        }
        CrsToIatiError::SecurityViolation(msg) => {
            eprintln!("Security Violation: {}", msg);
        }
    }
}
