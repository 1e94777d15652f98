//! CLI command for data export

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (same layout as the expense file)
    Csv,
    /// JSON format (expenses, budget and totals)
    Json,
    /// YAML format (expenses, budget and totals, human-readable)
    Yaml,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, &args, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
            println!("Ledger exported to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, &args, &mut writer)?;
            if !matches!(args.format, ExportFormat::Csv) {
                writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
            }
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    args: &ExportArgs,
    writer: &mut W,
) -> ExpenseResult<()> {
    match args.format {
        ExportFormat::Csv => csv::export_expenses_csv(storage, writer),
        ExportFormat::Json => json::export_ledger_json(storage, writer, args.pretty),
        ExportFormat::Yaml => yaml::export_ledger_yaml(storage, writer),
    }
}
