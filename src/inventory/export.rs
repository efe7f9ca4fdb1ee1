//! CSV and JSON exports

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::record::DocumentRecord;
use super::summary::InventorySummary;
use crate::Result;

/// Tool name recorded in JSON metadata
pub const TOOL_NAME: &str = "workspace-demo inventory";

/// Complexity-control decision record the inventory reports against
pub const ADR_REFERENCE: &str = "ADR-005";

/// Output formats for an inventory run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
    #[default]
    Both,
}

impl OutputFormat {
    pub fn includes_csv(self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

/// One CSV row; failed records leave analysis columns empty
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    file_path: &'a str,
    file_name: Option<&'a str>,
    directory: Option<&'a str>,
    lines: Option<usize>,
    words: Option<usize>,
    internal_links: Option<usize>,
    external_links: Option<usize>,
    complexity_score: Option<f64>,
    complexity_level: &'a str,
    has_frontmatter: Option<bool>,
    title: Option<&'a str>,
    status: Option<&'a str>,
    category: Option<&'a str>,
    issues: String,
    modified_time: Option<&'a str>,
}

impl<'a> CsvRow<'a> {
    fn from_record(record: &'a DocumentRecord) -> Self {
        match record {
            DocumentRecord::Analyzed(doc) => Self {
                file_path: &doc.file_path,
                file_name: Some(&doc.file_name),
                directory: Some(&doc.directory),
                lines: Some(doc.lines),
                words: Some(doc.words),
                internal_links: Some(doc.internal_links),
                external_links: Some(doc.external_links),
                complexity_score: Some(doc.complexity_score),
                complexity_level: doc.complexity_level.as_str(),
                has_frontmatter: Some(doc.has_frontmatter),
                title: Some(&doc.title),
                status: Some(&doc.status),
                category: Some(&doc.category),
                issues: doc
                    .issues
                    .iter()
                    .map(|issue| issue.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                modified_time: Some(&doc.modified_time),
            },
            DocumentRecord::Failed(failed) => Self {
                file_path: &failed.file_path,
                file_name: None,
                directory: None,
                lines: None,
                words: None,
                internal_links: None,
                external_links: None,
                complexity_score: None,
                complexity_level: &failed.complexity_level,
                has_frontmatter: None,
                title: None,
                status: None,
                category: None,
                issues: String::new(),
                modified_time: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportMetadata {
    pub scan_date: String,
    pub tool: String,
    pub version: String,
    pub adr: String,
}

impl ReportMetadata {
    pub fn new(scan_date: impl Into<String>) -> Self {
        Self {
            scan_date: scan_date.into(),
            tool: TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            adr: ADR_REFERENCE.to_string(),
        }
    }
}

/// Detailed JSON export document
#[derive(Debug, Serialize)]
pub struct InventoryReport<'a> {
    pub metadata: ReportMetadata,
    pub summary: &'a InventorySummary,
    pub files: &'a [DocumentRecord],
}

impl<'a> InventoryReport<'a> {
    pub fn new(summary: &'a InventorySummary, files: &'a [DocumentRecord]) -> Self {
        Self {
            metadata: ReportMetadata::new(summary.scan_date.clone()),
            summary,
            files,
        }
    }
}

pub fn write_csv<W: Write>(writer: W, records: &[DocumentRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(CsvRow::from_record(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut writer: W, report: &InventoryReport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write `records` to `path` as CSV
pub fn export_csv(path: &Path, records: &[DocumentRecord]) -> Result<PathBuf> {
    debug!("Writing CSV export to {}", path.display());
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), records)?;
    Ok(path.to_path_buf())
}

/// Write `report` to `path` as pretty-printed JSON
pub fn export_json(path: &Path, report: &InventoryReport<'_>) -> Result<PathBuf> {
    debug!("Writing JSON export to {}", path.display());
    let file = File::create(path)?;
    write_json(BufWriter::new(file), report)?;
    Ok(path.to_path_buf())
}
