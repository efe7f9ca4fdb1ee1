//! Markdown document inventory
//!
//! Scans a directory tree for Markdown files and measures each one:
//! size, links, structure, frontmatter, and a complexity score. Results can
//! be summarized, exported as CSV or JSON, and gated in CI.
//!
//! ```ignore
//! use workspace_demo::inventory::{DocumentInventory, InventoryConfig};
//!
//! let mut inventory = DocumentInventory::new("docs", InventoryConfig::default());
//! inventory.scan()?;
//! let summary = inventory.summary();
//! println!("{} files, {} lines", summary.total_files, summary.total_lines);
//! ```

pub mod analysis;
pub mod config;
pub mod export;
pub mod frontmatter;
pub mod record;
pub mod report;
pub mod summary;

pub use analysis::ContentAnalysis;
pub use config::{CiPolicy, InventoryConfig, IssueThresholds};
pub use export::{InventoryReport, OutputFormat};
pub use frontmatter::Frontmatter;
pub use record::{AnalyzedDocument, DocumentRecord, FailedDocument};
pub use summary::InventorySummary;

use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

use crate::scoring::{ComplexityLevel, DocumentIssue};
use crate::{Error, Result};

/// Outcome of the CI gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiVerdict {
    Pass,
    TooManyCritical(usize),
    TooManyMissingFrontmatter(usize),
}

impl CiVerdict {
    /// Apply `policy` to a summary; critical complexity is checked first
    pub fn evaluate(summary: &InventorySummary, policy: &CiPolicy) -> Self {
        let critical = summary
            .complexity_distribution
            .get(ComplexityLevel::Critical);
        if critical > policy.max_critical {
            return CiVerdict::TooManyCritical(critical);
        }

        let missing = summary
            .common_issues
            .get(DocumentIssue::MissingFrontmatter);
        if missing > policy.max_missing_frontmatter {
            return CiVerdict::TooManyMissingFrontmatter(missing);
        }

        CiVerdict::Pass
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, CiVerdict::Pass)
    }

    pub fn message(&self) -> Option<String> {
        match self {
            CiVerdict::Pass => None,
            CiVerdict::TooManyCritical(n) => {
                Some(format!("💥 CI ERROR: {n} files with Critical complexity"))
            }
            CiVerdict::TooManyMissingFrontmatter(n) => {
                Some(format!("💥 CI ERROR: {n} files missing Front-Matter"))
            }
        }
    }
}

/// Paths written by [`DocumentInventory::export`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportedFiles {
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub baseline: Option<PathBuf>,
}

pub struct DocumentInventory {
    root: PathBuf,
    config: InventoryConfig,
    records: Vec<DocumentRecord>,
}

impl DocumentInventory {
    pub fn new(root: impl Into<PathBuf>, config: InventoryConfig) -> Self {
        Self {
            root: root.into(),
            config,
            records: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    /// Markdown files under the root, sorted, with skip patterns applied
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let is_markdown = entry.file_name().to_string_lossy().ends_with(".md");
            if !is_markdown || !entry.path().is_file() {
                continue;
            }

            let relative = record::relative_path(&self.root, entry.path());
            if self.config.should_skip(&relative) {
                trace!("Skipping {}", relative);
                continue;
            }

            files.push(entry.into_path());
        }

        Ok(files)
    }

    /// Analyze every discovered file
    ///
    /// Fails with [`Error::NoDocuments`] when nothing was found. Files that
    /// cannot be read are kept as failed records.
    pub fn scan(&mut self) -> Result<&[DocumentRecord]> {
        info!("Scanning markdown files in: {}", self.root.display());
        let files = self.discover()?;
        info!("Found {} markdown files", files.len());

        if files.is_empty() {
            return Err(Error::NoDocuments(self.root.clone()));
        }

        let total = files.len();
        self.records = files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                debug!(
                    "Analyzing ({}/{}): {}",
                    i + 1,
                    total,
                    path.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default()
                );
                record::analyze_file(&self.root, path, &self.config.thresholds)
            })
            .collect();

        Ok(&self.records)
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::generate(&self.records, &self.config)
    }

    /// Write exports for `prefix` (`<prefix>.csv`, `<prefix>.json`, and
    /// `<prefix>.baseline.json` when `baseline` is set)
    pub fn export(
        &self,
        summary: &InventorySummary,
        prefix: &str,
        format: OutputFormat,
        baseline: bool,
    ) -> Result<ExportedFiles> {
        let mut exported = ExportedFiles::default();

        if format.includes_csv() {
            let path = PathBuf::from(format!("{prefix}.csv"));
            exported.csv = Some(export::export_csv(&path, &self.records)?);
        }

        let report = InventoryReport::new(summary, &self.records);
        if format.includes_json() {
            let path = PathBuf::from(format!("{prefix}.json"));
            exported.json = Some(export::export_json(&path, &report)?);
        }

        if baseline {
            let path = PathBuf::from(format!("{prefix}.baseline.json"));
            exported.baseline = Some(export::export_json(&path, &report)?);
        }

        Ok(exported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_discover_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "b.md", "# b");
        write(temp.path(), "a.md", "# a");
        write(temp.path(), "docs/c.md", "# c");
        write(temp.path(), "notes.txt", "not markdown");
        write(temp.path(), "node_modules/pkg/README.md", "# skip");
        write(temp.path(), "dist/out.md", "# skip");

        let inventory = DocumentInventory::new(temp.path(), InventoryConfig::default());
        let found: Vec<String> = inventory
            .discover()
            .unwrap()
            .iter()
            .map(|p| record::relative_path(temp.path(), p))
            .collect();

        assert_eq!(found, vec!["a.md", "b.md", "docs/c.md"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp = TempDir::new().unwrap();
        let mut inventory = DocumentInventory::new(temp.path(), InventoryConfig::default());

        let err = inventory.scan().unwrap_err();
        assert!(matches!(err, Error::NoDocuments(_)));
    }

    #[test]
    fn test_scan_missing_root() {
        let temp = TempDir::new().unwrap();
        let mut inventory =
            DocumentInventory::new(temp.path().join("missing"), InventoryConfig::default());

        assert!(matches!(inventory.scan(), Err(Error::Walk(_))));
    }

    #[test]
    fn test_scan_and_summarize() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "guide.md",
            "---\ntitle: Guide\nstatus: ok\ncategory: docs\n---\n# Guide\n[next](next.md)\n",
        );
        write(temp.path(), "next.md", "plain");

        let mut inventory = DocumentInventory::new(temp.path(), InventoryConfig::default());
        let records = inventory.scan().unwrap();
        assert_eq!(records.len(), 2);

        let summary = inventory.summary();
        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.frontmatter_coverage, 50.0);
        assert_eq!(summary.common_issues.get(DocumentIssue::MissingFrontmatter), 1);
    }

    #[test]
    fn test_export_writes_requested_formats() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.md", "# a");

        let mut inventory = DocumentInventory::new(temp.path(), InventoryConfig::default());
        inventory.scan().unwrap();
        let summary = inventory.summary();

        let prefix = temp.path().join("report").to_string_lossy().into_owned();
        let exported = inventory
            .export(&summary, &prefix, OutputFormat::Json, true)
            .unwrap();

        assert!(exported.csv.is_none());
        assert!(exported.json.unwrap().is_file());
        assert!(exported.baseline.unwrap().is_file());
        assert!(!temp.path().join("report.csv").exists());
    }

    fn summary_with(critical: usize, missing: usize) -> InventorySummary {
        let mut summary =
            InventorySummary::generate_at(&[], &InventoryConfig::default(), String::new());
        summary.complexity_distribution.critical = critical;
        let records: Vec<DocumentRecord> = (0..missing)
            .map(|i| {
                DocumentRecord::Analyzed(AnalyzedDocument::from_content(
                    &format!("{i}.md"),
                    "# x",
                    3,
                    String::new(),
                    &IssueThresholds::default(),
                ))
            })
            .collect();
        summary.common_issues =
            InventorySummary::generate_at(&records, &InventoryConfig::default(), String::new())
                .common_issues;
        summary
    }

    #[test]
    fn test_ci_verdict() {
        let policy = CiPolicy::default();

        assert_eq!(CiVerdict::evaluate(&summary_with(0, 5), &policy), CiVerdict::Pass);
        assert_eq!(
            CiVerdict::evaluate(&summary_with(2, 9), &policy),
            CiVerdict::TooManyCritical(2)
        );
        assert_eq!(
            CiVerdict::evaluate(&summary_with(0, 6), &policy),
            CiVerdict::TooManyMissingFrontmatter(6)
        );
    }

    #[test]
    fn test_ci_verdict_messages() {
        assert_eq!(CiVerdict::Pass.message(), None);
        assert!(!CiVerdict::Pass.is_failure());
        assert_eq!(
            CiVerdict::TooManyCritical(3).message().unwrap(),
            "💥 CI ERROR: 3 files with Critical complexity"
        );
        assert_eq!(
            CiVerdict::TooManyMissingFrontmatter(7).message().unwrap(),
            "💥 CI ERROR: 7 files missing Front-Matter"
        );
    }
}
