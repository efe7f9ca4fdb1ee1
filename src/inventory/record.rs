//! Per-file inventory records

use chrono::{DateTime, Local};
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use tracing::warn;

use super::analysis::ContentAnalysis;
use super::config::IssueThresholds;
use super::frontmatter;
use crate::scoring::{self, ComplexityLevel, DocumentIssue};
use crate::Result;

/// Fully analyzed document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedDocument {
    pub file_path: String,
    pub file_name: String,
    pub directory: String,
    pub size_bytes: u64,
    pub modified_time: String,

    pub has_frontmatter: bool,
    pub title: String,
    pub status: String,
    pub category: String,
    pub tags: String,

    pub lines: usize,
    pub words: usize,
    pub chars: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub headers: usize,
    pub code_blocks: usize,
    pub tables: usize,
    pub avg_line_length: f64,

    pub complexity_score: f64,
    pub complexity_level: ComplexityLevel,
    pub complexity_icon: String,

    pub issues: Vec<DocumentIssue>,
    pub sample_internal_links: String,
}

impl AnalyzedDocument {
    /// Build a record from document content and file metadata
    ///
    /// `\r\n` line endings are read as `\n`.
    pub fn from_content(
        file_path: &str,
        content: &str,
        size_bytes: u64,
        modified_time: String,
        thresholds: &IssueThresholds,
    ) -> Self {
        let content = normalize_line_endings(content);
        let frontmatter = frontmatter::extract(&content);
        let analysis = ContentAnalysis::analyze(&content);
        let complexity_score = scoring::complexity_score(&analysis);
        let complexity_level = ComplexityLevel::from_score(complexity_score);
        let issues = scoring::detect_issues(&analysis, frontmatter.as_ref(), thresholds);

        let field = |key: &str| {
            frontmatter
                .as_ref()
                .map(|fm| fm.field(key).to_string())
                .unwrap_or_default()
        };

        let (directory, file_name) = match file_path.rsplit_once('/') {
            Some((dir, name)) => (dir.to_string(), name.to_string()),
            None => (".".to_string(), file_path.to_string()),
        };

        Self {
            file_path: file_path.to_string(),
            file_name,
            directory,
            size_bytes,
            modified_time,
            has_frontmatter: frontmatter.is_some(),
            title: field("title"),
            status: field("status"),
            category: field("category"),
            tags: field("tags"),
            lines: analysis.lines,
            words: analysis.words,
            chars: analysis.chars,
            internal_links: analysis.internal_links,
            external_links: analysis.external_links,
            headers: analysis.headers,
            code_blocks: analysis.code_blocks,
            tables: analysis.tables,
            avg_line_length: scoring::round_to(analysis.avg_line_length, 1),
            complexity_score,
            complexity_level,
            complexity_icon: complexity_level.icon().to_string(),
            issues,
            sample_internal_links: analysis.sample_internal_links.join(", "),
        }
    }
}

/// File that could not be analyzed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedDocument {
    pub file_path: String,
    pub error: String,
    pub complexity_level: String,
    pub complexity_icon: String,
}

impl FailedDocument {
    pub fn new(file_path: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            error: error.into(),
            complexity_level: "Error".to_string(),
            complexity_icon: "❌".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentRecord {
    Analyzed(AnalyzedDocument),
    Failed(FailedDocument),
}

impl DocumentRecord {
    pub fn file_path(&self) -> &str {
        match self {
            DocumentRecord::Analyzed(doc) => &doc.file_path,
            DocumentRecord::Failed(failed) => &failed.file_path,
        }
    }

    pub fn as_analyzed(&self) -> Option<&AnalyzedDocument> {
        match self {
            DocumentRecord::Analyzed(doc) => Some(doc),
            DocumentRecord::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DocumentRecord::Failed(_))
    }
}

/// Replace `\r\n` with `\n`, borrowing when there is nothing to replace
pub fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains("\r\n") {
        Cow::Owned(content.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Root-relative path using `/` separators
pub fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Local ISO-8601 rendering of a file modification time
pub fn format_modified(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.f")
        .to_string()
}

/// Analyze one file; read failures become a [`FailedDocument`]
pub fn analyze_file(root: &Path, path: &Path, thresholds: &IssueThresholds) -> DocumentRecord {
    let file_path = relative_path(root, path);
    match read_and_analyze(&file_path, path, thresholds) {
        Ok(doc) => DocumentRecord::Analyzed(doc),
        Err(e) => {
            warn!("Failed to analyze {}: {}", file_path, e);
            DocumentRecord::Failed(FailedDocument::new(file_path, e.to_string()))
        }
    }
}

fn read_and_analyze(
    file_path: &str,
    path: &Path,
    thresholds: &IssueThresholds,
) -> Result<AnalyzedDocument> {
    let content = fs::read_to_string(path)?;
    let metadata = fs::metadata(path)?;
    let modified_time = format_modified(metadata.modified()?);

    Ok(AnalyzedDocument::from_content(
        file_path,
        &content,
        metadata.len(),
        modified_time,
        thresholds,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_content_with_frontmatter() {
        let content = "---\ntitle: Intro\nstatus: published\ncategory: guide\n---\n# Intro\nSee [next](next.md).\n";
        let doc = AnalyzedDocument::from_content(
            "docs/intro.md",
            content,
            content.len() as u64,
            "2024-01-01T00:00:00".to_string(),
            &IssueThresholds::default(),
        );

        assert_eq!(doc.file_name, "intro.md");
        assert_eq!(doc.directory, "docs");
        assert!(doc.has_frontmatter);
        assert_eq!(doc.title, "Intro");
        assert_eq!(doc.category, "guide");
        assert_eq!(doc.internal_links, 1);
        assert_eq!(doc.sample_internal_links, "[next](next.md)");
        assert_eq!(doc.complexity_level, ComplexityLevel::Low);
        assert_eq!(doc.complexity_icon, "🟢");
        assert!(doc.issues.is_empty());
    }

    #[test]
    fn test_from_content_crlf_matches_lf() {
        let lf = "---\ntitle: Guide\nstatus: ok\ncategory: docs\n---\n# Guide\n";
        let crlf = lf.replace('\n', "\r\n");
        let analyze = |content: &str| {
            AnalyzedDocument::from_content(
                "g.md",
                content,
                content.len() as u64,
                String::new(),
                &IssueThresholds::default(),
            )
        };

        let doc = analyze(&crlf);
        let expected = analyze(lf);

        assert!(doc.has_frontmatter);
        assert_eq!(doc.title, "Guide");
        assert_eq!(doc.category, "docs");
        assert!(!doc.issues.contains(&DocumentIssue::MissingFrontmatter));
        assert_eq!(doc.issues, expected.issues);
        assert_eq!(doc.chars, expected.chars);
        assert_eq!(doc.lines, expected.lines);
        assert_eq!(doc.complexity_score, expected.complexity_score);
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\r\n"), "a\nb\n");
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed(_)));
        // Lone carriage returns are left alone
        assert_eq!(normalize_line_endings("a\rb"), "a\rb");
    }

    #[test]
    fn test_from_content_top_level_file() {
        let doc = AnalyzedDocument::from_content(
            "README.md",
            "plain text",
            10,
            String::new(),
            &IssueThresholds::default(),
        );

        assert_eq!(doc.directory, ".");
        assert_eq!(doc.file_name, "README.md");
        assert!(!doc.has_frontmatter);
        assert_eq!(doc.title, "");
        assert_eq!(doc.issues, vec![DocumentIssue::MissingFrontmatter]);
    }

    #[test]
    fn test_analyze_file_reads_from_disk() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("guides");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("setup.md");
        fs::write(&path, "# Setup\n").unwrap();

        let record = analyze_file(temp.path(), &path, &IssueThresholds::default());
        let doc = record.as_analyzed().unwrap();

        assert_eq!(doc.file_path, "guides/setup.md");
        assert_eq!(doc.size_bytes, 8);
        assert_eq!(doc.headers, 1);
        assert!(!doc.modified_time.is_empty());
    }

    #[test]
    fn test_analyze_file_invalid_utf8_fails_softly() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let record = analyze_file(temp.path(), &path, &IssueThresholds::default());
        assert!(record.is_failed());
        assert_eq!(record.file_path(), "binary.md");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["complexity_level"], "Error");
        assert_eq!(json["complexity_icon"], "❌");
        assert!(json["error"].as_str().is_some());
    }

    #[test]
    fn test_analyzed_record_serializes_flat() {
        let record = DocumentRecord::Analyzed(AnalyzedDocument::from_content(
            "a.md",
            "# A\n",
            4,
            String::new(),
            &IssueThresholds::default(),
        ));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["file_path"], "a.md");
        assert_eq!(json["complexity_level"], "Low");
        assert_eq!(json["issues"][0], "MISSING_FRONTMATTER");
    }
}
