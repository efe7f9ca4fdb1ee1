//! Document complexity scoring
//!
//! Turns raw content counts into a complexity score, a coarse level, and a
//! list of detected issues. Scores are unbounded; higher means harder to
//! maintain.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::inventory::analysis::ContentAnalysis;
use crate::inventory::config::IssueThresholds;
use crate::inventory::frontmatter::Frontmatter;

/// Frontmatter fields every document is expected to carry
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "status", "category"];

/// Complexity bucket for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ComplexityLevel {
    pub const ALL: [ComplexityLevel; 4] = [
        ComplexityLevel::Low,
        ComplexityLevel::Medium,
        ComplexityLevel::High,
        ComplexityLevel::Critical,
    ];

    pub fn from_score(score: f64) -> Self {
        if score < 50.0 {
            ComplexityLevel::Low
        } else if score < 100.0 {
            ComplexityLevel::Medium
        } else if score < 200.0 {
            ComplexityLevel::High
        } else {
            ComplexityLevel::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Low => "Low",
            ComplexityLevel::Medium => "Medium",
            ComplexityLevel::High => "High",
            ComplexityLevel::Critical => "Critical",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ComplexityLevel::Low => "🟢",
            ComplexityLevel::Medium => "🟡",
            ComplexityLevel::High => "🟠",
            ComplexityLevel::Critical => "🔴",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Problems detected in a single document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentIssue {
    LineLimitExceeded,
    LinkLimitExceeded,
    MissingFrontmatter,
    MissingTitle,
    MissingStatus,
    MissingCategory,
    LongLines,
    NoStructure,
    IsolatedDocument,
}

impl DocumentIssue {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentIssue::LineLimitExceeded => "LINE_LIMIT_EXCEEDED",
            DocumentIssue::LinkLimitExceeded => "LINK_LIMIT_EXCEEDED",
            DocumentIssue::MissingFrontmatter => "MISSING_FRONTMATTER",
            DocumentIssue::MissingTitle => "MISSING_TITLE",
            DocumentIssue::MissingStatus => "MISSING_STATUS",
            DocumentIssue::MissingCategory => "MISSING_CATEGORY",
            DocumentIssue::LongLines => "LONG_LINES",
            DocumentIssue::NoStructure => "NO_STRUCTURE",
            DocumentIssue::IsolatedDocument => "ISOLATED_DOCUMENT",
        }
    }

    fn missing_field(field: &str) -> Option<Self> {
        match field {
            "title" => Some(DocumentIssue::MissingTitle),
            "status" => Some(DocumentIssue::MissingStatus),
            "category" => Some(DocumentIssue::MissingCategory),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Calculate the complexity score of a document
pub fn complexity_score(analysis: &ContentAnalysis) -> f64 {
    // 0.1 per line
    let base_score = analysis.lines as f64 * 0.1;

    // 2 per internal link
    let link_score = analysis.internal_links as f64 * 2.0;

    // 0.5 per header
    let header_score = analysis.headers as f64 * 0.5;

    // Lines averaging over 100 characters
    let long_line_penalty = (analysis.avg_line_length - 100.0).max(0.0) * 0.01;

    round_to(
        base_score + link_score + header_score + long_line_penalty,
        2,
    )
}

/// Detect issues for a document
///
/// An empty frontmatter block counts as missing.
pub fn detect_issues(
    analysis: &ContentAnalysis,
    frontmatter: Option<&Frontmatter>,
    thresholds: &IssueThresholds,
) -> Vec<DocumentIssue> {
    let mut issues = Vec::new();

    if analysis.lines > thresholds.max_lines {
        issues.push(DocumentIssue::LineLimitExceeded);
    }

    if analysis.internal_links > thresholds.max_internal_links {
        issues.push(DocumentIssue::LinkLimitExceeded);
    }

    match frontmatter.filter(|fm| !fm.is_empty()) {
        None => issues.push(DocumentIssue::MissingFrontmatter),
        Some(fm) => issues.extend(
            REQUIRED_FIELDS
                .iter()
                .filter(|field| !fm.has(field))
                .filter_map(|field| DocumentIssue::missing_field(field)),
        ),
    }

    if analysis.avg_line_length > thresholds.max_avg_line_length {
        issues.push(DocumentIssue::LongLines);
    }

    if analysis.headers == 0 && analysis.lines > thresholds.unstructured_min_lines {
        issues.push(DocumentIssue::NoStructure);
    }

    if analysis.internal_links == 0 && analysis.lines > thresholds.isolated_min_lines {
        issues.push(DocumentIssue::IsolatedDocument);
    }

    issues
}

/// Format a level for display, e.g. `🟠 High: 3 files`
pub fn format_level_count(level: ComplexityLevel, count: usize) -> String {
    format!("{} {}: {} files", level.icon(), level, count)
}
