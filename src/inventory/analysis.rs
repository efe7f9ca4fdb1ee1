//! Markdown content analysis

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static INTERNAL_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*?\]\([^)]*\.md[^)]*\)").expect("Invalid regex pattern"));
static EXTERNAL_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*?\]\(https?://[^)]+\)").expect("Invalid regex pattern"));
static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#+\s+.*$").expect("Invalid regex pattern"));
static CODE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[\s\S]*?```").expect("Invalid regex pattern"));
static TABLE_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|.*\|").expect("Invalid regex pattern"));

/// Number of internal links kept as samples
pub const SAMPLE_LINK_COUNT: usize = 5;

/// Raw counts for a single document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub headers: usize,
    pub code_blocks: usize,
    pub tables: usize,
    /// First few internal links, in document order
    pub sample_internal_links: Vec<String>,
    pub avg_line_length: f64,
}

impl ContentAnalysis {
    pub fn analyze(content: &str) -> Self {
        let lines: Vec<&str> = content.lines().collect();

        let internal: Vec<&str> = INTERNAL_LINK.find_iter(content).map(|m| m.as_str()).collect();

        let avg_line_length = if lines.is_empty() {
            0.0
        } else {
            let total: usize = lines.iter().map(|line| line.chars().count()).sum();
            total as f64 / lines.len() as f64
        };

        Self {
            lines: lines.len(),
            words: content.split_whitespace().count(),
            chars: content.chars().count(),
            internal_links: internal.len(),
            external_links: EXTERNAL_LINK.find_iter(content).count(),
            headers: HEADER.find_iter(content).count(),
            code_blocks: CODE_BLOCK.find_iter(content).count(),
            tables: TABLE_ROW.find_iter(content).count(),
            sample_internal_links: internal
                .iter()
                .take(SAMPLE_LINK_COUNT)
                .map(|s| s.to_string())
                .collect(),
            avg_line_length,
        }
    }
}
