//! Aggregate statistics over a scan

use chrono::Local;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::config::InventoryConfig;
use super::record::{AnalyzedDocument, DocumentRecord};
use crate::scoring::{round_to, ComplexityLevel, DocumentIssue};

/// Category reported for documents without one
pub const UNCATEGORIZED: &str = "uncategorized";

/// Issues kept per hotspot
const HOTSPOT_ISSUES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    pub scan_date: String,
    pub total_files: usize,
    pub valid_files: usize,
    pub error_files: usize,

    pub total_lines: usize,
    pub total_words: usize,
    pub avg_lines_per_file: f64,
    pub avg_complexity_score: f64,

    /// Percentage of valid files carrying frontmatter
    pub frontmatter_coverage: f64,

    pub complexity_distribution: ComplexityDistribution,
    pub common_issues: IssueCounts,
    pub complexity_hotspots: Vec<Hotspot>,
    pub category_stats: CategoryStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComplexityDistribution {
    #[serde(rename = "Low")]
    pub low: usize,
    #[serde(rename = "Medium")]
    pub medium: usize,
    #[serde(rename = "High")]
    pub high: usize,
    #[serde(rename = "Critical")]
    pub critical: usize,
}

impl ComplexityDistribution {
    pub fn get(&self, level: ComplexityLevel) -> usize {
        match level {
            ComplexityLevel::Low => self.low,
            ComplexityLevel::Medium => self.medium,
            ComplexityLevel::High => self.high,
            ComplexityLevel::Critical => self.critical,
        }
    }

    fn record(&mut self, level: ComplexityLevel) {
        match level {
            ComplexityLevel::Low => self.low += 1,
            ComplexityLevel::Medium => self.medium += 1,
            ComplexityLevel::High => self.high += 1,
            ComplexityLevel::Critical => self.critical += 1,
        }
    }

    /// Levels with their counts, lowest first
    pub fn iter(&self) -> impl Iterator<Item = (ComplexityLevel, usize)> + '_ {
        ComplexityLevel::ALL
            .into_iter()
            .map(move |level| (level, self.get(level)))
    }
}

/// Issue counts, most frequent first; serialized as an ordered map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueCounts(Vec<(DocumentIssue, usize)>);

impl IssueCounts {
    pub fn get(&self, issue: DocumentIssue) -> usize {
        self.0
            .iter()
            .find(|(i, _)| *i == issue)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(DocumentIssue, usize)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for IssueCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (issue, count) in &self.0 {
            map.serialize_entry(issue.as_str(), count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotspot {
    pub file: String,
    pub complexity_score: f64,
    pub complexity_level: ComplexityLevel,
    pub lines: usize,
    pub internal_links: usize,
    pub main_issues: Vec<DocumentIssue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryStat {
    pub count: usize,
    pub total_lines: usize,
    pub avg_lines: f64,
    pub avg_complexity: f64,
    pub frontmatter_rate: f64,
}

/// Per-category statistics in first-seen order; serialized as an ordered map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStats(Vec<(String, CategoryStat)>);

impl CategoryStats {
    pub fn get(&self, category: &str) -> Option<&CategoryStat> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, stat)| stat)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, CategoryStat)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CategoryStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, stat) in &self.0 {
            map.serialize_entry(category, stat)?;
        }
        map.end()
    }
}

impl InventorySummary {
    /// Summarize records, stamped with the current local time
    pub fn generate(records: &[DocumentRecord], config: &InventoryConfig) -> Self {
        Self::generate_at(records, config, scan_timestamp())
    }

    pub fn generate_at(
        records: &[DocumentRecord],
        config: &InventoryConfig,
        scan_date: String,
    ) -> Self {
        let valid: Vec<&AnalyzedDocument> =
            records.iter().filter_map(DocumentRecord::as_analyzed).collect();
        let divisor = valid.len().max(1) as f64;

        let total_lines: usize = valid.iter().map(|doc| doc.lines).sum();
        let total_words: usize = valid.iter().map(|doc| doc.words).sum();
        let total_score: f64 = valid.iter().map(|doc| doc.complexity_score).sum();
        let with_frontmatter = valid.iter().filter(|doc| doc.has_frontmatter).count();

        Self {
            scan_date,
            total_files: records.len(),
            valid_files: valid.len(),
            error_files: records.len() - valid.len(),
            total_lines,
            total_words,
            avg_lines_per_file: round_to(total_lines as f64 / divisor, 1),
            avg_complexity_score: round_to(total_score / divisor, 2),
            frontmatter_coverage: round_to(with_frontmatter as f64 / divisor * 100.0, 1),
            complexity_distribution: distribution(&valid),
            common_issues: issue_statistics(&valid, config.common_issue_limit),
            complexity_hotspots: hotspots(&valid, config.hotspot_limit),
            category_stats: category_statistics(&valid),
        }
    }
}

/// Local ISO-8601 timestamp for scan metadata
pub fn scan_timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

fn distribution(docs: &[&AnalyzedDocument]) -> ComplexityDistribution {
    let mut dist = ComplexityDistribution::default();
    for doc in docs {
        dist.record(doc.complexity_level);
    }
    dist
}

fn issue_statistics(docs: &[&AnalyzedDocument], limit: usize) -> IssueCounts {
    let mut counts: Vec<(DocumentIssue, usize)> = Vec::new();
    for issue in docs.iter().flat_map(|doc| doc.issues.iter()) {
        match counts.iter_mut().find(|(seen, _)| seen == issue) {
            Some((_, count)) => *count += 1,
            None => counts.push((*issue, 1)),
        }
    }

    // Stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    IssueCounts(counts)
}

fn hotspots(docs: &[&AnalyzedDocument], limit: usize) -> Vec<Hotspot> {
    let mut sorted: Vec<&AnalyzedDocument> = docs.to_vec();
    sorted.sort_by(|a, b| b.complexity_score.total_cmp(&a.complexity_score));

    sorted
        .into_iter()
        .take(limit)
        .map(|doc| Hotspot {
            file: doc.file_path.clone(),
            complexity_score: doc.complexity_score,
            complexity_level: doc.complexity_level,
            lines: doc.lines,
            internal_links: doc.internal_links,
            main_issues: doc.issues.iter().take(HOTSPOT_ISSUES).copied().collect(),
        })
        .collect()
}

fn category_of(doc: &AnalyzedDocument) -> &str {
    if doc.category.is_empty() {
        UNCATEGORIZED
    } else {
        &doc.category
    }
}

fn category_statistics(docs: &[&AnalyzedDocument]) -> CategoryStats {
    let mut groups: Vec<(String, Vec<&AnalyzedDocument>)> = Vec::new();
    for &doc in docs {
        let category = category_of(doc);
        match groups.iter_mut().find(|(name, _)| name == category) {
            Some((_, members)) => members.push(doc),
            None => groups.push((category.to_string(), vec![doc])),
        }
    }

    let stats = groups
        .into_iter()
        .map(|(name, members)| {
            let count = members.len();
            let total_lines: usize = members.iter().map(|doc| doc.lines).sum();
            let total_score: f64 = members.iter().map(|doc| doc.complexity_score).sum();
            let with_frontmatter = members.iter().filter(|doc| doc.has_frontmatter).count();

            let stat = CategoryStat {
                count,
                total_lines,
                avg_lines: round_to(total_lines as f64 / count as f64, 1),
                avg_complexity: round_to(total_score / count as f64, 2),
                frontmatter_rate: round_to(with_frontmatter as f64 / count as f64 * 100.0, 1),
            };
            (name, stat)
        })
        .collect();

    CategoryStats(stats)
}
