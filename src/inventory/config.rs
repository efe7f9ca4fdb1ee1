//! Inventory configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no
//! file at all) yields the standard thresholds.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the scan root when no explicit config is given
pub const CONFIG_FILE_NAME: &str = ".doc-inventory.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Path fragments that exclude a file from the scan
    pub skip_patterns: Vec<String>,
    /// Hotspots kept in the summary
    pub hotspot_limit: usize,
    /// Hotspots printed in the text report
    pub report_hotspots: usize,
    /// Issue kinds kept in `common_issues`
    pub common_issue_limit: usize,
    pub thresholds: IssueThresholds,
    pub ci: CiPolicy,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            skip_patterns: [
                "node_modules/",
                ".git/",
                "__pycache__/",
                "build/",
                ".claude/tmp/",
                "venv/",
                ".venv/",
                "dist/",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            hotspot_limit: 10,
            report_hotspots: 5,
            common_issue_limit: 5,
            thresholds: IssueThresholds::default(),
            ci: CiPolicy::default(),
        }
    }
}

/// Limits used by issue detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueThresholds {
    pub max_lines: usize,
    pub max_internal_links: usize,
    pub max_avg_line_length: f64,
    pub unstructured_min_lines: usize,
    pub isolated_min_lines: usize,
}

impl Default for IssueThresholds {
    fn default() -> Self {
        Self {
            max_lines: 500,
            max_internal_links: 10,
            max_avg_line_length: 120.0,
            unstructured_min_lines: 50,
            isolated_min_lines: 100,
        }
    }
}

/// Gate applied in CI mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CiPolicy {
    pub max_critical: usize,
    pub max_missing_frontmatter: usize,
}

impl Default for CiPolicy {
    fn default() -> Self {
        Self {
            max_critical: 0,
            max_missing_frontmatter: 5,
        }
    }
}

impl InventoryConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Resolve the configuration for a scan of `root`
    ///
    /// An explicit path must exist. Otherwise `root/.doc-inventory.toml` is
    /// used when present, falling back to defaults.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        let candidate: Option<PathBuf> = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                default_path.is_file().then_some(default_path)
            }
        };

        match candidate {
            Some(path) => {
                debug!("Loading inventory config from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                debug!("No inventory config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Whether a root-relative path matches any skip pattern
    pub fn should_skip(&self, relative_path: &str) -> bool {
        self.skip_patterns
            .iter()
            .any(|pattern| relative_path.contains(pattern.as_str()))
    }
}
