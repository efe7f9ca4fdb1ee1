//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Documentation tree builder for setting up inventory scans
pub struct DocsTreeBuilder {
    temp_dir: TempDir,
    files: Vec<(PathBuf, String)>,
}

impl DocsTreeBuilder {
    /// Create a new, empty docs tree
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
            files: Vec::new(),
        })
    }

    /// Add a file with raw content
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        self.files
            .push((path.as_ref().to_path_buf(), content.to_string()));
        self
    }

    /// Add a Markdown file with complete frontmatter
    pub fn with_document(self, path: impl AsRef<Path>, category: &str, body: &str) -> Self {
        let content =
            format!("---\ntitle: Doc\nstatus: published\ncategory: {category}\n---\n{body}");
        self.with_file(path, &content)
    }

    /// Write all files and return the tree
    pub fn build(self) -> Result<DocsTree> {
        for (path, content) in &self.files {
            let full_path = self.temp_dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(full_path, content)?;
        }

        Ok(DocsTree {
            temp_dir: self.temp_dir,
        })
    }
}

/// A populated documentation tree in a temporary directory
pub struct DocsTree {
    temp_dir: TempDir,
}

impl DocsTree {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Output prefix inside the tree, outside any scanned name
    pub fn output_prefix(&self, name: &str) -> String {
        self.path().join(name).to_string_lossy().into_owned()
    }

    pub fn read(&self, relative: &str) -> Result<String> {
        Ok(fs::read_to_string(self.path().join(relative))?)
    }
}

/// A long Markdown body with no headers or links
pub fn plain_lines(count: usize) -> String {
    (0..count).map(|i| format!("line number {i}\n")).collect()
}
