//! Frontmatter extraction
//!
//! A document has frontmatter when it opens with `---\n` and the block is
//! closed by another `---\n`. The block is read as YAML; when that fails it
//! is read line by line as `key: value` pairs.

use serde::Serialize;
use serde_yaml::Value as YamlValue;
use std::collections::BTreeMap;

/// Flattened frontmatter fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter {
    fields: BTreeMap<String, String>,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Field value, or an empty string when absent
    pub fn field(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// True when the field is present and non-empty
    pub fn has(&self, key: &str) -> bool {
        !self.field(key).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl FromIterator<(String, String)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Extract frontmatter from document content
pub fn extract(content: &str) -> Option<Frontmatter> {
    let rest = content.strip_prefix("---\n")?;
    let end = rest.find("---\n")?;
    Some(parse_block(&rest[..end]))
}

fn parse_block(block: &str) -> Frontmatter {
    match serde_yaml::from_str::<serde_yaml::Mapping>(block) {
        Ok(mapping) => mapping
            .iter()
            .map(|(key, value)| (scalar_to_string(key), value_to_string(value)))
            .collect(),
        Err(_) => parse_lines(block),
    }
}

fn parse_lines(block: &str) -> Frontmatter {
    block
        .trim()
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| {
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

fn scalar_to_string(value: &YamlValue) -> String {
    match value {
        YamlValue::Null => String::new(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::String(s) => s.clone(),
        YamlValue::Tagged(tagged) => scalar_to_string(&tagged.value),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

fn value_to_string(value: &YamlValue) -> String {
    match value {
        YamlValue::Sequence(items) => items
            .iter()
            .map(scalar_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        other => scalar_to_string(other),
    }
}
