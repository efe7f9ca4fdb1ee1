//! Demo entry point
//!
//! Writes the two banner lines and reports completion with a UTC timestamp.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use tracing::{debug, warn};

/// First banner line
pub const BANNER: &str = "Claude Code Sample Project - TDD × YAGNI × Auto Guards";

/// Second banner line
pub const STARTED: &str = "ワークスペース統合デモが開始されました";

/// Message carried by every successful run
pub const COMPLETED_MESSAGE: &str = "Demo completed";

/// Outcome of a demo run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Success => "success",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result record returned by [`main`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub message: String,
    /// ISO-8601 instant of construction, UTC with millisecond precision
    pub timestamp: String,
}

impl ExecutionResult {
    /// Build a completed result stamped with the current time
    pub fn completed() -> Self {
        Self::completed_at(Utc::now())
    }

    /// Build a completed result stamped with `instant`
    pub fn completed_at(instant: DateTime<Utc>) -> Self {
        Self {
            status: ExecutionStatus::Success,
            message: COMPLETED_MESSAGE.to_string(),
            timestamp: format_timestamp(instant),
        }
    }

    /// Parse the timestamp back into a UTC instant
    pub fn parsed_timestamp(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.timestamp).map(|dt| dt.with_timezone(&Utc))
    }
}

/// Format an instant the way [`ExecutionResult::timestamp`] stores it
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Write the banner to `out` and return the completion record
pub fn run<W: Write>(out: &mut W) -> io::Result<ExecutionResult> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{STARTED}")?;
    out.flush()?;

    let result = ExecutionResult::completed();
    debug!(timestamp = %result.timestamp, "Demo completed");
    Ok(result)
}

/// Run the demo against stdout
///
/// Never fails: a broken stdout is logged and the result is still returned.
pub fn main() -> ExecutionResult {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match run(&mut handle) {
        Ok(result) => result,
        Err(e) => {
            warn!("Failed to write demo banner: {}", e);
            ExecutionResult::completed()
        }
    }
}
