//! Human-readable summary report

use std::io::{self, Write};

use super::summary::InventorySummary;
use crate::scoring::format_level_count;

const RULE_WIDTH: usize = 60;

/// Format an integer with `,` thousands separators
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a score with at least one decimal place (`1.0`, `12.35`)
pub fn format_score(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Write the summary report
pub fn write_report<W: Write>(
    out: &mut W,
    summary: &InventorySummary,
    hotspots_shown: usize,
) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "📊 DOCUMENT COMPLEXITY ANALYSIS REPORT")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "📅 Scan Date: {}", summary.scan_date)?;
    writeln!(out, "📁 Total Files: {}", summary.total_files)?;
    writeln!(out, "✅ Valid Files: {}", summary.valid_files)?;
    if summary.error_files > 0 {
        writeln!(out, "❌ Error Files: {}", summary.error_files)?;
    }

    writeln!(out, "\n📈 BASIC STATISTICS")?;
    writeln!(out, "├─ Total Lines: {}", format_thousands(summary.total_lines))?;
    writeln!(out, "├─ Total Words: {}", format_thousands(summary.total_words))?;
    writeln!(out, "├─ Avg Lines/File: {:.1}", summary.avg_lines_per_file)?;
    writeln!(
        out,
        "└─ Avg Complexity: {}",
        format_score(summary.avg_complexity_score)
    )?;

    writeln!(out, "\n🏷️ FRONT-MATTER COVERAGE")?;
    writeln!(out, "└─ Coverage Rate: {:.1}%", summary.frontmatter_coverage)?;

    writeln!(out, "\n🎯 COMPLEXITY DISTRIBUTION")?;
    for (level, count) in summary.complexity_distribution.iter() {
        writeln!(out, "├─ {}", format_level_count(level, count))?;
    }

    writeln!(out, "\n⚠️ COMMON ISSUES")?;
    for (issue, count) in summary.common_issues.iter() {
        writeln!(out, "├─ {issue}: {count} files")?;
    }

    writeln!(out, "\n🔴 COMPLEXITY HOTSPOTS (Top {hotspots_shown})")?;
    for (i, hotspot) in summary
        .complexity_hotspots
        .iter()
        .take(hotspots_shown)
        .enumerate()
    {
        writeln!(
            out,
            "{}. {} (Score: {}, {} lines)",
            i + 1,
            hotspot.file,
            format_score(hotspot.complexity_score),
            hotspot.lines
        )?;
    }

    writeln!(out, "\n📊 CATEGORY BREAKDOWN")?;
    for (category, stat) in summary.category_stats.iter() {
        writeln!(
            out,
            "├─ {}: {} files, {:.1} avg lines",
            category, stat.count, stat.avg_lines
        )?;
    }

    writeln!(out, "\n{rule}")?;
    Ok(())
}
