//! Report formatting and output generation
//!
//! Formats an [`AnalysisReport`] for the console (including the text
//! histogram) or as JSON for programmatic use.

use crate::errors::AppResult;
use crate::types::AnalysisReport;
use serde::Serialize;

/// Non-ASCII ratio above which the report carries a data-quality warning
pub const HIGH_NON_ASCII_THRESHOLD: f64 = 0.20;

/// Widest bar rendered in the text histogram, in characters
const MAX_BAR_WIDTH: f64 = 40.0;

/// Output format options for analysis reports
#[derive(Debug, Clone, Default)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

/// Parse an output format string, defaulting to console
pub fn parse_format(format_str: &str) -> OutputFormat {
    match format_str.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Console,
    }
}

/// Format an analysis report in the requested output format
pub fn format_report(report: &AnalysisReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Console => {
            let mut output = String::new();
            let summary = &report.summary;

            output.push_str(&format!(
                "\n✅ Samples: {} | Tokens: {}\n",
                format_number(summary.sample_count),
                format_number(summary.total_tokens as usize)
            ));
            output.push_str(&format!(
                "📏 Avg: {:.1} | Min: {} | Max: {}\n",
                summary.mean_tokens, summary.min_tokens, summary.max_tokens
            ));

            if let Some(histogram) = &report.histogram {
                output.push_str("\n  Console Histogram:\n");
                let max_count = histogram.max_count();
                let scale = if max_count > 0 {
                    MAX_BAR_WIDTH / max_count as f64
                } else {
                    1.0
                };
                for bucket in &histogram.buckets {
                    let bar = "#".repeat((bucket.count as f64 * scale) as usize);
                    output.push_str(&format!(
                        "  [{:>6} - {:<6}]: {} ({})\n",
                        bucket.low as i64, bucket.high as i64, bar, bucket.count
                    ));
                }
            }

            output.push_str(&format!(
                "\n🌍 Non-ASCII Ratio: {:.2}%\n",
                summary.non_ascii_ratio * 100.0
            ));
            if summary.non_ascii_ratio > HIGH_NON_ASCII_THRESHOLD {
                output.push_str(
                    "⚠️  WARNING: High non-ASCII content (check for binary/foreign text)\n",
                );
            }

            Ok(output)
        }
    }
}

/// Format number with thousand separators for console output
///
/// # Examples
///
/// ```
/// # use corpus_stats::analysis::reports::format_number;
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
