use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt::Write;

use crate::aggregator::PathOutcome;
use crate::cli::OutputFormat;
use crate::report::FileReport;

use super::JsonEntry;

/// `ctime(3)` layout, e.g. `Thu Nov 16 22:13:20 2023`.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub files_inspected: usize,
    pub failures: usize,
    pub results: Vec<JsonEntry<'a>>,
}

pub struct OutputFormatter;

impl OutputFormatter {
    /// Renders the successful reports. In text mode failures are left out;
    /// the caller reports them on stderr.
    pub fn format(outcomes: &[PathOutcome], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(outcomes
                .iter()
                .filter_map(PathOutcome::report)
                .map(Self::text_block)
                .collect()),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&Self::build_output(outcomes))?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    pub fn build_output(outcomes: &[PathOutcome]) -> JsonOutput<'_> {
        JsonOutput {
            files_inspected: outcomes.len(),
            failures: outcomes.iter().filter(|o| !o.is_ok()).count(),
            results: outcomes.iter().map(JsonEntry::from_outcome).collect(),
        }
    }

    /// One report followed by a blank line.
    pub fn text_block(report: &FileReport) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "File name: {}", report.name);
        let _ = writeln!(
            out,
            "File extension: {} ({})",
            report.extension, report.extension_type
        );
        let _ = writeln!(out, "File size: {} bytes", report.size_bytes);
        let _ = writeln!(
            out,
            "File creation time: {}",
            format_time(&report.creation_time)
        );
        let _ = writeln!(
            out,
            "File modification time: {}",
            format_time(&report.modification_time)
        );
        let _ = writeln!(out, "File type: {}", report.filesystem_type);
        let _ = writeln!(out, "File permissions: {}", report.permissions);
        let _ = writeln!(out, "Line ending: {}", report.line_ending);
        let _ = writeln!(out, "Kind of file: {}", report.content_type);
        out.push('\n');
        out
    }
}

pub fn format_time(time: &DateTime<Local>) -> String {
    time.format(CTIME_FORMAT).to_string()
}
