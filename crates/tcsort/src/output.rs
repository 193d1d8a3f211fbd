//! Terminal output for tcsort commands

use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::PathBuf;
use tcsort_common::report::{Report, ReportRow};
use tcsort_common::Cell;

/// Whether stdout should get colour
pub fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Report listing as printed to the terminal. Component names on their own
/// line, detail rows tab-separated.
pub fn render_report(report: &Report, color: bool) -> String {
    if !color {
        return report.format_text();
    }

    let mut out = String::new();
    for (row, record) in report.rows.iter().zip(report.output_records()) {
        match row {
            ReportRow::Header(component) => {
                out.push('\n');
                out.push_str(&component.bold().cyan().to_string());
            }
            ReportRow::Detail(_) => {
                let fields: Vec<String> = record[1..].iter().map(Cell::to_string).collect();
                out.push('\n');
                out.push_str(&fields.join("\t"));
                out.push('\n');
            }
        }
    }
    out
}

pub fn print_report(report: &Report, failed: usize, dropped: usize, files: &[PathBuf]) {
    let color = use_color();
    println!("{}\n", render_report(report, color));

    let summary = format!(
        "{} classified, {} failed, {} without a known signal",
        report.detail_count(),
        failed,
        dropped
    );
    if color {
        println!("{}", summary.dimmed());
    } else {
        println!("{}", summary);
    }

    if !files.is_empty() {
        println!("Reports Generated");
        for path in files {
            println!("  {}", path.display());
        }
    }
}
