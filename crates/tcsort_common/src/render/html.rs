//! HTML report: two tables separated by a rule and the failed caption.

use crate::error::Result;
use crate::report::{Report, FAILED_CAPTION, FAILED_COLUMNS, OUTPUT_COLUMNS};
use crate::table::Cell;
use std::fmt::Write as _;
use std::path::Path;

pub fn write(report: &Report, path: &Path) -> Result<()> {
    std::fs::write(path, render(report))?;
    Ok(())
}

pub fn render(report: &Report) -> String {
    let mut html = render_table(&OUTPUT_COLUMNS, &report.output_records());
    let _ = write!(html, "<hr><b><caption>{}</caption></b>", FAILED_CAPTION);
    html.push_str(&render_table(&FAILED_COLUMNS, &report.failed_records()));
    html
}

fn render_table(columns: &[&str], records: &[Vec<Cell>]) -> String {
    let mut html = String::from("<table border=\"1\" class=\"dataframe\">\n");
    html.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n");
    for column in columns {
        let _ = writeln!(html, "      <th>{}</th>", escape(column));
    }
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for record in records {
        html.push_str("    <tr>\n");
        for cell in record {
            let _ = writeln!(html, "      <td>{}</td>", escape(&cell.to_string()));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>");
    html
}

fn escape(s: &str) -> String {
    v_htmlescape::escape(s).to_string()
}
