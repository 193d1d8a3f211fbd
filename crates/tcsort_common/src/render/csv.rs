//! Delimited-text report.

use crate::error::Result;
use crate::report::{Report, FAILED_CAPTION, FAILED_COLUMNS, OUTPUT_COLUMNS};
use crate::table::Cell;
use std::io::Write;
use std::path::Path;

pub fn write(report: &Report, path: &Path, strip_spaces: bool) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_to(report, file, strip_spaces)
}

/// Output table, caption record, failed table. Rows have different widths,
/// so the writer runs in flexible mode.
pub fn write_to<W: Write>(report: &Report, writer: W, strip_spaces: bool) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    let field = |cell: &Cell| {
        let s = cell.to_string();
        if strip_spaces {
            s.replace(' ', "")
        } else {
            s
        }
    };

    wtr.write_record(OUTPUT_COLUMNS)?;
    for record in report.output_records() {
        wtr.write_record(record.iter().map(field))?;
    }

    wtr.write_record([FAILED_CAPTION])?;
    wtr.write_record(FAILED_COLUMNS)?;
    for record in report.failed_records() {
        wtr.write_record(record.iter().map(field))?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TestCaseRow;
    use crate::report::{DetailRow, ReportRow};

    fn sample_report() -> Report {
        let row = TestCaseRow {
            test_case_id: Cell::text("TC-Auth-"),
            test_priority: Cell::text("High"),
            test_type: Cell::text("Functional"),
            description: Cell::text("log in, then out"),
            preconditions: Cell::Empty,
            test_steps: Cell::text("press login"),
            expected_results: Cell::text("ok"),
            reference: Cell::Number(17.0),
        };
        Report {
            rows: vec![
                ReportRow::Header("Auth".to_string()),
                ReportRow::Detail(DetailRow {
                    reference: row.reference.clone(),
                    test_case_id: "TC-Auth-1".to_string(),
                    row,
                }),
            ],
            failed: vec![],
        }
    }

    fn render(strip_spaces: bool) -> String {
        let mut buf = Vec::new();
        write_to(&sample_report(), &mut buf, strip_spaces).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_layout_and_caption() {
        let out = render(false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "Component,Reference,Test Case ID,Test Priority,Test Type,Description,Preconditions,Test Steps,Expected Results"
        );
        assert_eq!(lines[1], "Auth,,,,,,,,");
        assert_eq!(lines[2], ",17,TC-Auth-1,High,Functional,\"log in, then out\",,press login,ok");
        assert_eq!(lines[3], "Failed Conditions");
        assert!(lines[4].starts_with("Test Case ID,Test Priority"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_strip_spaces_only_touches_data() {
        let out = render(true);
        assert!(out.contains("Test Case ID"));
        assert!(out.contains("\"login,thenout\""));
        assert!(out.contains("presslogin"));
    }
}
