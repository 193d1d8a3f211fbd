//! Report model shared by every output format.
//!
//! Detail rows are numbered per component: the counter starts at 1 for the
//! first row of each component and runs across the High, Medium and Low
//! buckets in that order.

use crate::classifier::ClassificationResult;
use crate::model::{
    TestCaseRow, COL_COMPONENT, COL_DESCRIPTION, COL_EXPECTED_RESULTS, COL_PRECONDITIONS,
    COL_REFERENCE, COL_TEST_CASE_ID, COL_TEST_PRIORITY, COL_TEST_STEPS, COL_TEST_TYPE,
    INPUT_COLUMNS,
};
use crate::table::Cell;

/// Caption written between the output and failed tables
pub const FAILED_CAPTION: &str = "Failed Conditions";

pub const OUTPUT_COLUMNS: [&str; 9] = [
    COL_COMPONENT,
    COL_REFERENCE,
    COL_TEST_CASE_ID,
    COL_TEST_PRIORITY,
    COL_TEST_TYPE,
    COL_DESCRIPTION,
    COL_PRECONDITIONS,
    COL_TEST_STEPS,
    COL_EXPECTED_RESULTS,
];

pub const FAILED_COLUMNS: [&str; 7] = INPUT_COLUMNS;

/// A numbered, classified test case
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub reference: Cell,
    /// Placeholder plus counter, e.g. `TC-Auth-3`
    pub test_case_id: String,
    pub row: TestCaseRow,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportRow {
    Header(String),
    Detail(DetailRow),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub failed: Vec<TestCaseRow>,
}

impl Report {
    pub fn build(components: &ClassificationResult, failed: &[TestCaseRow]) -> Self {
        let mut rows = Vec::new();

        for (component, buckets) in components.iter() {
            if buckets.is_empty() {
                continue;
            }
            rows.push(ReportRow::Header(component.to_string()));

            let mut counter = 0u32;
            for (_, row) in buckets.iter() {
                counter += 1;
                rows.push(ReportRow::Detail(DetailRow {
                    reference: row.reference.clone(),
                    test_case_id: format!("{}{}", row.test_case_id, counter),
                    row: row.clone(),
                }));
            }
        }

        Self {
            rows,
            failed: failed.to_vec(),
        }
    }

    pub fn detail_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| matches!(r, ReportRow::Detail(_)))
            .count()
    }

    /// Records in [`OUTPUT_COLUMNS`] order
    pub fn output_records(&self) -> Vec<Vec<Cell>> {
        self.rows
            .iter()
            .map(|r| match r {
                ReportRow::Header(component) => {
                    let mut record = vec![Cell::Empty; OUTPUT_COLUMNS.len()];
                    record[0] = Cell::text(component.as_str());
                    record
                }
                ReportRow::Detail(d) => vec![
                    Cell::Empty,
                    d.reference.clone(),
                    Cell::text(d.test_case_id.as_str()),
                    d.row.test_priority.clone(),
                    d.row.test_type.clone(),
                    d.row.description.clone(),
                    d.row.preconditions.clone(),
                    d.row.test_steps.clone(),
                    d.row.expected_results.clone(),
                ],
            })
            .collect()
    }

    /// Records in [`FAILED_COLUMNS`] order
    pub fn failed_records(&self) -> Vec<Vec<Cell>> {
        self.failed.iter().map(TestCaseRow::input_cells).collect()
    }

    /// Plain-text listing: component names on their own line, detail rows
    /// as tab-separated fields.
    pub fn format_text(&self) -> String {
        let mut out = String::new();
        for record in self.output_records() {
            if !record[0].is_empty() {
                out.push('\n');
                out.push_str(&record[0].to_string());
            } else {
                let fields: Vec<String> = record[1..].iter().map(Cell::to_string).collect();
                out.push('\n');
                out.push_str(&fields.join("\t"));
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::keywords::SignalComponentMap;

    fn row(id: &str, priority: &str, steps: &str) -> TestCaseRow {
        TestCaseRow {
            test_case_id: Cell::text(id),
            test_priority: Cell::text(priority),
            test_type: Cell::text("Functional"),
            description: Cell::text("desc"),
            preconditions: Cell::Empty,
            test_steps: Cell::from(steps),
            expected_results: Cell::text("ok"),
            reference: Cell::Empty,
        }
    }

    fn ids(report: &Report) -> Vec<String> {
        report
            .rows
            .iter()
            .filter_map(|r| match r {
                ReportRow::Detail(d) => Some(d.test_case_id.clone()),
                ReportRow::Header(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_counter_shared_across_buckets() {
        let map: SignalComponentMap = [("login", "Auth")].into_iter().collect();
        let out = classify(
            vec![row("r2", "Low", "login later"), row("r1", "High", "login now")],
            &map,
        )
        .unwrap();
        let report = Report::build(&out.components, &out.failed);

        assert_eq!(report.rows[0], ReportRow::Header("Auth".to_string()));
        assert_eq!(ids(&report), vec!["TC-Auth-1", "TC-Auth-2"]);
        match &report.rows[1] {
            ReportRow::Detail(d) => assert_eq!(d.reference, Cell::text("r1")),
            other => panic!("expected detail row, got {other:?}"),
        }
    }

    #[test]
    fn test_counter_resets_per_component() {
        let map: SignalComponentMap = [("login", "Auth"), ("submit", "Form")].into_iter().collect();
        let out = classify(
            vec![
                row("a", "High", "login"),
                row("b", "High", "submit"),
                row("c", "Medium", "login"),
            ],
            &map,
        )
        .unwrap();
        let report = Report::build(&out.components, &out.failed);
        assert_eq!(ids(&report), vec!["TC-Auth-1", "TC-Auth-2", "TC-Form-1"]);
        assert_eq!(report.detail_count(), 3);
    }

    #[test]
    fn test_records_and_text() {
        let map: SignalComponentMap = [("login", "Auth")].into_iter().collect();
        let out = classify(vec![row("a", "High", "login"), row("b", "High", "")], &map).unwrap();
        let report = Report::build(&out.components, &out.failed);

        let records = report.output_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0][0], Cell::text("Auth"));
        assert!(records[0][1..].iter().all(Cell::is_empty));
        assert_eq!(records[1][2], Cell::text("TC-Auth-1"));

        let failed = report.failed_records();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].len(), FAILED_COLUMNS.len());
        assert_eq!(failed[0][0], Cell::text("b"));

        assert_eq!(
            report.format_text(),
            "\nAuth\na\tTC-Auth-1\tHigh\tFunctional\tdesc\t\tlogin\tok\n"
        );
    }
}
