//! Test-case rows and column names.

use crate::error::{Result, SortError};
use crate::table::{Cell, Table};
use std::fmt;

pub const COL_TEST_CASE_ID: &str = "Test Case ID";
pub const COL_TEST_PRIORITY: &str = "Test Priority";
pub const COL_TEST_TYPE: &str = "Test Type";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_PRECONDITIONS: &str = "Preconditions";
pub const COL_TEST_STEPS: &str = "Test Steps";
pub const COL_EXPECTED_RESULTS: &str = "Expected Results";
pub const COL_REFERENCE: &str = "Reference";
pub const COL_COMPONENT: &str = "Component";
pub const COL_SIGNAL: &str = "Signal";

/// Columns every input table must carry, in check order
pub const INPUT_COLUMNS: [&str; 7] = [
    COL_TEST_CASE_ID,
    COL_TEST_PRIORITY,
    COL_TEST_TYPE,
    COL_DESCRIPTION,
    COL_PRECONDITIONS,
    COL_TEST_STEPS,
    COL_EXPECTED_RESULTS,
];

/// Test priority, also the bucket order inside a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Exact, case-sensitive match on the spreadsheet value
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "High" => Some(Priority::High),
            "Medium" => Some(Priority::Medium),
            "Low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input test case
#[derive(Debug, Clone, PartialEq)]
pub struct TestCaseRow {
    /// Working ID; rewritten to the component placeholder on classification
    pub test_case_id: Cell,
    pub test_priority: Cell,
    pub test_type: Cell,
    pub description: Cell,
    pub preconditions: Cell,
    pub test_steps: Cell,
    pub expected_results: Cell,
    /// Original ID, captured before any rewrite
    pub reference: Cell,
}

impl TestCaseRow {
    /// Build rows from an input table. All seven input columns must exist.
    pub fn rows_from_table(table: &Table) -> Result<Vec<Self>> {
        let mut idx = [0usize; 7];
        for (slot, name) in idx.iter_mut().zip(INPUT_COLUMNS) {
            *slot = table.require_column("Input", name)?;
        }

        let get = |row: &[Cell], i: usize| row.get(idx[i]).cloned().unwrap_or_default();

        Ok(table
            .rows
            .iter()
            .map(|row| {
                let test_case_id = get(row, 0);
                TestCaseRow {
                    reference: test_case_id.clone(),
                    test_case_id,
                    test_priority: get(row, 1),
                    test_type: get(row, 2),
                    description: get(row, 3),
                    preconditions: get(row, 4),
                    test_steps: get(row, 5),
                    expected_results: get(row, 6),
                }
            })
            .collect())
    }

    /// Resolve the priority used as bucket key. `row` is the 1-based data row.
    pub fn priority(&self, row: usize) -> Result<Priority> {
        let value = self.test_priority.to_string();
        Priority::parse(&value).ok_or_else(|| SortError::InvalidField {
            row,
            field: COL_TEST_PRIORITY.to_string(),
            value,
        })
    }

    /// The seven input columns, in [`INPUT_COLUMNS`] order
    pub fn input_cells(&self) -> Vec<Cell> {
        vec![
            self.test_case_id.clone(),
            self.test_priority.clone(),
            self.test_type.clone(),
            self.description.clone(),
            self.preconditions.clone(),
            self.test_steps.clone(),
            self.expected_results.clone(),
        ]
    }
}
