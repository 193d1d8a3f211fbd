//! tcsort common - classification of spreadsheet test cases by signal keyword.
//!
//! Reads the reference table (Signal → Component) and the test-case table,
//! groups every row whose Test Steps mention a known signal under that
//! signal's component and priority, and renders the grouped report.

pub mod classifier;
pub mod config;
pub mod error;
pub mod keywords;
pub mod model;
pub mod render;
pub mod report;
pub mod table;

pub use classifier::{
    classify, Classification, ClassificationContext, ClassificationResult, ComponentBuckets,
    UnmatchedPolicy,
};
pub use config::{OutputConfig, OutputFormat, SortConfig};
pub use error::SortError;
pub use keywords::SignalComponentMap;
pub use model::{Priority, TestCaseRow};
pub use report::{Report, ReportRow};
pub use table::{Cell, Table};
