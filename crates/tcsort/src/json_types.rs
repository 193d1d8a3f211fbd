//! JSON output types for `--json`

use serde::{Deserialize, Serialize};
use tcsort_common::{Classification, Priority};

/// Per-component row counts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentSummary {
    pub name: String,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Result of `tcsort convert --json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConvertSummary {
    pub components: Vec<ComponentSummary>,
    pub classified: usize,
    pub failed: usize,
    pub dropped: usize,
    pub files: Vec<String>,
}

impl ConvertSummary {
    pub fn new(classification: &Classification, files: Vec<String>) -> Self {
        let components = classification
            .components
            .iter()
            .map(|(name, buckets)| ComponentSummary {
                name: name.to_string(),
                high: buckets.bucket(Priority::High).len(),
                medium: buckets.bucket(Priority::Medium).len(),
                low: buckets.bucket(Priority::Low).len(),
            })
            .collect();

        Self {
            components,
            classified: classification.components.row_count(),
            failed: classification.failed.len(),
            dropped: classification.dropped,
            files,
        }
    }
}

/// One entry of `tcsort keywords --json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordEntry {
    pub signal: String,
    pub component: String,
}
