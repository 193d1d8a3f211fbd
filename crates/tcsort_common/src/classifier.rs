//! Keyword classification of test-case rows.
//!
//! Each row's Test Steps text is split on whitespace and scanned left to
//! right. The first token that is a known signal decides the component;
//! later signals in the same row are ignored. Classified rows get a
//! placeholder ID (`TC-<component>-`) that the report numbers per component.
//!
//! Rows whose Test Steps is not usable text go to the failed list. Rows with
//! text but no known signal are dropped unless [`UnmatchedPolicy::Fail`] is
//! selected.

use crate::error::{Result, SortError};
use crate::keywords::SignalComponentMap;
use crate::model::{Priority, TestCaseRow};
use crate::table::Cell;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// What to do with text rows that contain no known signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    /// Leave them out of every output
    #[default]
    Drop,
    /// Report them alongside the failed rows
    Fail,
}

impl UnmatchedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnmatchedPolicy::Drop => "drop",
            UnmatchedPolicy::Fail => "fail",
        }
    }
}

/// Working ID given to a classified row; the report appends the counter
pub fn placeholder_id(component: &str) -> String {
    format!("TC-{}-", component)
}

/// Rows of one component, split by priority
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentBuckets {
    pub high: Vec<TestCaseRow>,
    pub medium: Vec<TestCaseRow>,
    pub low: Vec<TestCaseRow>,
}

impl ComponentBuckets {
    pub fn bucket(&self, priority: Priority) -> &[TestCaseRow] {
        match priority {
            Priority::High => &self.high,
            Priority::Medium => &self.medium,
            Priority::Low => &self.low,
        }
    }

    fn bucket_mut(&mut self, priority: Priority) -> &mut Vec<TestCaseRow> {
        match priority {
            Priority::High => &mut self.high,
            Priority::Medium => &mut self.medium,
            Priority::Low => &mut self.low,
        }
    }

    /// All rows, High then Medium then Low, input order within a bucket
    pub fn iter(&self) -> impl Iterator<Item = (Priority, &TestCaseRow)> {
        Priority::ALL
            .into_iter()
            .flat_map(move |p| self.bucket(p).iter().map(move |row| (p, row)))
    }

    pub fn len(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Component → buckets, in the order components were first matched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationResult {
    entries: Vec<(String, ComponentBuckets)>,
    index: HashMap<String, usize>,
}

impl ClassificationResult {
    /// Buckets for `component`, created empty on first use
    fn entry(&mut self, component: &str) -> &mut ComponentBuckets {
        let idx = match self.index.get(component) {
            Some(&idx) => idx,
            None => {
                self.entries
                    .push((component.to_string(), ComponentBuckets::default()));
                let idx = self.entries.len() - 1;
                self.index.insert(component.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub fn get(&self, component: &str) -> Option<&ComponentBuckets> {
        self.index.get(component).map(|&idx| &self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentBuckets)> {
        self.entries.iter().map(|(name, b)| (name.as_str(), b))
    }

    pub fn component_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total classified rows across all components
    pub fn row_count(&self) -> usize {
        self.entries.iter().map(|(_, b)| b.len()).sum()
    }
}

/// Output of one classification run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub components: ClassificationResult,
    pub failed: Vec<TestCaseRow>,
    /// Text rows with no known signal that were left out
    pub dropped: usize,
}

/// Per-run classification state
#[derive(Debug, Clone, Copy)]
pub struct ClassificationContext<'a> {
    signals: &'a SignalComponentMap,
    unmatched: UnmatchedPolicy,
}

impl<'a> ClassificationContext<'a> {
    pub fn new(signals: &'a SignalComponentMap) -> Self {
        Self {
            signals,
            unmatched: UnmatchedPolicy::default(),
        }
    }

    pub fn with_unmatched(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched = policy;
        self
    }

    /// First signal in `steps`, resolved to its component
    pub fn match_component(&self, steps: &str) -> Option<&'a str> {
        let signals = self.signals;
        steps.split_whitespace().find_map(|token| signals.get(token))
    }

    /// Classify rows in input order. Fails without partial output when a
    /// matched row carries an unknown priority.
    pub fn classify<I>(&self, rows: I) -> Result<Classification>
    where
        I: IntoIterator<Item = TestCaseRow>,
    {
        let mut out = Classification::default();

        for (i, mut row) in rows.into_iter().enumerate() {
            row.reference = row.test_case_id.clone();

            let steps = match row.test_steps.as_text() {
                Some(steps) if steps.split_whitespace().next().is_some() => steps,
                _ => {
                    debug!("Row {}: no usable test steps, marked failed", i + 1);
                    out.failed.push(row);
                    continue;
                }
            };

            match self.match_component(steps) {
                Some(component) => {
                    let priority = row.priority(i + 1)?;
                    debug!("Row {}: {} -> {} ({})", i + 1, row.reference, component, priority);
                    row.test_case_id = Cell::Text(placeholder_id(component));
                    out.components
                        .entry(component)
                        .bucket_mut(priority)
                        .push(row);
                }
                None => match self.unmatched {
                    UnmatchedPolicy::Drop => {
                        debug!("Row {}: no known signal, dropped", i + 1);
                        out.dropped += 1;
                    }
                    UnmatchedPolicy::Fail => {
                        debug!("Row {}: no known signal, marked failed", i + 1);
                        out.failed.push(row);
                    }
                },
            }
        }

        info!(
            "Classified {} rows into {} components ({} failed, {} dropped)",
            out.components.row_count(),
            out.components.len(),
            out.failed.len(),
            out.dropped
        );
        Ok(out)
    }
}

/// Classify with the default (drop) policy for unmatched rows
pub fn classify<I>(rows: I, signals: &SignalComponentMap) -> Result<Classification>
where
    I: IntoIterator<Item = TestCaseRow>,
{
    ClassificationContext::new(signals).classify(rows)
}
