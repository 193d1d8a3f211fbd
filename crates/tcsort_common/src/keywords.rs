//! Signal → component lookup, loaded from the two-column reference table.

use crate::error::Result;
use crate::model::{COL_COMPONENT, COL_SIGNAL};
use crate::table::Table;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::{info, warn};

/// Read-only signal lookup, built once per conversion run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalComponentMap {
    signals: HashMap<String, String>,
}

impl SignalComponentMap {
    /// Pair Signal with Component row by row; a repeated signal keeps the
    /// component from its last row.
    pub fn load(table: &Table) -> Result<Self> {
        let signal_col = table.require_column("Reference", COL_SIGNAL)?;
        let component_col = table.require_column("Reference", COL_COMPONENT)?;

        let mut signals = HashMap::new();
        for row in &table.rows {
            let cell = |i: usize| row.get(i).map(ToString::to_string).unwrap_or_default();
            let signal = cell(signal_col);
            if signal.is_empty() {
                continue;
            }
            let component = cell(component_col);
            if component.trim().is_empty() {
                warn!("Signal '{}' has no component, skipped", signal);
                continue;
            }
            signals.insert(signal, component);
        }

        Ok(Self { signals })
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let map = Self::load(&Table::read_path(path)?)?;
        info!(
            "Action: Configuration reads completed ({} signals from {})",
            map.len(),
            path.display()
        );
        Ok(map)
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.signals.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Pairs sorted by signal
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut pairs: Vec<_> = self
            .signals
            .iter()
            .map(|(s, c)| (s.as_str(), c.as_str()))
            .collect();
        pairs.sort();
        pairs.into_iter()
    }

    /// Distinct component names, sorted
    pub fn components(&self) -> Vec<&str> {
        self.signals
            .values()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<S: Into<String>, C: Into<String>> FromIterator<(S, C)> for SignalComponentMap {
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        Self {
            signals: iter
                .into_iter()
                .map(|(s, c)| (s.into(), c.into()))
                .collect(),
        }
    }
}
