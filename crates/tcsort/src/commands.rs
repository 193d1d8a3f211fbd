//! Command implementations

use crate::json_types::{ConvertSummary, KeywordEntry};
use crate::output;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tcsort_common::{
    render, Classification, ClassificationContext, Report, SignalComponentMap, SortConfig, Table,
    TestCaseRow,
};
use tracing::info;

/// Everything one conversion run produced
#[derive(Debug)]
pub struct Conversion {
    pub classification: Classification,
    pub report: Report,
    pub files: Vec<PathBuf>,
}

/// Load keywords and input, classify, and write every configured report
pub fn run_conversion(config: &SortConfig, input: &Path) -> Result<Conversion> {
    if !input.exists() {
        bail!("Input file not found: {}", input.display());
    }
    info!("Action: Input file selected, File: {}", input.display());

    let keywords_path = &config.keywords.path;
    let signals = SignalComponentMap::load_from_path(keywords_path)
        .with_context(|| format!("Failed to load keywords from {}", keywords_path.display()))?;

    let table = Table::read_path(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let rows = TestCaseRow::rows_from_table(&table)?;

    let classification = ClassificationContext::new(&signals)
        .with_unmatched(config.classify.unmatched)
        .classify(rows)?;

    let report = Report::build(&classification.components, &classification.failed);
    let files = render::write_all(&report, &config.output)
        .context("Failed to write reports")?
        .into_iter()
        .map(|p| std::fs::canonicalize(&p).unwrap_or(p))
        .collect::<Vec<_>>();

    info!(
        "Action: Generated results in {} format(s): {}",
        files.len(),
        files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(Conversion {
        classification,
        report,
        files,
    })
}

pub fn convert(config: &SortConfig, input: &Path, json: bool) -> Result<()> {
    let conversion = run_conversion(config, input)?;

    if json {
        let files = conversion
            .files
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        let summary = ConvertSummary::new(&conversion.classification, files);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        output::print_report(
            &conversion.report,
            conversion.classification.failed.len(),
            conversion.classification.dropped,
            &conversion.files,
        );
    }
    Ok(())
}

pub fn keywords(config: &SortConfig, json: bool) -> Result<()> {
    let keywords_path = &config.keywords.path;
    let signals = SignalComponentMap::load_from_path(keywords_path)
        .with_context(|| format!("Failed to load keywords from {}", keywords_path.display()))?;

    if json {
        let entries: Vec<KeywordEntry> = signals
            .iter()
            .map(|(signal, component)| KeywordEntry {
                signal: signal.to_string(),
                component: component.to_string(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let width = signals.iter().map(|(s, _)| s.len()).max().unwrap_or(0);
    for (signal, component) in signals.iter() {
        println!("{:<width$}  {}", signal, component, width = width);
    }
    println!(
        "\n{} signals, {} components",
        signals.len(),
        signals.components().len()
    );
    Ok(())
}

pub fn show_config(config: &SortConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
