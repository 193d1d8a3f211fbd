//! Report writers: spreadsheet, delimited text and HTML.
//!
//! Every format writes the classified table first and the failed rows
//! below it, under the "Failed Conditions" caption.

pub mod csv;
pub mod html;
pub mod xlsx;

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::report::Report;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write one format to `path`
pub fn write_format(
    report: &Report,
    format: OutputFormat,
    path: &Path,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        OutputFormat::Xlsx => xlsx::write(report, path),
        OutputFormat::Csv => csv::write(report, path, config.strip_spaces_in_csv),
        OutputFormat::Html => html::write(report, path),
    }
}

/// Write every configured format into the output directory
pub fn write_all(report: &Report, config: &OutputConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.dir)?;

    let mut written = Vec::with_capacity(config.formats.len());
    for &format in &config.formats {
        let path = config.path_for(format);
        write_format(report, format, &path, config)?;
        info!("Action: Generated {} report: {}", format, path.display());
        written.push(path);
    }
    Ok(written)
}
