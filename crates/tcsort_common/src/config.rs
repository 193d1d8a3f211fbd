//! tcsort configuration
//!
//! Configuration lives in `tcsort.toml` in the working directory unless a
//! path is given explicitly. Every section is optional.

use crate::classifier::UnmatchedPolicy;
use crate::error::{Result, SortError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "tcsort.toml";

/// Default reference table
pub const DEFAULT_KEYWORDS_FILE: &str = "LabCar_Keywords.xlsx";

/// Report file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Xlsx,
    Csv,
    Html,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Xlsx, OutputFormat::Csv, OutputFormat::Html];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
            OutputFormat::Html => "html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Reference table settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// Signal/Component table (xlsx or csv)
    #[serde(default = "default_keywords_path")]
    pub path: PathBuf,
}

fn default_keywords_path() -> PathBuf {
    PathBuf::from(DEFAULT_KEYWORDS_FILE)
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            path: default_keywords_path(),
        }
    }
}

/// Classification settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// Rows with steps text but no known signal: drop or fail
    #[serde(default)]
    pub unmatched: UnmatchedPolicy,
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// File name without extension
    #[serde(default = "default_output_stem")]
    pub stem: String,

    #[serde(default = "default_output_formats")]
    pub formats: Vec<OutputFormat>,

    /// Remove spaces from data cells in the CSV report
    #[serde(default = "default_strip_spaces")]
    pub strip_spaces_in_csv: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_stem() -> String {
    "output_results".to_string()
}

fn default_output_formats() -> Vec<OutputFormat> {
    OutputFormat::ALL.to_vec()
}

fn default_strip_spaces() -> bool {
    true
}

impl OutputConfig {
    pub fn path_for(&self, format: OutputFormat) -> PathBuf {
        self.dir
            .join(format!("{}.{}", self.stem, format.extension()))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            stem: default_output_stem(),
            formats: default_output_formats(),
            strip_spaces_in_csv: default_strip_spaces(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Append log lines to this file instead of stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Complete tcsort configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    #[serde(default)]
    pub keywords: KeywordsConfig,

    #[serde(default)]
    pub classify: ClassifyConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl SortConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| SortError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SortError::Config(e.to_string()))
    }

    /// Explicit path if given, else `./tcsort.toml` when present, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.exists() {
                    Self::load_from(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SortError::Config(e.to_string()))
    }
}
