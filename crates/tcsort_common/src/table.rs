//! In-memory tables read from spreadsheets or delimited text.
//!
//! Both the reference table (Signal/Component) and the test-case input
//! are read in full before anything is classified. The first row is always
//! the header row.

use crate::error::{Result, SortError};
use calamine::{open_workbook_auto, Data, Reader};
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A single cell value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Text content, only for cells that actually hold text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            // Spreadsheets store integers as floats; print 7.0 as 7
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

/// Header plus data rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, Cell::Empty);
                }
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Index of a column by exact header name
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like [`Table::column`], failing with `MissingColumn` naming the table
    pub fn require_column(&self, table: &str, name: &str) -> Result<usize> {
        self.column(name)
            .ok_or_else(|| SortError::missing_column(table, name))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Read a table, picking the reader from the file extension
    pub fn read_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let table = match ext.as_str() {
            "xlsx" | "xlsm" | "xls" | "ods" => Self::read_workbook(path)?,
            "csv" => Self::read_csv(std::fs::File::open(path)?)?,
            _ => return Err(SortError::UnsupportedFormat(path.to_path_buf())),
        };

        debug!(
            "Read {} rows x {} columns from {}",
            table.len(),
            table.headers.len(),
            path.display()
        );
        Ok(table)
    }

    /// First worksheet of a workbook
    pub fn read_workbook(path: &Path) -> Result<Self> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook.worksheet_range_at(0).ok_or_else(|| {
            SortError::Workbook(format!("{} has no worksheets", path.display()))
        })??;

        let mut rows = range.rows();
        let headers = match rows.next() {
            Some(header) => header
                .iter()
                .map(|c| cell_from_data(c).to_string().trim().to_string())
                .collect(),
            None => Vec::new(),
        };
        let rows = rows
            .map(|row| row.iter().map(cell_from_data).collect())
            .collect();

        Ok(Self::new(headers, rows))
    }

    /// Delimited text with a header row
    pub fn read_csv<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(Cell::from).collect());
        }

        Ok(Self::new(headers, rows))
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        other => Cell::Text(other.to_string()),
    }
}
