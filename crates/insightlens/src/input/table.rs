//! Parsed table representation.

use serde::{Deserialize, Serialize};

use crate::inference::parse;

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Cell {
    /// No value (empty after trimming and quote stripping).
    Empty,
    /// Raw text as it appeared in the input.
    Text(String),
}

impl Cell {
    /// Build a cell from an already-cleaned field.
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(field.to_string())
        }
    }

    /// Returns true if the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The cell text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.as_str()),
        }
    }

    /// The cell text, or `""` for an empty cell.
    pub fn as_str(&self) -> &str {
        self.text().unwrap_or("")
    }

    /// Interpret the cell as a finite number.
    pub fn number(&self) -> Option<f64> {
        self.text().and_then(parse::parse_number)
    }

    /// Interpret the cell as a calendar day key (`YYYY-MM-DD`).
    pub fn day_key(&self) -> Option<String> {
        self.text().and_then(parse::day_key)
    }
}

/// Tabular data parsed from one input document.
///
/// Rows are stored positionally and always hold exactly one cell per header.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table, padding short rows and dropping fields past the header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// Column names in input order (duplicates preserved).
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All data rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get all cells for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Parseable numbers in a column, skipping everything else.
    pub fn numbers(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.column_values(index).filter_map(Cell::number)
    }

    /// Get a specific cell.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}
