//! Line-oriented CSV tokenizer.
//!
//! Each input line is one record. A quote character toggles quoted mode, and
//! delimiters inside quotes belong to the field. Fields are trimmed and have
//! their surrounding quotes removed. Doubled quotes are not an escape.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::table::{Cell, Table};
use crate::error::{InsightError, Result};

/// Tokenizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Field separator.
    pub delimiter: char,
    /// Quote character.
    pub quote: char,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
        }
    }
}

/// Splits raw text into a header and data rows.
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a tokenizer with default configuration.
    pub fn new() -> Self {
        Self {
            config: TokenizerConfig::default(),
        }
    }

    /// Create a tokenizer with custom configuration.
    pub fn with_config(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Tokenize raw text into a table.
    ///
    /// Blank lines are skipped. Fails with [`InsightError::MalformedInput`]
    /// unless a header and at least one data line remain.
    pub fn tokenize(&self, raw: &str) -> Result<Table> {
        let lines: Vec<&str> = raw
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.trim().is_empty())
            .collect();

        if lines.len() < 2 {
            return Err(InsightError::MalformedInput { lines: lines.len() });
        }

        let headers: Vec<String> = self
            .split_line(lines[0])
            .into_iter()
            .map(|cell| cell.as_str().to_string())
            .collect();

        let rows: Vec<Vec<Cell>> = lines[1..]
            .iter()
            .map(|line| self.split_line(line))
            .collect();

        debug!(
            columns = headers.len(),
            rows = rows.len(),
            "tokenized input"
        );

        Ok(Table::new(headers, rows))
    }

    /// Split one line into cells, respecting quotes.
    fn split_line(&self, line: &str) -> Vec<Cell> {
        let mut cells = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for ch in line.chars() {
            match ch {
                c if c == self.config.quote => {
                    in_quotes = !in_quotes;
                    current.push(c);
                }
                c if c == self.config.delimiter && !in_quotes => {
                    cells.push(Cell::from_field(&self.clean_field(&current)));
                    current.clear();
                }
                c => current.push(c),
            }
        }
        cells.push(Cell::from_field(&self.clean_field(&current)));

        cells
    }

    /// Trim a raw field and strip its surrounding quotes.
    fn clean_field(&self, raw: &str) -> String {
        let quote = self.config.quote;
        let trimmed = raw.trim();
        let unquoted = trimmed.strip_prefix(quote).unwrap_or(trimmed);
        let unquoted = unquoted.strip_suffix(quote).unwrap_or(unquoted);
        unquoted.trim().to_string()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
