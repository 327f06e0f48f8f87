use std::num::ParseIntError;

use thiserror::Error;

use super::config::MatrixConfig;

/// Problems found in individual table rows. None of them stop parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("line {line}: expected {expected} cells, found {found}")]
    CellCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: cannot parse {column} cell '{cell}' as an integer: {source}")]
    NumericParseFailure {
        line: usize,
        column: String,
        cell: String,
        source: ParseIntError,
    },
}

/// Score slots accumulated for one option, one per criterion in row order.
/// `None` marks a cell that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionScores {
    pub name: String,
    pub scores: Vec<Option<i64>>,
}

/// Ordered named accumulators, one per option in column order.
pub type ScoreTable = Vec<OptionScores>;

/// Weight slots, parallel-indexed with every option's scores.
pub type WeightVector = Vec<Option<i64>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    /// Criterion labels (first cell of each accepted row)
    pub criteria: Vec<String>,
    pub scores: ScoreTable,
    pub weights: WeightVector,
    /// Rows dropped for having the wrong number of cells
    pub skipped: Vec<TableError>,
    /// Cells that failed integer parsing
    pub failures: Vec<TableError>,
}

impl ParsedTable {
    /// True when every non-header line was a well-formed data row.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failures.is_empty()
    }
}

/// Parse a markdown decision table.
///
/// The first `header_rows` lines are skipped without inspection. Every other
/// line is trimmed of surrounding pipes, then whitespace, and split on `|`.
/// Blank lines are ignored; other lines with the wrong cell count are recorded
/// in `skipped`. A malformed numeric cell leaves an empty slot so later rows stay
/// aligned with their weights.
pub fn parse_table(text: &str, config: &MatrixConfig) -> ParsedTable {
    let options = config.option_names();
    let expected = config.expected_cells();

    let mut parsed = ParsedTable {
        criteria: Vec::new(),
        scores: options
            .iter()
            .map(|name| OptionScores {
                name: name.clone(),
                scores: Vec::new(),
            })
            .collect(),
        weights: Vec::new(),
        skipped: Vec::new(),
        failures: Vec::new(),
    };

    for (idx, raw) in text.lines().enumerate().skip(config.header_rows()) {
        let line = idx + 1;
        let trimmed = raw.trim_matches('|').trim();
        if trimmed.is_empty() {
            continue;
        }
        let cells: Vec<&str> = trimmed.split('|').collect();

        if cells.len() != expected {
            parsed.skipped.push(TableError::CellCountMismatch {
                line,
                expected,
                found: cells.len(),
            });
            continue;
        }

        parsed.criteria.push(cells[0].trim().to_string());

        for (slot, name) in options.iter().enumerate() {
            let value = parse_cell(cells[slot + 1], line, name, &mut parsed.failures);
            parsed.scores[slot].scores.push(value);
        }

        let weight = parse_cell(cells[expected - 1], line, "Weight", &mut parsed.failures);
        parsed.weights.push(weight);
    }

    parsed
}

fn parse_cell(cell: &str, line: usize, column: &str, failures: &mut Vec<TableError>) -> Option<i64> {
    let cell = cell.trim();
    match cell.parse::<i64>() {
        Ok(value) => Some(value),
        Err(source) => {
            failures.push(TableError::NumericParseFailure {
                line,
                column: column.to_string(),
                cell: cell.to_string(),
                source,
            });
            None
        }
    }
}
