//! Table and Row data structures

use crate::error::{Error, Result};

use super::column::{parse_number, NumericColumn};

/// A row of raw string cells
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Cell values in header order
    pub cells: Vec<String>,
    /// Original line number in the source (1-indexed, header is line 1)
    pub source_line: usize,
}

impl Row {
    /// Create a new row
    pub fn new(cells: Vec<String>, source_line: usize) -> Self {
        Self { cells, source_line }
    }

    /// Get a cell by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Number of cells in this row
    pub fn width(&self) -> usize {
        self.cells.len()
    }
}

/// Headers plus rows of string cells, aligned by position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column names from the first line; duplicates are allowed
    pub headers: Vec<String>,
    /// Data rows in source order
    pub rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given headers
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, cells: Vec<String>, source_line: usize) {
        self.rows.push(Row::new(cells, source_line));
    }

    /// Get column index by name (first match)
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Rows whose width differs from the header width
    pub fn ragged_rows(&self) -> impl Iterator<Item = &Row> {
        let expected = self.column_count();
        self.rows.iter().filter(move |r| r.width() != expected)
    }

    /// Names of the columns whose every cell parses as a number.
    ///
    /// Cells are tried row by row and a column is dropped at its first
    /// failure. A row too short to hold the column counts as a failure.
    /// With no rows every column qualifies.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| {
                self.rows
                    .iter()
                    .all(|row| row.get(*idx).and_then(parse_number).is_some())
            })
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Extract one column as numbers.
    ///
    /// Fails on the first cell that is missing or does not parse; no
    /// partial column is returned.
    pub fn column_values(&self, name: &str) -> Result<NumericColumn> {
        let idx = self.column_index(name).ok_or_else(|| Error::ColumnNotFound {
            name: name.to_string(),
        })?;

        let values = self
            .rows
            .iter()
            .map(|row| {
                let cell = row.get(idx).ok_or_else(|| Error::MissingCell {
                    column: name.to_string(),
                    line: row.source_line,
                })?;
                parse_number(cell).ok_or_else(|| Error::NumericParse {
                    column: name.to_string(),
                    line: row.source_line,
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(NumericColumn::new(name, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        let mut t = Table::new(headers.iter().map(|s| s.to_string()).collect());
        for (i, cells) in rows.iter().enumerate() {
            t.add_row(cells.iter().map(|s| s.to_string()).collect(), i + 2);
        }
        t
    }

    #[test]
    fn test_numeric_columns_excludes_text() {
        let t = table(&["x", "y"], &[&["1", "foo"], &["2", "bar"]]);
        assert_eq!(t.numeric_columns(), vec!["x".to_string()]);
    }

    #[test]
    fn test_empty_table_all_numeric() {
        let t = table(&["a", "b"], &[]);
        assert_eq!(t.numeric_columns(), vec!["a".to_string(), "b".to_string()]);
        assert!(t.column_values("a").unwrap().is_empty());
        assert!(t.column_values("b").unwrap().is_empty());
    }

    #[test]
    fn test_column_values_first_match() {
        let t = table(&["a", "a"], &[&["1", "9"], &["2", "8"]]);
        assert_eq!(t.column_values("a").unwrap().values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_column_not_found() {
        let t = table(&["a"], &[&["1"]]);
        assert!(matches!(
            t.column_values("b"),
            Err(Error::ColumnNotFound { name }) if name == "b"
        ));
    }

    #[test]
    fn test_numeric_parse_error_reports_line() {
        let t = table(&["x", "y"], &[&["1", "2"], &["2", "oops"]]);
        match t.column_values("y") {
            Err(Error::NumericParse {
                column,
                line,
                value,
            }) => {
                assert_eq!(column, "y");
                assert_eq!(line, 3);
                assert_eq!(value, "oops");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_short_row() {
        let t = table(&["a", "b"], &[&["1", "2"], &["3"]]);
        assert_eq!(t.numeric_columns(), vec!["a".to_string()]);
        assert!(matches!(
            t.column_values("b"),
            Err(Error::MissingCell { line: 3, .. })
        ));
        assert_eq!(t.ragged_rows().count(), 1);
    }

    #[test]
    fn test_numeric_columns_round_trip() {
        let t = table(
            &["id", "name", "score", "ratio"],
            &[&["1", "ann", "90", "0.5"], &["2", "bob", "-3", "1e3"]],
        );
        let numeric = t.numeric_columns();
        assert_eq!(numeric, vec!["id", "score", "ratio"]);
        for name in numeric {
            assert!(t.column_values(&name).is_ok());
        }
    }
}
