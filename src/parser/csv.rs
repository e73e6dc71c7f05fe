//! Comma-separated text parser

use std::io::Read;

use crate::error::{Error, Result};
use crate::model::Table;

use super::{LoadOptions, Parser};

/// Parser for plain comma-separated files.
///
/// Every line is split on `,` with no quoting or escaping, so a `"` is an
/// ordinary character. A blank line is kept as a row with one empty cell,
/// and empty cells at the end of a line are dropped, so `1,2,` gives two
/// cells. Lines end with `\n` or `\r\n`.
pub struct CsvParser;

impl CsvParser {
    fn line_reader() -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder.has_headers(false).flexible(true).quoting(false);
        builder
    }

    /// Split one line into cells
    fn split_line(builder: &csv::ReaderBuilder, line: &str) -> Result<Vec<String>> {
        let mut record = csv::StringRecord::new();
        if !builder.from_reader(line.as_bytes()).read_record(&mut record)? {
            // A blank line has no record but still counts as one empty cell
            return Ok(vec![String::new()]);
        }

        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        while cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        Ok(cells)
    }
}

impl Parser for CsvParser {
    fn parse_reader(&self, reader: &mut dyn Read, options: &LoadOptions) -> Result<Table> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let builder = Self::line_reader();
        let mut lines = text.lines();

        // Header line
        let headers = match lines.next() {
            Some(line) => Self::split_line(&builder, line)?,
            None => return Err(Error::EmptyInput),
        };
        let mut table = Table::new(headers);
        let expected = table.column_count();

        // Data rows
        for (idx, line) in lines.enumerate() {
            let cells = Self::split_line(&builder, line)?;
            let line = idx + 2; // +2 for 1-indexing and header

            if options.strict && cells.len() != expected {
                return Err(Error::RaggedRow {
                    line,
                    expected,
                    found: cells.len(),
                });
            }

            table.add_row(cells, line);
        }

        let ragged = table.ragged_rows().count();
        if ragged > 0 {
            log::warn!(
                "{} row(s) do not match the {} header column(s)",
                ragged,
                expected
            );
        }
        log::debug!(
            "parsed {} column(s), {} row(s)",
            table.column_count(),
            table.row_count()
        );

        Ok(table)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext.eq_ignore_ascii_case("csv")
    }
}
