//! Parser layer for reading delimited text into a [`Table`]

mod csv;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Table;

pub use self::csv::CsvParser;

/// Options applied while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject rows whose cell count differs from the header's
    pub strict: bool,
}

/// Trait for parsing tabular text
pub trait Parser {
    /// Parse everything the reader yields into a Table
    fn parse_reader(&self, reader: &mut dyn Read, options: &LoadOptions) -> Result<Table>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Load a table from any reader
pub fn load_reader<R: Read>(mut reader: R, options: &LoadOptions) -> Result<Table> {
    CsvParser.parse_reader(&mut reader, options)
}

/// Load a table from in-memory text
pub fn load_str(text: &str, options: &LoadOptions) -> Result<Table> {
    load_reader(text.as_bytes(), options)
}

/// Load a table from a `.csv` file.
///
/// The file handle lives only for the duration of this call.
pub fn load_path(path: &Path, options: &LoadOptions) -> Result<Table> {
    let parser = CsvParser;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !parser.supports_extension(ext) {
        return Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    log::debug!("loading {}", path.display());
    let file = File::open(path)?;
    parser.parse_reader(&mut BufReader::new(file), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "x,y\n1,foo\n2,bar").unwrap();
        drop(file);

        let table = load_path(&path, &LoadOptions::default()).unwrap();
        assert_eq!(table.numeric_columns(), vec!["x"]);
        assert_eq!(table.column_values("x").unwrap().values(), &[1.0, 2.0]);
        assert!(matches!(
            table.column_values("y"),
            Err(Error::NumericParse { .. })
        ));
    }

    #[test]
    fn test_load_path_rejects_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        File::create(&path).unwrap();

        assert!(matches!(
            load_path(&path, &LoadOptions::default()),
            Err(Error::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_load_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        assert!(matches!(
            load_path(&path, &LoadOptions::default()),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_load_and_sort_column() {
        let table = load_str("a,b\n3,1\n1,2\n2,0", &LoadOptions::default()).unwrap();
        assert_eq!(table.numeric_columns(), vec!["a", "b"]);

        let column = table.column_values("a").unwrap();
        assert_eq!(column.values(), &[3.0, 1.0, 2.0]);
        for algorithm in crate::sort::Algorithm::ALL {
            assert_eq!(algorithm.sorted(column.values()), vec![1.0, 2.0, 3.0]);
        }
    }

    #[test]
    fn test_load_str_empty() {
        assert!(matches!(
            load_str("", &LoadOptions::default()),
            Err(Error::EmptyInput)
        ));
    }
}
