//! In-memory string table backing the classification pipelines
//!
//! Every cell is a string: IUPHAR identifiers are zero-padded and parsing
//! them as numbers would drop the padding and break lookups. Missing values
//! are normalised to the empty string at read time.
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::{GtopError, Result};

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    index: IndexMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Result<Self> {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let mut index = IndexMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(GtopError::Parse(format!("duplicate column: {}", name)));
            }
        }
        Ok(Self {
            headers,
            index,
            rows: Vec::new(),
        })
    }

    /// Read a delimited file with a header row; all fields become strings.
    pub fn from_csv_path<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self> {
        debug!("reading table from {}", path.as_ref().display());
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_path(path.as_ref())?;

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        let mut table = Table::new(headers)?;
        let width = table.headers.len();

        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(|f| f.to_string()).collect();
            // Short rows are padded so every column reads as empty, not absent
            row.resize(width, String::new());
            row.truncate(width);
            table.rows.push(row);
        }

        debug!("read {} rows, {} columns", table.rows.len(), width);
        Ok(table)
    }

    pub fn write_csv_path<P: AsRef<Path>>(&self, path: P, delimiter: u8) -> Result<()> {
        debug!("writing table to {}", path.as_ref().display());
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_path(path.as_ref())?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Validate required columns, reporting every missing name in one error.
    pub fn validate_columns(&self, required: &[&str]) -> Result<()> {
        let missing: Vec<&str> = required
            .iter()
            .filter(|c| !self.has_column(c))
            .copied()
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(GtopError::missing_columns(missing))
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value by row index and column name; absent columns read as "".
    pub fn value(&self, row: usize, column: &str) -> &str {
        self.column_index(column)
            .and_then(|c| self.rows.get(row).map(|r| r[c].as_str()))
            .unwrap_or("")
    }

    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Write a column, overwriting in place when it already exists;
    /// `values` must cover every existing row.
    pub fn set_column<S: Into<String>>(&mut self, name: S, values: Vec<String>) -> Result<()> {
        let name = name.into();
        if values.len() != self.rows.len() {
            return Err(GtopError::Parse(format!(
                "column {} has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }
        if let Some(i) = self.column_index(&name) {
            for (row, value) in self.rows.iter_mut().zip(values) {
                row[i] = value;
            }
            return Ok(());
        }
        self.index.insert(name.clone(), self.headers.len());
        self.headers.push(name);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    /// Rename a column if present; used to normalise legacy headers.
    pub fn rename_column(&mut self, from: &str, to: &str) {
        if let Some(pos) = self.index.shift_remove(from) {
            self.headers[pos] = to.to_string();
            self.index.insert(to.to_string(), pos);
        }
    }

    /// Lowercase the cells of each named column that exists.
    pub fn lowercase_columns(&mut self, columns: &[&str]) {
        let indices: Vec<usize> = columns
            .iter()
            .filter_map(|c| self.column_index(c))
            .collect();
        for row in &mut self.rows {
            for &i in &indices {
                row[i] = row[i].to_lowercase();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut t = Table::new(vec!["a", "b"]).unwrap();
        t.push_row(vec!["1".into(), "X".into()]);
        t.push_row(vec!["2".into()]);
        t
    }

    #[test]
    fn test_short_rows_read_empty() {
        let t = sample();
        assert_eq!(t.value(1, "b"), "");
        assert_eq!(t.value(1, "missing"), "");
    }

    #[test]
    fn test_validate_columns_reports_all_missing() {
        let t = sample();
        let err = t.validate_columns(&["a", "c", "d"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required columns: c, d"
        );
    }

    #[test]
    fn test_set_and_rename_column() {
        let mut t = sample();
        t.set_column("c", vec!["y".into(), "z".into()]).unwrap();
        assert_eq!(t.value(1, "c"), "z");
        t.rename_column("c", "d");
        assert_eq!(t.value(0, "d"), "y");
        assert!(!t.has_column("c"));
    }

    #[test]
    fn test_set_column_overwrites_in_place() {
        let mut t = sample();
        t.set_column("b", vec!["p".into(), "q".into()]).unwrap();
        assert_eq!(t.value(0, "b"), "p");
        assert_eq!(t.value(1, "b"), "q");
        assert_eq!(t.headers(), &["a".to_string(), "b".to_string()]);
        // a value vector of the wrong length is refused
        assert!(t.set_column("c", vec!["lonely".into()]).is_err());
    }

    #[test]
    fn test_lowercase_columns() {
        let mut t = sample();
        t.lowercase_columns(&["b", "nope"]);
        assert_eq!(t.value(0, "b"), "x");
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        let t = sample();
        t.write_csv_path(&path, b',').unwrap();
        let back = Table::from_csv_path(&path, b',').unwrap();
        assert_eq!(back.headers(), t.headers());
        assert_eq!(back.len(), 2);
        assert_eq!(back.value(0, "b"), "X");
    }
}
