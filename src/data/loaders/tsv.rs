// tsv.rs - TSV file loader for interval tables

use crate::data::table::{IntervalRow, IntervalTable, TableSchema};
use crate::error::{BedMergeError, Result};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Open an input file, reporting a missing path as `FileNotFound`
pub(crate) fn open_input(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => BedMergeError::FileNotFound(file_path.to_path_buf()),
        _ => BedMergeError::io(file_path, e),
    })
}

/// Tab-delimited reader settings shared by the loaders
pub(crate) fn tsv_reader_builder(has_headers: bool) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(has_headers)
        .flexible(!has_headers);
    builder
}

impl IntervalTable {
    /// Load a tab-separated table whose first line is the header
    pub fn from_tsv(file_path: &Path) -> Result<Self> {
        let file = open_input(file_path)?;
        let mut reader = tsv_reader_builder(true).from_reader(file);

        let header: Vec<String> = reader
            .headers()
            .map_err(|e| BedMergeError::from_csv(file_path, e))?
            .iter()
            .map(|s| s.to_string())
            .collect();
        let schema = TableSchema::from_header(file_path, header)?;
        let start_idx = schema.start_idx;

        let mut table = IntervalTable::new(file_path.to_path_buf(), schema);

        for record in reader.records() {
            let record = record.map_err(|e| BedMergeError::from_csv(file_path, e))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let start_str = record.get(start_idx).unwrap_or("").trim();
            let start = start_str.parse::<i64>().map_err(|_| BedMergeError::Parse {
                path: file_path.to_path_buf(),
                line,
                message: format!("Failed to parse start '{}' as an integer", start_str),
            })?;

            table.rows.push(IntervalRow {
                fields: record.iter().map(|s| s.to_string()).collect(),
                start,
            });
        }

        println!(
            "📊 Table loaded: {} rows, {} columns ({})",
            table.len(),
            table.schema.len(),
            file_path.display()
        );
        Ok(table)
    }
}
