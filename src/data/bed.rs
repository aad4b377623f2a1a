// bed.rs - Records of a merged BED file

use crate::data::loaders::tsv::{open_input, tsv_reader_builder};
use crate::error::{BedMergeError, Result};
use serde::Serialize;
use std::path::Path;

/// Column names of a merged file, in file order
pub const BED_COLUMNS: [&str; 8] = [
    "chrom", "start", "end", "location", "symbol", "refseq", "ensembl", "strand",
];

/// One line of a merged file, laid out as
/// `chrom start end location symbol refseq ensembl strand`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BedRecord {
    pub chrom: String,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub location: String,
    pub symbol: String,
    pub refseq: String,
    pub ensembl: String,
    pub strand: String,
    #[serde(skip)]
    pub fields: Vec<String>,
}

impl BedRecord {
    pub fn from_fields(fields: Vec<String>) -> Self {
        let text = |i: usize| fields.get(i).cloned().unwrap_or_default();
        let number = |i: usize| fields.get(i).and_then(|s| s.trim().parse::<i64>().ok());

        Self {
            chrom: text(0),
            start: number(1),
            end: number(2),
            location: text(3),
            symbol: text(4),
            refseq: text(5),
            ensembl: text(6),
            strand: text(7),
            fields,
        }
    }

    /// Text of column `idx` (see `BED_COLUMNS`); empty when the row is short
    pub fn column(&self, idx: usize) -> &str {
        self.fields.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Whether `pos` falls inside `[start, end]`
    pub fn contains(&self, pos: i64) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= pos && pos <= end,
            _ => false,
        }
    }

    /// Load every record of a headerless merged file
    pub fn read_all(file_path: &Path) -> Result<Vec<Self>> {
        let file = open_input(file_path)?;
        let mut reader = tsv_reader_builder(false).from_reader(file);

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| BedMergeError::from_csv(file_path, e))?;
            records.push(Self::from_fields(
                record.iter().map(|s| s.to_string()).collect(),
            ));
        }
        Ok(records)
    }
}
