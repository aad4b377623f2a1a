// table.rs - Interval table data structures

use crate::error::{BedMergeError, Result};
use std::path::{Path, PathBuf};

/// Header name of the chromosome column
pub const CHROM_COLUMN: &str = "#chrom";
/// Header name of the start coordinate column
pub const START_COLUMN: &str = "start";
/// Header name of the location label column
pub const LOCATION_COLUMN: &str = "location";

/// Source category of an interval table, used to prefix `location` labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCategory {
    Exon,
    Intron,
}

impl SourceCategory {
    pub fn prefix(&self) -> &'static str {
        match self {
            SourceCategory::Exon => "exon",
            SourceCategory::Intron => "intron",
        }
    }
}

/// Column names of a table plus the resolved positions of the required columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub columns: Vec<String>,
    pub chrom_idx: usize,
    pub start_idx: usize,
    pub location_idx: usize,
}

impl TableSchema {
    /// Resolve required columns from a header row read from `path`
    pub fn from_header(path: &Path, columns: Vec<String>) -> Result<Self> {
        let find = |name: &str| {
            columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| BedMergeError::Schema {
                    path: path.to_path_buf(),
                    column: name.to_string(),
                })
        };

        let chrom_idx = find(CHROM_COLUMN)?;
        let start_idx = find(START_COLUMN)?;
        let location_idx = find(LOCATION_COLUMN)?;

        Ok(Self {
            columns,
            chrom_idx,
            start_idx,
            location_idx,
        })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A single row: all fields as text, with `start` parsed for sorting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalRow {
    pub fields: Vec<String>,
    pub start: i64,
}

/// Ordered rows sharing one schema
#[derive(Debug, Clone)]
pub struct IntervalTable {
    pub source: PathBuf,
    pub schema: TableSchema,
    pub rows: Vec<IntervalRow>,
}

impl IntervalTable {
    pub fn new(source: PathBuf, schema: TableSchema) -> Self {
        Self {
            source,
            schema,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn chrom<'a>(&self, row: &'a IntervalRow) -> &'a str {
        &row.fields[self.schema.chrom_idx]
    }

    pub fn location<'a>(&self, row: &'a IntervalRow) -> &'a str {
        &row.fields[self.schema.location_idx]
    }

    /// Prefix every `location` value with the category label
    pub fn tag_locations(&mut self, category: SourceCategory) {
        let idx = self.schema.location_idx;
        let prefix = category.prefix();
        for row in &mut self.rows {
            let original = std::mem::take(&mut row.fields[idx]);
            row.fields[idx] = format!("{}{}", prefix, original);
        }
    }

    /// Append all rows of `other`; schemas must match exactly
    pub fn append(&mut self, other: IntervalTable) -> Result<()> {
        if self.schema.columns != other.schema.columns {
            return Err(BedMergeError::SchemaMismatch {
                exon: self.schema.columns.clone(),
                intron: other.schema.columns,
            });
        }
        self.rows.extend(other.rows);
        Ok(())
    }

    /// Stable sort by chromosome (plain text order), then numeric start.
    /// "10" sorts before "2".
    pub fn sort_by_position(&mut self) {
        let chrom_idx = self.schema.chrom_idx;
        self.rows.sort_by(|a, b| {
            a.fields[chrom_idx]
                .as_bytes()
                .cmp(b.fields[chrom_idx].as_bytes())
                .then_with(|| a.start.cmp(&b.start))
        });
    }
}
