// lib.rs - bedmerge library root

//! # bedmerge - Merge exon and intron interval tables into sorted BED files
//!
//! For each genome reference build (GRCh37, GRCh38) two tab-separated tables,
//! one of exon and one of intron coordinates, are loaded, their `location`
//! labels prefixed with `exon` / `intron`, concatenated and stable-sorted by
//! `#chrom` (plain text order) then `start` (numeric). The result is written
//! without header or index column.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use bedmerge::prelude::*;
//! use std::path::Path;
//!
//! // Single merge
//! let report = merge_bed(
//!     Path::new("ManeSelectBed/GRCh38/Gencode.GRCh38.exon.cor.bed"),
//!     Path::new("ManeSelectBed/GRCh38/Gencode.GRCh38.intron.bed"),
//!     Path::new("public/data/GRCh38.bed"),
//! )?;
//! assert_eq!(report.merged_rows, report.exon_rows + report.intron_rows);
//!
//! // Both default builds, relative to the current directory
//! let outcome = run_builds(&default_jobs(), Path::new("."), DriverOptions::default())?;
//! assert!(outcome.is_success());
//! # Ok::<(), bedmerge::BedMergeError>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, RunMode, ValidationResult};
    pub use crate::core::{default_jobs, merge_bed, merge_tables, run_builds, search_bed};
    pub use crate::core::{BuildJob, BuildReport, ColumnFilter, DriverOptions, MergeReport, RunOutcome, SearchQuery};
    pub use crate::data::{BedRecord, IntervalRow, IntervalTable, SourceCategory, TableSchema};
    pub use crate::error::{BedMergeError, Result};
    pub use crate::output::{write_bed, write_export, write_summary};
}

// Re-export main types at the root level for convenience
pub use crate::core::{merge_bed, BuildJob, DriverOptions, MergeReport};
pub use crate::data::{IntervalRow, IntervalTable};
pub use crate::error::{BedMergeError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "bedmerge v{} - Exon/intron BED merger for GRCh37 and GRCh38",
        VERSION
    )
}
