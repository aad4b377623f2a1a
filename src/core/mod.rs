// mod.rs - Core merge logic module

pub mod build;
pub mod merge;
pub mod search;

// Re-export main types for convenience
pub use build::{default_jobs, run_builds, BuildJob, BuildReport, DriverOptions, RunOutcome};
pub use merge::{merge_bed, merge_bed_with, merge_tables, MergeReport};
pub use search::{search_bed, ColumnFilter, SearchQuery};
