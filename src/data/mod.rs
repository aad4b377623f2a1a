// mod.rs - Data structures module

pub mod bed;
pub mod loaders;
pub mod table;

// Re-export main types for convenience
pub use bed::{BedRecord, BED_COLUMNS};
pub use table::{IntervalRow, IntervalTable, SourceCategory, TableSchema};
