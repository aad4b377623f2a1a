// merge.rs - Exon/intron table merge

use crate::data::{IntervalTable, SourceCategory};
use crate::error::Result;
use crate::output::{render_bed, write_bed};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of one merge
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub exon_rows: usize,
    pub intron_rows: usize,
    pub merged_rows: usize,
    pub output: PathBuf,
    /// MD5 hex digest of the output bytes
    pub md5: String,
    /// False when the merge was validated but not written (dry run)
    pub written: bool,
}

/// Tag both tables, concatenate exon rows before intron rows, then stable sort
pub fn merge_tables(mut exon: IntervalTable, mut intron: IntervalTable) -> Result<IntervalTable> {
    exon.tag_locations(SourceCategory::Exon);
    intron.tag_locations(SourceCategory::Intron);

    exon.append(intron)?;
    exon.sort_by_position();
    Ok(exon)
}

/// Merge an exon and an intron table into a sorted, headerless BED file
pub fn merge_bed(exon_path: &Path, intron_path: &Path, output_path: &Path) -> Result<MergeReport> {
    merge_bed_with(exon_path, intron_path, output_path, false)
}

/// Same as [`merge_bed`]; with `dry_run` the inputs are loaded and merged but
/// nothing is written.
pub fn merge_bed_with(
    exon_path: &Path,
    intron_path: &Path,
    output_path: &Path,
    dry_run: bool,
) -> Result<MergeReport> {
    // Both inputs are loaded and checked before the output is touched
    let exon = IntervalTable::from_tsv(exon_path)?;
    let intron = IntervalTable::from_tsv(intron_path)?;
    let (exon_rows, intron_rows) = (exon.len(), intron.len());

    let mut merged = merge_tables(exon, intron)?;
    merged.source = output_path.to_path_buf();

    let md5 = if dry_run {
        format!("{:x}", md5::compute(render_bed(&merged)?))
    } else {
        write_bed(output_path, &merged)?
    };

    Ok(MergeReport {
        exon_rows,
        intron_rows,
        merged_rows: merged.len(),
        output: output_path.to_path_buf(),
        md5,
        written: !dry_run,
    })
}
