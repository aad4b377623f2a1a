// mod.rs - Output writers module

use crate::core::{BuildReport, RunOutcome};
use crate::data::{BedRecord, IntervalTable, BED_COLUMNS};
use crate::error::{BedMergeError, Result};
use serde::Serialize;
use std::fs::{self, create_dir_all};
use std::path::{Path, PathBuf};

/// Create a directory and all of its parents; existing directories are fine
pub fn ensure_dir(dir: &Path) -> Result<()> {
    create_dir_all(dir).map_err(|e| BedMergeError::io(dir, e))
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Render table rows as tab-separated bytes, no header and no index column
pub fn render_bed(table: &IntervalTable) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in &table.rows {
        writer
            .write_record(&row.fields)
            .map_err(|e| BedMergeError::from_csv(&table.source, e))?;
    }

    writer
        .into_inner()
        .map_err(|e| BedMergeError::io(&table.source, e.into_error()))
}

/// Write a table as a headerless BED file, overwriting any existing file.
/// Returns the MD5 hex digest of the bytes written.
pub fn write_bed(file_path: &Path, table: &IntervalTable) -> Result<String> {
    let bytes = render_bed(table)?;
    ensure_parent_dir(file_path)?;
    fs::write(file_path, &bytes).map_err(|e| BedMergeError::io(file_path, e))?;

    let digest = format!("{:x}", md5::compute(&bytes));
    println!(
        "✅ BED written to: {} ({} rows, md5 {})",
        file_path.display(),
        table.len(),
        digest
    );
    Ok(digest)
}

/// Default export file name: `maneloca_<version>_<YYYY-MM-DD>.tsv` (UTC date)
pub fn default_export_name(version: &str) -> String {
    format!(
        "maneloca_{}_{}.tsv",
        version,
        chrono::Utc::now().format("%Y-%m-%d")
    )
}

/// Write search hits as a headed TSV; every row carries the `version` column.
/// An existing directory as `file_path` receives a file with the default name.
/// Returns the path written, or `None` when there is nothing to export.
pub fn write_export(
    file_path: &Path,
    records: &[BedRecord],
    version: &str,
) -> Result<Option<PathBuf>> {
    if records.is_empty() {
        println!("⚠️  No records to export");
        return Ok(None);
    }

    let file_path = if file_path.is_dir() {
        file_path.join(default_export_name(version))
    } else {
        file_path.to_path_buf()
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let csv_err = |e| BedMergeError::from_csv(&file_path, e);
    writer
        .write_record(BED_COLUMNS.iter().chain(std::iter::once(&"version")))
        .map_err(csv_err)?;
    for record in records {
        let row = (0..BED_COLUMNS.len())
            .map(|i| record.column(i))
            .chain(std::iter::once(version));
        writer.write_record(row).map_err(csv_err)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| BedMergeError::io(&file_path, e.into_error()))?;

    ensure_parent_dir(&file_path)?;
    fs::write(&file_path, bytes).map_err(|e| BedMergeError::io(&file_path, e))?;
    println!(
        "✅ Export written to: {} ({} rows)",
        file_path.display(),
        records.len()
    );
    Ok(Some(file_path))
}

/// One element of the run summary array
#[derive(Serialize)]
#[serde(untagged)]
enum SummaryEntry<'a> {
    Merged(&'a BuildReport),
    Failed {
        build: &'a str,
        status: &'static str,
        error: String,
    },
}

/// Write per-build results as a pretty-printed JSON array; merged builds
/// first, then one `"status": "failed"` entry per failed build
pub fn write_summary(file_path: &Path, outcome: &RunOutcome) -> Result<()> {
    let entries: Vec<SummaryEntry> = outcome
        .reports
        .iter()
        .map(SummaryEntry::Merged)
        .chain(outcome.failures.iter().map(|(build, error)| SummaryEntry::Failed {
            build,
            status: "failed",
            error: error.to_string(),
        }))
        .collect();

    let json = serde_json::to_string_pretty(&entries)
        .map_err(|e| BedMergeError::Config(format!("Failed to serialize summary: {}", e)))?;
    ensure_parent_dir(file_path)?;
    fs::write(file_path, json).map_err(|e| BedMergeError::io(file_path, e))?;
    println!("📄 Summary written to: {}", file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{IntervalRow, TableSchema};

    fn table(rows: &[&[&str]]) -> IntervalTable {
        let schema = TableSchema::from_header(
            Path::new("t.bed"),
            vec!["#chrom", "start", "location"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
        .unwrap();
        let mut table = IntervalTable::new(PathBuf::from("t.bed"), schema);
        for fields in rows {
            table.rows.push(IntervalRow {
                fields: fields.iter().map(|s| s.to_string()).collect(),
                start: fields[1].parse().unwrap(),
            });
        }
        table
    }

    #[test]
    fn test_render_has_no_header() {
        let t = table(&[&["1", "50", "intronA"], &["1", "100", "exon1"]]);
        let bytes = render_bed(&t).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "1\t50\tintronA\n1\t100\texon1\n"
        );
    }

    #[test]
    fn test_render_empty_table() {
        let t = table(&[]);
        assert!(render_bed(&t).unwrap().is_empty());
    }

    #[test]
    fn test_write_creates_parent_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("public").join("data").join("x.bed");

        let first = write_bed(&out, &table(&[&["1", "1", "exon1"]])).unwrap();
        assert!(out.exists());

        let second = write_bed(&out, &table(&[&["2", "2", "intron1"]])).unwrap();
        assert_ne!(first, second);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "2\t2\tintron1\n");
    }

    #[test]
    fn test_summary_lists_merged_and_failed_builds() {
        use crate::core::MergeReport;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let mut outcome = RunOutcome::default();
        outcome.reports.push(BuildReport {
            build: "GRCh37".to_string(),
            generated: "2024-01-01 00:00:00 UTC".to_string(),
            merge: MergeReport {
                exon_rows: 2,
                intron_rows: 1,
                merged_rows: 3,
                output: PathBuf::from("public/data/GRCh37.bed"),
                md5: "abc".to_string(),
                written: true,
            },
        });
        outcome.failures.push((
            "GRCh38".to_string(),
            BedMergeError::FileNotFound(PathBuf::from("ManeSelectBed/GRCh38/x.bed")),
        ));
        write_summary(&path, &outcome).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["build"], "GRCh37");
        assert_eq!(value[0]["merged_rows"], 3);
        assert_eq!(value[0]["output"], "public/data/GRCh37.bed");
        assert_eq!(value[1]["build"], "GRCh38");
        assert_eq!(value[1]["status"], "failed");
        assert!(value[1]["error"]
            .as_str()
            .unwrap()
            .contains("ManeSelectBed/GRCh38/x.bed"));
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_export_has_header_and_version() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("hits.tsv");
        let records = vec![BedRecord::from_fields(
            "chr7\t55242415\t55242513\texon19\tEGFR\tNM_005228.5\tENST00000275493\t+"
                .split('\t')
                .map(String::from)
                .collect(),
        )];

        let written = write_export(&out, &records, "GRCh38").unwrap();
        assert_eq!(written, Some(out.clone()));
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "chrom\tstart\tend\tlocation\tsymbol\trefseq\tensembl\tstrand\tversion\n\
             chr7\t55242415\t55242513\texon19\tEGFR\tNM_005228.5\tENST00000275493\t+\tGRCh38\n"
        );
    }

    #[test]
    fn test_export_into_directory_and_empty() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![BedRecord::from_fields(vec!["chr1".to_string(), "5".to_string()])];

        let written = write_export(dir.path(), &records, "GRCh37").unwrap().unwrap();
        let name = written.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("maneloca_GRCh37_"));
        assert!(name.ends_with(".tsv"));
        assert_eq!(
            std::fs::read_to_string(&written).unwrap().lines().nth(1),
            Some("chr1\t5\t\t\t\t\t\t\tGRCh37")
        );

        let none = write_export(&dir.path().join("empty.tsv"), &[], "GRCh37").unwrap();
        assert!(none.is_none());
        assert!(!dir.path().join("empty.tsv").exists());
    }
}
