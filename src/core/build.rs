// build.rs - Per-genome-build merge driver

use crate::core::merge::{merge_bed_with, MergeReport};
use crate::error::{BedMergeError, Result};
use crate::output::ensure_dir;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Genome builds processed when no builds are configured
pub const DEFAULT_BUILDS: [&str; 2] = ["GRCh37", "GRCh38"];

/// Input directory of the default layout, relative to the base directory
pub const INPUT_ROOT: &str = "ManeSelectBed";

/// Output directory of the default layout, relative to the base directory
pub const OUTPUT_DIR: &str = "public/data";

/// Input and output paths for one genome build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildJob {
    pub name: String,
    pub exon: PathBuf,
    pub intron: PathBuf,
    pub output: PathBuf,
}

impl BuildJob {
    /// Default relative layout:
    /// `ManeSelectBed/<b>/Gencode.<b>.exon.cor.bed`,
    /// `ManeSelectBed/<b>/Gencode.<b>.intron.bed` -> `public/data/<b>.bed`
    pub fn default_layout(name: &str) -> Self {
        let input_dir = Path::new(INPUT_ROOT).join(name);
        Self {
            name: name.to_string(),
            exon: input_dir.join(format!("Gencode.{}.exon.cor.bed", name)),
            intron: input_dir.join(format!("Gencode.{}.intron.bed", name)),
            output: Path::new(OUTPUT_DIR).join(format!("{}.bed", name)),
        }
    }

    /// Resolve relative paths against `base_dir`; absolute paths are kept
    pub fn resolve(&self, base_dir: &Path) -> Self {
        Self {
            name: self.name.clone(),
            exon: base_dir.join(&self.exon),
            intron: base_dir.join(&self.intron),
            output: base_dir.join(&self.output),
        }
    }
}

/// The default GRCh37 and GRCh38 jobs
pub fn default_jobs() -> Vec<BuildJob> {
    DEFAULT_BUILDS
        .iter()
        .map(|name| BuildJob::default_layout(name))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DriverOptions {
    pub parallel: bool,
    pub keep_going: bool,
    pub dry_run: bool,
}

/// Merge report stamped with its build name
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub build: String,
    pub generated: String,
    #[serde(flatten)]
    pub merge: MergeReport,
}

/// Result of a driver run; `failures` is only non-empty with `keep_going`
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub reports: Vec<BuildReport>,
    pub failures: Vec<(String, BedMergeError)>,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record_failure(&mut self, build: &str, error: BedMergeError) {
        eprintln!("❌ {} failed: {}", build, error);
        self.failures.push((build.to_string(), error));
    }
}

fn run_job(job: &BuildJob, dry_run: bool) -> Result<BuildReport> {
    println!("🧬 Merging {}", job.name);
    let merge = merge_bed_with(&job.exon, &job.intron, &job.output, dry_run)?;
    Ok(BuildReport {
        build: job.name.clone(),
        generated: chrono::Utc::now()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        merge,
    })
}

fn progress_bar(len: usize) -> ProgressBar {
    if len < 2 {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}

/// Run every job against `base_dir`.
///
/// Output directories are created before any merge starts. Without
/// `keep_going` the first failure (in job order) is returned as the error.
pub fn run_builds(jobs: &[BuildJob], base_dir: &Path, options: DriverOptions) -> Result<RunOutcome> {
    let resolved: Vec<BuildJob> = jobs.iter().map(|job| job.resolve(base_dir)).collect();

    if !options.dry_run {
        for job in &resolved {
            if let Some(parent) = job.output.parent() {
                ensure_dir(parent)?;
            }
        }
    }

    let start = Instant::now();
    let pb = progress_bar(resolved.len());
    let mut outcome = RunOutcome::default();

    if options.parallel {
        let results: Vec<Result<BuildReport>> = resolved
            .par_iter()
            .map(|job| {
                let result = run_job(job, options.dry_run);
                pb.inc(1);
                result
            })
            .collect();

        for (job, result) in resolved.iter().zip(results) {
            match result {
                Ok(report) => outcome.reports.push(report),
                Err(e) if options.keep_going => outcome.record_failure(&job.name, e),
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            }
        }
    } else {
        for job in &resolved {
            pb.set_message(job.name.clone());
            match run_job(job, options.dry_run) {
                Ok(report) => outcome.reports.push(report),
                Err(e) if options.keep_going => outcome.record_failure(&job.name, e),
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            }
            pb.inc(1);
        }
    }

    pb.finish_and_clear();
    println!(
        "✅ {} of {} builds merged in {:.2}s",
        outcome.reports.len(),
        resolved.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(outcome)
}
