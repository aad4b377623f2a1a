// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::cli::config::Config;
use crate::core::{default_jobs, BuildJob, DriverOptions, SearchQuery};
use crate::error::{BedMergeError, Result};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// What the binary should do after validation
#[derive(Debug)]
pub enum RunMode {
    Merge(Vec<BuildJob>),
    Search {
        bed: PathBuf,
        query: SearchQuery,
        export: Option<PathBuf>,
    },
}

#[derive(Debug)]
pub struct ValidationResult {
    pub mode: RunMode,
    pub base_dir: PathBuf,
    pub options: DriverOptions,
    pub summary: Option<PathBuf>,
}

fn invalid(message: impl Into<String>) -> BedMergeError {
    BedMergeError::Config(message.into())
}

/// Validate all command line arguments
pub fn validate_args(args: &Args, config: Option<&Config>) -> Result<ValidationResult> {
    let base_dir = PathBuf::from(args.base_dir.as_deref().unwrap_or("."));
    if !base_dir.is_dir() {
        return Err(invalid(format!(
            "Base directory '{}' does not exist",
            base_dir.display()
        )));
    }

    if args.threads == Some(0) {
        return Err(invalid("--threads must be at least 1"));
    }

    let explicit = [&args.exon, &args.intron, &args.output];
    let explicit_count = explicit.iter().filter(|o| o.is_some()).count();

    // Search mode
    if let Some(bed) = &args.search {
        if explicit_count > 0 || !args.build.is_empty() {
            return Err(invalid(
                "--search cannot be combined with --exon/--intron/--output or --build",
            ));
        }
        let query = SearchQuery::new(args.at.as_deref(), args.term.as_deref())?
            .with_filters(&args.filter, &args.exact_filter)?;
        return Ok(ValidationResult {
            mode: RunMode::Search {
                bed: base_dir.join(bed),
                query,
                export: args.export.as_ref().map(|e| base_dir.join(e)),
            },
            base_dir,
            options: DriverOptions::default(),
            summary: None,
        });
    }

    if args.at.is_some()
        || args.term.is_some()
        || args.export.is_some()
        || !args.filter.is_empty()
        || !args.exact_filter.is_empty()
    {
        return Err(invalid(
            "--at, --term, --filter, --exact-filter and --export require --search",
        ));
    }

    let jobs = match (&args.exon, &args.intron, &args.output) {
        (Some(exon), Some(intron), Some(output)) => {
            if !args.build.is_empty() {
                return Err(invalid(
                    "--build cannot be combined with an explicit --exon/--intron/--output merge",
                ));
            }
            vec![BuildJob {
                name: "custom".to_string(),
                exon: PathBuf::from(exon),
                intron: PathBuf::from(intron),
                output: PathBuf::from(output),
            }]
        }
        _ if explicit_count > 0 => {
            return Err(invalid(
                "--exon, --intron and --output must be given together",
            ));
        }
        _ => select_builds(args, config, &base_dir)?,
    };

    Ok(ValidationResult {
        mode: RunMode::Merge(jobs),
        base_dir,
        options: DriverOptions {
            parallel: args.parallel,
            keep_going: args.keep_going,
            dry_run: args.dry_run,
        },
        summary: args.summary.as_ref().map(PathBuf::from),
    })
}

/// Lexically normalize a path: drop `.` and fold `..` into its parent
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Configured builds (or the defaults), narrowed by any `--build` names
fn select_builds(args: &Args, config: Option<&Config>, base_dir: &Path) -> Result<Vec<BuildJob>> {
    let available = match config {
        Some(c) if !c.builds.is_empty() => c.builds.clone(),
        _ => default_jobs(),
    };

    let mut names = HashSet::new();
    let mut outputs = HashSet::new();
    for job in &available {
        if !names.insert(job.name.as_str()) {
            return Err(invalid(format!("Build '{}' is configured twice", job.name)));
        }
        if !outputs.insert(normalize_path(&base_dir.join(&job.output))) {
            return Err(invalid(format!(
                "Output '{}' is used by more than one build",
                job.output.display()
            )));
        }
    }

    if args.build.is_empty() {
        return Ok(available);
    }

    let mut selected = Vec::new();
    for name in &args.build {
        let job = available.iter().find(|j| &j.name == name).ok_or_else(|| {
            let known: Vec<&str> = available.iter().map(|j| j.name.as_str()).collect();
            invalid(format!(
                "Unknown build '{}'. Available: {}",
                name,
                known.join(", ")
            ))
        })?;
        if !selected.contains(job) {
            selected.push(job.clone());
        }
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args::default()
    }

    #[test]
    fn test_defaults_are_both_builds() {
        let result = validate_args(&args(), None).unwrap();
        match result.mode {
            RunMode::Merge(jobs) => {
                let names: Vec<&str> = jobs.iter().map(|j| j.name.as_str()).collect();
                assert_eq!(names, vec!["GRCh37", "GRCh38"]);
            }
            _ => panic!("Expected merge mode"),
        }
        assert_eq!(result.base_dir, PathBuf::from("."));
        assert!(!result.options.parallel);
    }

    #[test]
    fn test_build_filter() {
        let mut a = args();
        a.build = vec!["GRCh38".to_string(), "GRCh38".to_string()];
        match validate_args(&a, None).unwrap().mode {
            RunMode::Merge(jobs) => {
                assert_eq!(jobs.len(), 1);
                assert_eq!(jobs[0].name, "GRCh38");
            }
            _ => panic!("Expected merge mode"),
        }

        a.build = vec!["hg19".to_string()];
        let err = validate_args(&a, None).unwrap_err();
        assert!(err.to_string().contains("GRCh37, GRCh38"));
    }

    #[test]
    fn test_explicit_triple() {
        let mut a = args();
        a.exon = Some("e.bed".to_string());
        a.intron = Some("i.bed".to_string());
        assert!(validate_args(&a, None).is_err());

        a.output = Some("o.bed".to_string());
        match validate_args(&a, None).unwrap().mode {
            RunMode::Merge(jobs) => assert_eq!(jobs[0].output, PathBuf::from("o.bed")),
            _ => panic!("Expected merge mode"),
        }

        a.build = vec!["GRCh37".to_string()];
        assert!(validate_args(&a, None).is_err());
    }

    #[test]
    fn test_config_builds_replace_defaults() {
        let config = Config::from_toml_str(
            "[[builds]]\nname = \"T2T\"\nexon = \"e.bed\"\nintron = \"i.bed\"\noutput = \"out/T2T.bed\"\n",
        )
        .unwrap();
        match validate_args(&args(), Some(&config)).unwrap().mode {
            RunMode::Merge(jobs) => {
                assert_eq!(jobs.len(), 1);
                assert_eq!(jobs[0].name, "T2T");
            }
            _ => panic!("Expected merge mode"),
        }
    }

    #[test]
    fn test_duplicate_outputs_rejected() {
        let config = Config::from_toml_str(
            "[[builds]]\nname = \"a\"\nexon = \"e\"\nintron = \"i\"\noutput = \"o.bed\"\n\
             [[builds]]\nname = \"b\"\nexon = \"e2\"\nintron = \"i2\"\noutput = \"o.bed\"\n",
        )
        .unwrap();
        assert!(validate_args(&args(), Some(&config)).is_err());
    }

    #[test]
    fn test_equivalent_output_paths_rejected() {
        let config = Config::from_toml_str(
            "[[builds]]\nname = \"a\"\nexon = \"e\"\nintron = \"i\"\noutput = \"o.bed\"\n\
             [[builds]]\nname = \"b\"\nexon = \"e2\"\nintron = \"i2\"\noutput = \"./sub/../o.bed\"\n",
        )
        .unwrap();
        let err = validate_args(&args(), Some(&config)).unwrap_err();
        assert!(err.to_string().contains("more than one build"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("./o.bed")), PathBuf::from("o.bed"));
        assert_eq!(normalize_path(Path::new("a/./b/../c.bed")), PathBuf::from("a/c.bed"));
        assert_eq!(normalize_path(Path::new("../x.bed")), PathBuf::from("../x.bed"));
        assert_eq!(normalize_path(Path::new("/base/./o.bed")), PathBuf::from("/base/o.bed"));
    }

    #[test]
    fn test_search_mode() {
        let mut a = args();
        a.search = Some("public/data/GRCh38.bed".to_string());
        a.at = Some("chr7:55242465".to_string());
        match validate_args(&a, None).unwrap().mode {
            RunMode::Search { bed, query, export } => {
                assert_eq!(bed, PathBuf::from("./public/data/GRCh38.bed"));
                assert_eq!(query.coordinate, Some(("chr7".to_string(), 55242465)));
                assert!(query.filters.is_empty());
                assert!(export.is_none());
            }
            _ => panic!("Expected search mode"),
        }

        a.at = Some("chr7-55242465".to_string());
        assert!(matches!(
            validate_args(&a, None),
            Err(BedMergeError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_search_filters_and_export() {
        let mut a = args();
        a.search = Some("GRCh38.bed".to_string());
        a.filter = vec!["symbol=egfr".to_string()];
        a.exact_filter = vec!["strand=+".to_string(), "refseq=".to_string()];
        a.export = Some("hits.tsv".to_string());
        match validate_args(&a, None).unwrap().mode {
            RunMode::Search { query, export, .. } => {
                assert_eq!(query.filters.len(), 2);
                assert!(!query.filters[0].exact);
                assert!(query.filters[1].exact);
                assert_eq!(export, Some(PathBuf::from("./hits.tsv")));
            }
            _ => panic!("Expected search mode"),
        }

        a.filter = vec!["gene=EGFR".to_string()];
        assert!(matches!(
            validate_args(&a, None),
            Err(BedMergeError::InvalidQuery(_))
        ));

        a.at = Some("chr1:0".to_string());
        a.filter.clear();
        assert!(validate_args(&a, None).is_err());
    }

    #[test]
    fn test_term_without_search() {
        let mut a = args();
        a.term = Some("EGFR".to_string());
        assert!(validate_args(&a, None).is_err());

        let mut a = args();
        a.filter = vec!["symbol=EGFR".to_string()];
        assert!(validate_args(&a, None).is_err());

        let mut a = args();
        a.export = Some("hits.tsv".to_string());
        assert!(validate_args(&a, None).is_err());
    }

    #[test]
    fn test_zero_threads_and_missing_base_dir() {
        let mut a = args();
        a.threads = Some(0);
        assert!(validate_args(&a, None).is_err());

        let mut a = args();
        a.base_dir = Some("/definitely/not/here".to_string());
        assert!(validate_args(&a, None).is_err());
    }
}
