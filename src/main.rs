// main.rs - CLI entry point

use bedmerge::cli::Config;
use bedmerge::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<()> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    let mut config = None;
    if let Some(config_path) = args.config.clone() {
        let (merged, loaded) = args.with_config_file(&config_path)?;
        args = merged;
        config = Some(loaded);
    }

    let validation = validate_args(&args, config.as_ref())?;

    match validation.mode {
        RunMode::Search { bed, query, export } => {
            let hits = search_bed(&bed, &query)?;
            match export {
                Some(path) => {
                    let version = bed
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    write_export(&path, &hits, &version)?;
                }
                None => {
                    for record in &hits {
                        println!("{}", record.fields.join("\t"));
                    }
                }
            }
            Ok(())
        }
        RunMode::Merge(jobs) => {
            println!("🚀 {}", bedmerge::get_info());

            if validation.options.parallel {
                if let Some(n) = args.threads {
                    rayon::ThreadPoolBuilder::new()
                        .num_threads(n)
                        .build_global()
                        .map_err(|e| {
                            BedMergeError::Config(format!("Failed to configure thread pool: {}", e))
                        })?;
                    println!("🧵 Threads: {}", n);
                } else {
                    println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
                }
            }

            println!("📁 Base directory: {}", validation.base_dir.display());
            let outcome = run_builds(&jobs, &validation.base_dir, validation.options)?;

            if let Some(summary) = &validation.summary {
                write_summary(&validation.base_dir.join(summary), &outcome)?;
            }

            if validation.options.dry_run {
                println!("✅ Dry run completed successfully");
            }

            if !outcome.is_success() {
                return Err(BedMergeError::BuildsFailed(
                    outcome.failures.into_iter().map(|(name, _)| name).collect(),
                ));
            }
            Ok(())
        }
    }
}
