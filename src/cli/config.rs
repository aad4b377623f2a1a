// config.rs - Configuration file support

use crate::core::BuildJob;
use crate::error::{BedMergeError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    // Paths
    pub base_dir: Option<String>,
    pub summary: Option<String>,

    // Execution
    pub parallel: Option<bool>,
    pub threads: Option<usize>,
    pub keep_going: Option<bool>,
    pub dry_run: Option<bool>,

    // Builds; the GRCh37/GRCh38 default layout is used when empty
    #[serde(default)]
    pub builds: Vec<BuildJob>,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BedMergeError::Config(e.to_string()))
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BedMergeError::io(path, e))?;

        let config = Self::from_toml_str(&content).map_err(|e| {
            BedMergeError::Config(format!("Failed to parse config file '{}': {}", path.display(), e))
        })?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# bedmerge.toml - Configuration file for bedmerge
# Command line arguments will override these settings

# =============================================================================
# PATHS
# =============================================================================

# Directory that all relative paths below resolve against
base_dir = "."

# Write a JSON run summary (row counts and md5 per build)
# summary = "public/data/summary.json"

# =============================================================================
# EXECUTION
# =============================================================================

# Merge builds concurrently
parallel = false

# Number of threads for parallel mode (omit for auto-detection)
# threads = 2

# Continue with remaining builds after a failure
keep_going = false

# Validate inputs without writing output
dry_run = false

# =============================================================================
# BUILDS (omit to use the default GRCh37/GRCh38 layout)
# =============================================================================

[[builds]]
name = "GRCh37"
exon = "ManeSelectBed/GRCh37/Gencode.GRCh37.exon.cor.bed"
intron = "ManeSelectBed/GRCh37/Gencode.GRCh37.intron.bed"
output = "public/data/GRCh37.bed"

[[builds]]
name = "GRCh38"
exon = "ManeSelectBed/GRCh38/Gencode.GRCh38.exon.cor.bed"
intron = "ManeSelectBed/GRCh38/Gencode.GRCh38.intron.bed"
output = "public/data/GRCh38.bed"
"#
        .to_string()
    }
}
