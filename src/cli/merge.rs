// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::error::Result;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: &Config) -> Self {
        // Paths
        if self.base_dir.is_none() {
            self.base_dir = config.base_dir.clone();
        }
        if self.summary.is_none() {
            self.summary = config.summary.clone();
        }

        // Execution
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.parallel && config.parallel.unwrap_or(false) {
            self.parallel = true;
        }
        if !self.keep_going && config.keep_going.unwrap_or(false) {
            self.keep_going = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<(Self, Config)> {
        let config = Config::from_file(config_path)?;
        let merged = self.merge_with_config(&config);
        Ok((merged, config))
    }
}
