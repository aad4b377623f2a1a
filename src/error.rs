// error.rs - Error types shared across the crate

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BedMergeError>;

#[derive(Error, Debug)]
pub enum BedMergeError {
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Required column '{column}' missing from {}", .path.display())]
    Schema { path: PathBuf, column: String },

    #[error("Exon and intron headers differ (exon: [{}], intron: [{}])", .exon.join(", "), .intron.join(", "))]
    SchemaMismatch { exon: Vec<String>, intron: Vec<String> },

    #[error("Error parsing {} line {line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("{} build(s) failed: {}", .0.len(), .0.join(", "))]
    BuildsFailed(Vec<String>),
}

impl BedMergeError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BedMergeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Map a `csv` error raised while reading `path`
    pub(crate) fn from_csv(path: &std::path::Path, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(source) => BedMergeError::io(path, source),
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => BedMergeError::Parse {
                path: path.to_path_buf(),
                line,
                message: format!("row has {} fields, expected {}", len, expected_len),
            },
            csv::ErrorKind::Utf8 { err, .. } => BedMergeError::Parse {
                path: path.to_path_buf(),
                line,
                message: format!("invalid UTF-8: {}", err),
            },
            other => BedMergeError::Parse {
                path: path.to_path_buf(),
                line,
                message: format!("{:?}", other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = BedMergeError::Schema {
            path: PathBuf::from("exon.bed"),
            column: "location".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Required column 'location' missing from exon.bed"
        );

        let err = BedMergeError::FileNotFound(PathBuf::from("missing.bed"));
        assert!(err.to_string().contains("missing.bed"));
    }

    #[test]
    fn test_io_keeps_source() {
        let err = BedMergeError::io(
            "out/x.bed",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("I/O error on out/x.bed"));
    }
}
