//! Error types for the tracker
//!
//! Recoverable errors are reported to the user and the process exits
//! normally. Storage errors are fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the progress document
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize progress state")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced by tracker operations
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Module {0} not found")]
    ModuleNotFound(String),
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
    #[error("Invalid hours: {0}")]
    InvalidHours(f64),
    #[error("Invalid command or missing arguments")]
    InvalidCommand,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TrackerError {
    /// Whether the error should be reported and swallowed rather than
    /// terminating the process
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TrackerError::Storage(_))
    }
}

pub type Result<T, E = TrackerError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_kinds() {
        assert!(TrackerError::ModuleNotFound("x".into()).is_recoverable());
        assert!(TrackerError::InvalidStatus("bogus".into()).is_recoverable());
        assert!(TrackerError::InvalidCommand.is_recoverable());
        assert!(TrackerError::InvalidHours(f64::NAN).is_recoverable());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = TrackerError::from(StorageError::Read { path: "p.json".into(), source: io });
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            TrackerError::ModuleNotFound("99-nope".into()).to_string(),
            "Module 99-nope not found"
        );
        assert_eq!(TrackerError::InvalidStatus("bogus".into()).to_string(), "Invalid status: bogus");
        assert_eq!(TrackerError::InvalidCommand.to_string(), "Invalid command or missing arguments");
    }

    #[test]
    fn test_storage_message_leaves_cause_to_the_chain() {
        let parse = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let cause = parse.to_string();
        let err = anyhow::Error::from(StorageError::Parse { path: "p.json".into(), source: parse });

        assert_eq!(err.to_string(), "failed to parse p.json");
        let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert_eq!(chain, vec!["failed to parse p.json".to_string(), cause.clone()]);
        assert_eq!(format!("{:#}", err).matches(&cause).count(), 1);
    }
}
