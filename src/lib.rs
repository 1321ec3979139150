//! Study Tracker Library
//!
//! Tracks progress through a fixed set of study modules:
//! - Per-module progress, status, hours, completed labs and notes
//! - Certification and project buckets (planned, in progress, completed)
//! - Progress summary, next-step recommendation and weekly report
//!
//! # Example
//!
//! ```ignore
//! use study_tracker::ProgressStore;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut store = ProgressStore::open("learning_progress.json")?;
//!     store.complete_lab("03-container-management", "docker-networking")?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod config;
pub mod progress;
pub mod report;
pub mod cli;

pub use config::Config;
pub use error::{StorageError, TrackerError};
pub use progress::{
    Bucket, LabOutcome, ModuleId, ModuleState, ModuleStatus, ProgressState, ProgressStore,
};
pub use report::{DocLookup, FsLookup, NextSteps, ProgressSummary, WeeklyReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get the library info
pub fn info() -> String {
    format!("{} v{} - Study Progress Tracker", NAME, VERSION)
}
