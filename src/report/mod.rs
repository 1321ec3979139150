//! Read-only reports over the progress state
//!
//! Each report is computed into a value and rendered through `Display`.

pub mod next_steps;
pub mod summary;
pub mod weekly;

pub use next_steps::{DocLookup, FsLookup, NextSteps};
pub use summary::{status_glyph, ModuleLine, ProgressSummary};
pub use weekly::WeeklyReport;
