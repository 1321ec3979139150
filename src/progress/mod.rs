//! Study progress tracking
//!
//! Holds the persisted document model and the store that loads,
//! mutates and saves it.

pub mod model;
pub mod store;

pub use model::{
    Bucket, Buckets, Entry, ModuleId, ModuleState, ModuleStatus, ModuleTable, NoteEntry,
    ProgressState,
};
pub use store::{LabOutcome, ProgressStore};
