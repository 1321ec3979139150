//! Progress Store - load, mutate and persist the progress document
//!
//! The document is read once, mutated in memory and rewritten in full
//! after every change. Writes are not atomic and there is no locking:
//! two concurrent invocations race and the later save wins.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::model::{now, Bucket, Entry, ModuleId, ModuleState, ModuleStatus, NoteEntry, ProgressState};
use crate::error::{Result, StorageError, TrackerError};

/// Outcome of marking a lab as completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabOutcome {
    Recorded,
    AlreadyCompleted,
}

/// Persistent progress store backed by a single JSON document
pub struct ProgressStore {
    path: PathBuf,
    state: ProgressState,
}

impl ProgressStore {
    /// Load the document at `path`, or start a fresh state if it does not
    /// exist yet. A fresh state is not written until the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let state = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|source| StorageError::Read { path: path.clone(), source })?;
            let state: ProgressState = serde_json::from_str(&contents)
                .map_err(|source| StorageError::Parse { path: path.clone(), source })?;
            debug!("Loaded progress from {}", path.display());
            state
        } else {
            debug!("No progress file at {}, starting fresh", path.display());
            ProgressState::new(now())
        };

        Ok(Self { path, state })
    }

    /// Write the full document, replacing whatever is on disk
    pub fn save(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|source| StorageError::Write { path: self.path.clone(), source })?;
        }

        let contents = serde_json::to_string_pretty(&self.state).map_err(StorageError::Serialize)?;
        std::fs::write(&self.path, contents)
            .map_err(|source| StorageError::Write { path: self.path.clone(), source })?;
        debug!("Saved progress to {}", self.path.display());
        Ok(())
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn module(&self, id: ModuleId) -> &ModuleState {
        self.state.modules.get(id)
    }

    /// Set progress, add hours, and overwrite status when one is given.
    /// Progress is stored as given, without range checks. Non-finite hours
    /// are rejected since JSON cannot represent them.
    pub fn update_module_progress(
        &mut self,
        module_id: &str,
        progress: u32,
        status: Option<ModuleStatus>,
        time_spent_delta: f64,
    ) -> Result<&ModuleState> {
        let id: ModuleId = module_id.parse()?;
        let time_spent = self.state.modules.get(id).time_spent + time_spent_delta;
        if !time_spent.is_finite() {
            return Err(TrackerError::InvalidHours(time_spent_delta));
        }
        let module = self.state.modules.get_mut(id);
        module.progress = progress;
        module.time_spent = time_spent;
        if let Some(status) = status {
            module.status = status;
        }

        self.save()?;
        info!("Updated {} to {}% (+{}h)", id, progress, time_spent_delta);
        Ok(self.state.modules.get(id))
    }

    /// Record a completed lab. Already-recorded labs are left alone and
    /// nothing is written.
    pub fn complete_lab(&mut self, module_id: &str, lab_name: &str) -> Result<LabOutcome> {
        let id: ModuleId = module_id.parse()?;
        let module = self.state.modules.get_mut(id);
        if module.has_lab(lab_name) {
            return Ok(LabOutcome::AlreadyCompleted);
        }
        module.labs_completed.push(lab_name.to_string());

        self.save()?;
        info!("Completed lab {} in {}", lab_name, id);
        Ok(LabOutcome::Recorded)
    }

    /// Append a note stamped with the current time
    pub fn add_note(&mut self, module_id: &str, note: &str) -> Result<&ModuleState> {
        let id: ModuleId = module_id.parse()?;
        self.state.modules.get_mut(id).notes.push(NoteEntry {
            date: now(),
            content: note.to_string(),
        });

        self.save()?;
        info!("Added note to {}", id);
        Ok(self.state.modules.get(id))
    }

    /// Track a certification in the bucket named by `status`
    pub fn add_certification(&mut self, name: &str, status: &str) -> Result<Bucket> {
        let bucket: Bucket = status.parse()?;
        self.state.certifications.push(bucket, new_entry(name, now()));

        self.save()?;
        info!("Added certification {} ({})", name, bucket);
        Ok(bucket)
    }

    /// Track a project in the bucket named by `status`
    pub fn add_project(&mut self, name: &str, status: &str) -> Result<Bucket> {
        let bucket: Bucket = status.parse()?;
        self.state.projects.push(bucket, new_entry(name, now()));

        self.save()?;
        info!("Added project {} ({})", name, bucket);
        Ok(bucket)
    }
}

fn new_entry(name: &str, added_date: NaiveDateTime) -> Entry {
    Entry {
        name: name.to_string(),
        added_date,
    }
}
