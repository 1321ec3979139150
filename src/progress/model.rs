//! Progress data model
//!
//! The whole document is persisted as one JSON object: a start date, the
//! seven fixed study modules, and certification/project buckets.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Current local wall-clock time, the timestamp format of the document
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Identifier of one of the seven study modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModuleId {
    OperatingSystems,
    VirtualizationCloud,
    ContainerManagement,
    DatabaseManagement,
    AutomationTools,
    Programming,
    SoftSkills,
}

impl ModuleId {
    /// All modules in their fixed study order
    pub const ALL: [ModuleId; 7] = [
        ModuleId::OperatingSystems,
        ModuleId::VirtualizationCloud,
        ModuleId::ContainerManagement,
        ModuleId::DatabaseManagement,
        ModuleId::AutomationTools,
        ModuleId::Programming,
        ModuleId::SoftSkills,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::OperatingSystems => "01-operating-systems",
            ModuleId::VirtualizationCloud => "02-virtualization-cloud",
            ModuleId::ContainerManagement => "03-container-management",
            ModuleId::DatabaseManagement => "04-database-management",
            ModuleId::AutomationTools => "05-automation-tools",
            ModuleId::Programming => "06-programming",
            ModuleId::SoftSkills => "07-soft-skills",
        }
    }

    /// Label stored in a freshly initialized document
    pub fn default_name(&self) -> &'static str {
        match self {
            ModuleId::OperatingSystems => "Hệ Điều Hành",
            ModuleId::VirtualizationCloud => "Ảo hóa & Cloud",
            ModuleId::ContainerManagement => "Container Management",
            ModuleId::DatabaseManagement => "Database Management",
            ModuleId::AutomationTools => "Automation Tools",
            ModuleId::Programming => "Programming",
            ModuleId::SoftSkills => "Soft Skills",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| TrackerError::ModuleNotFound(s.to_string()))
    }
}

/// Lifecycle status of a module
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModuleStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    /// Any other stored value, kept verbatim so it is written back unchanged
    Unrecognized(String),
}

impl From<String> for ModuleStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "not_started" => ModuleStatus::NotStarted,
            "in_progress" => ModuleStatus::InProgress,
            "completed" => ModuleStatus::Completed,
            _ => ModuleStatus::Unrecognized(value),
        }
    }
}

impl From<ModuleStatus> for String {
    fn from(status: ModuleStatus) -> Self {
        match status {
            ModuleStatus::Unrecognized(value) => value,
            known => known.to_string(),
        }
    }
}

impl ModuleStatus {
    /// Status the CLI derives from a progress percentage
    pub fn from_progress(progress: u32) -> Self {
        match progress {
            0 => ModuleStatus::NotStarted,
            100 => ModuleStatus::Completed,
            _ => ModuleStatus::InProgress,
        }
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleStatus::NotStarted => write!(f, "not_started"),
            ModuleStatus::InProgress => write!(f, "in_progress"),
            ModuleStatus::Completed => write!(f, "completed"),
            ModuleStatus::Unrecognized(value) => f.write_str(value),
        }
    }
}

/// A dated study note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub date: NaiveDateTime,
    pub content: String,
}

/// Per-module study state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleState {
    pub name: String,
    pub status: ModuleStatus,
    pub progress: u32,
    pub labs_completed: Vec<String>,
    /// Cumulative hours
    pub time_spent: f64,
    pub notes: Vec<NoteEntry>,
}

impl ModuleState {
    pub fn new(id: ModuleId) -> Self {
        Self {
            name: id.default_name().to_string(),
            status: ModuleStatus::NotStarted,
            progress: 0,
            labs_completed: Vec::new(),
            time_spent: 0.0,
            notes: Vec::new(),
        }
    }

    pub fn has_lab(&self, lab_name: &str) -> bool {
        self.labs_completed.iter().any(|lab| lab == lab_name)
    }
}

/// The seven modules, one field each so lookups are exhaustive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleTable {
    #[serde(rename = "01-operating-systems")]
    operating_systems: ModuleState,
    #[serde(rename = "02-virtualization-cloud")]
    virtualization_cloud: ModuleState,
    #[serde(rename = "03-container-management")]
    container_management: ModuleState,
    #[serde(rename = "04-database-management")]
    database_management: ModuleState,
    #[serde(rename = "05-automation-tools")]
    automation_tools: ModuleState,
    #[serde(rename = "06-programming")]
    programming: ModuleState,
    #[serde(rename = "07-soft-skills")]
    soft_skills: ModuleState,
}

impl Default for ModuleTable {
    fn default() -> Self {
        Self {
            operating_systems: ModuleState::new(ModuleId::OperatingSystems),
            virtualization_cloud: ModuleState::new(ModuleId::VirtualizationCloud),
            container_management: ModuleState::new(ModuleId::ContainerManagement),
            database_management: ModuleState::new(ModuleId::DatabaseManagement),
            automation_tools: ModuleState::new(ModuleId::AutomationTools),
            programming: ModuleState::new(ModuleId::Programming),
            soft_skills: ModuleState::new(ModuleId::SoftSkills),
        }
    }
}

impl ModuleTable {
    pub fn get(&self, id: ModuleId) -> &ModuleState {
        match id {
            ModuleId::OperatingSystems => &self.operating_systems,
            ModuleId::VirtualizationCloud => &self.virtualization_cloud,
            ModuleId::ContainerManagement => &self.container_management,
            ModuleId::DatabaseManagement => &self.database_management,
            ModuleId::AutomationTools => &self.automation_tools,
            ModuleId::Programming => &self.programming,
            ModuleId::SoftSkills => &self.soft_skills,
        }
    }

    pub fn get_mut(&mut self, id: ModuleId) -> &mut ModuleState {
        match id {
            ModuleId::OperatingSystems => &mut self.operating_systems,
            ModuleId::VirtualizationCloud => &mut self.virtualization_cloud,
            ModuleId::ContainerManagement => &mut self.container_management,
            ModuleId::DatabaseManagement => &mut self.database_management,
            ModuleId::AutomationTools => &mut self.automation_tools,
            ModuleId::Programming => &mut self.programming,
            ModuleId::SoftSkills => &mut self.soft_skills,
        }
    }

    /// Modules in fixed study order
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &ModuleState)> + '_ {
        ModuleId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

/// Certification / project bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Planned,
    InProgress,
    Completed,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Planned => "planned",
            Bucket::InProgress => "in_progress",
            Bucket::Completed => "completed",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(Bucket::Planned),
            "in_progress" => Ok(Bucket::InProgress),
            "completed" => Ok(Bucket::Completed),
            other => Err(TrackerError::InvalidStatus(other.to_string())),
        }
    }
}

/// A named certification or project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub added_date: NaiveDateTime,
}

/// Three ordered sequences of entries, one per bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Buckets {
    pub planned: Vec<Entry>,
    pub in_progress: Vec<Entry>,
    pub completed: Vec<Entry>,
}

impl Buckets {
    pub fn get(&self, bucket: Bucket) -> &[Entry] {
        match bucket {
            Bucket::Planned => &self.planned,
            Bucket::InProgress => &self.in_progress,
            Bucket::Completed => &self.completed,
        }
    }

    pub fn push(&mut self, bucket: Bucket, entry: Entry) {
        match bucket {
            Bucket::Planned => self.planned.push(entry),
            Bucket::InProgress => self.in_progress.push(entry),
            Bucket::Completed => self.completed.push(entry),
        }
    }

    /// Entry counts as (planned, in_progress, completed)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.planned.len(), self.in_progress.len(), self.completed.len())
    }
}

/// Root of the persisted document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    pub start_date: NaiveDateTime,
    pub modules: ModuleTable,
    pub certifications: Buckets,
    pub projects: Buckets,
}

impl ProgressState {
    /// Fresh state started at `start_date`
    pub fn new(start_date: NaiveDateTime) -> Self {
        Self {
            start_date,
            modules: ModuleTable::default(),
            certifications: Buckets::default(),
            projects: Buckets::default(),
        }
    }
}
