//! Overall progress summary (the `status` view)

use chrono::NaiveDateTime;
use std::fmt;

use crate::progress::{ModuleId, ModuleStatus, ProgressState};

/// Glyph shown next to a module for its status
pub fn status_glyph(status: &ModuleStatus) -> &'static str {
    match status {
        ModuleStatus::InProgress => "🟡",
        ModuleStatus::Completed => "🟢",
        ModuleStatus::NotStarted | ModuleStatus::Unrecognized(_) => "⚪",
    }
}

/// One rendered module row
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleLine {
    pub id: ModuleId,
    pub glyph: &'static str,
    pub name: String,
    pub progress: u32,
    pub labs: usize,
    pub time_spent: f64,
}

/// Snapshot of overall progress at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub start_date: NaiveDateTime,
    pub days_since_start: i64,
    pub modules: Vec<ModuleLine>,
    /// Mean progress over the fixed module set
    pub average_progress: f64,
    /// Modules at exactly 100%, regardless of their status field
    pub completed_modules: usize,
    pub certifications: (usize, usize, usize),
    pub projects: (usize, usize, usize),
}

impl ProgressSummary {
    pub fn compute(state: &ProgressState, now: NaiveDateTime) -> Self {
        let modules: Vec<ModuleLine> = state
            .modules
            .iter()
            .map(|(id, module)| ModuleLine {
                id,
                glyph: status_glyph(&module.status),
                name: module.name.clone(),
                progress: module.progress,
                labs: module.labs_completed.len(),
                time_spent: module.time_spent,
            })
            .collect();

        let total: u64 = modules.iter().map(|m| u64::from(m.progress)).sum();
        let completed_modules = modules.iter().filter(|m| m.progress == 100).count();

        Self {
            start_date: state.start_date,
            days_since_start: (now - state.start_date).num_days(),
            modules,
            average_progress: total as f64 / ModuleId::COUNT as f64,
            completed_modules,
            certifications: state.certifications.counts(),
            projects: state.projects.counts(),
        }
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🎯 LEARNING PROGRESS")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "📅 Started: {}", self.start_date.format("%Y-%m-%d"))?;
        writeln!(f, "⏱️ Days learning: {}", self.days_since_start)?;
        writeln!(f)?;

        for m in &self.modules {
            writeln!(
                f,
                "{} {}: {}% (Labs: {}, Time: {}h)",
                m.glyph, m.name, m.progress, m.labs, m.time_spent
            )?;
        }

        writeln!(f)?;
        writeln!(f, "📊 Overall Progress: {:.1}%", self.average_progress)?;
        writeln!(f, "✅ Completed Modules: {}/{}", self.completed_modules, ModuleId::COUNT)?;

        let (planned, in_progress, completed) = self.certifications;
        writeln!(
            f,
            "🎓 Certifications - Planned: {}, In Progress: {}, Completed: {}",
            planned, in_progress, completed
        )?;
        let (planned, in_progress, completed) = self.projects;
        write!(
            f,
            "🚀 Projects - Planned: {}, In Progress: {}, Completed: {}",
            planned, in_progress, completed
        )
    }
}
