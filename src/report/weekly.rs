//! Weekly report
//!
//! Hours are not recorded per day, so the weekly figure is always zero and
//! the module list is driven by status alone.

use std::fmt;

use crate::progress::{ModuleStatus, ProgressState};

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReport {
    pub hours_this_week: f64,
    pub modules_worked_on: Vec<String>,
}

impl WeeklyReport {
    pub fn compute(state: &ProgressState) -> Self {
        let modules_worked_on = state
            .modules
            .iter()
            .filter(|(_, module)| {
                matches!(module.status, ModuleStatus::InProgress | ModuleStatus::Completed)
            })
            .map(|(_, module)| module.name.clone())
            .collect();

        Self {
            // Only cumulative per-module hours are stored, so there is nothing to sum
            hours_this_week: 0.0,
            modules_worked_on,
        }
    }
}

impl fmt::Display for WeeklyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n📊 WEEKLY REPORT")?;
        writeln!(f, "{}", "=".repeat(20))?;
        writeln!(f, "⏰ Estimated time this week: {}h", self.hours_this_week)?;
        write!(f, "📚 Modules worked on: {}", self.modules_worked_on.len())?;
        for name in &self.modules_worked_on {
            write!(f, "\n  - {}", name)?;
        }
        Ok(())
    }
}
