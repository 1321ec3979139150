//! Recommended next module to study

use std::fmt;
use std::path::{Path, PathBuf};

use crate::progress::{ModuleId, ModuleStatus, ProgressState};

const README: &str = "README.md";

/// Existence check for per-module documentation
pub trait DocLookup {
    fn exists(&self, path: &Path) -> bool;
}

/// Lookup backed by the real filesystem
pub struct FsLookup;

impl DocLookup for FsLookup {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Where to pick up next
#[derive(Debug, Clone, PartialEq)]
pub enum NextSteps {
    Continue {
        id: ModuleId,
        name: String,
        path: PathBuf,
        readme: Option<PathBuf>,
    },
    AllCompleted,
}

impl NextSteps {
    /// Pick the first in-progress module, else the first not-started one
    pub fn compute(state: &ProgressState, modules_dir: &Path, docs: &dyn DocLookup) -> Self {
        let Some(id) = first_with_status(state, &ModuleStatus::InProgress)
            .or_else(|| first_with_status(state, &ModuleStatus::NotStarted))
        else {
            return NextSteps::AllCompleted;
        };

        let path = modules_dir.join(id.as_str());
        let readme = Some(path.join(README)).filter(|p| docs.exists(p));

        NextSteps::Continue {
            id,
            name: state.modules.get(id).name.clone(),
            path,
            readme,
        }
    }

    pub fn current_module(&self) -> Option<ModuleId> {
        match self {
            NextSteps::Continue { id, .. } => Some(*id),
            NextSteps::AllCompleted => None,
        }
    }
}

fn first_with_status(state: &ProgressState, status: &ModuleStatus) -> Option<ModuleId> {
    state
        .modules
        .iter()
        .find(|(_, module)| module.status == *status)
        .map(|(id, _)| id)
}

impl fmt::Display for NextSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n🎯 RECOMMENDED NEXT STEPS")?;
        writeln!(f, "{}", "=".repeat(30))?;

        match self {
            NextSteps::Continue { name, path, readme, .. } => {
                writeln!(f, "📚 Continue with: {}", name)?;
                write!(f, "📁 Path: {}/", path.display())?;
                if let Some(readme) = readme {
                    write!(f, "\n📖 Start with: {}", readme.display())?;
                }
                Ok(())
            }
            NextSteps::AllCompleted => write!(f, "🎉 All modules completed! Time for projects!"),
        }
    }
}
