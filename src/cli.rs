//! CLI interface for study-tracker

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::Write;

use crate::config::Config;
use crate::error::TrackerError;
use crate::progress::model::now;
use crate::progress::{LabOutcome, ModuleId, ModuleStatus, ProgressStore};
use crate::report::{FsLookup, NextSteps, ProgressSummary, WeeklyReport};

const BIN_NAME: &str = "study-tracker";

#[derive(Parser, Debug)]
#[command(name = "study-tracker")]
#[command(about = "Track study progress across modules, labs, notes and certifications", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show current progress and recommended next steps
    Status,
    /// Update module progress (status follows from the percentage)
    Update {
        /// Module id, e.g. 01-operating-systems
        module: String,
        /// Completion percentage
        progress: u32,
        /// Hours to add to the module's total
        #[arg(value_parser = parse_hours)]
        hours: Option<f64>,
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        _rest: Vec<String>,
    },
    /// Mark a lab as completed
    Lab {
        module: String,
        lab_name: String,
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        _rest: Vec<String>,
    },
    /// Add a study note
    Note {
        module: String,
        /// Note text, remaining words are joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        note: Vec<String>,
    },
    /// Add a certification
    Cert {
        name: String,
        /// planned, in_progress or completed
        #[arg(default_value = "planned")]
        status: String,
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        _rest: Vec<String>,
    },
    /// Generate weekly report
    Report,
}

/// Hours must survive a JSON round trip, so NaN and infinities are refused
fn parse_hours(value: &str) -> Result<f64, String> {
    let hours: f64 = value.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if hours.is_finite() {
        Ok(hours)
    } else {
        Err(format!("{} is not a finite number of hours", value))
    }
}

pub fn run() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    dispatch(std::env::args_os(), Config::load, &mut stdout)
}

/// Parse `args` and run one command against the configured store.
///
/// Recoverable errors are written to `out` and return `Ok`. Storage and
/// configuration failures are returned.
pub fn dispatch<I, T, C, W>(args: I, load_config: C, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    C: FnOnce() -> Result<Config>,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", e)?;
            return Ok(());
        }
        Err(e) => {
            tracing::debug!("Argument parsing failed: {}", e);
            return report_error(TrackerError::InvalidCommand, out);
        }
    };

    let Some(command) = cli.command else {
        print_usage(out)?;
        return Ok(());
    };

    let config = load_config()?;
    let mut store = ProgressStore::open(&config.data_file)?;

    match execute(&mut store, &config, command) {
        Ok(output) => {
            writeln!(out, "{}", output)?;
            Ok(())
        }
        Err(e) => report_error(e, out),
    }
}

/// Run one command and return what should be shown to the user
fn execute(store: &mut ProgressStore, config: &Config, command: Commands) -> Result<String, TrackerError> {
    let output = match command {
        Commands::Status => {
            let summary = ProgressSummary::compute(store.state(), now());
            let next = NextSteps::compute(store.state(), &config.modules_dir, &FsLookup);
            format!("{}\n{}", summary, next)
        }
        Commands::Update { module, progress, hours, .. } => {
            let status = ModuleStatus::from_progress(progress);
            let updated = store.update_module_progress(&module, progress, Some(status), hours.unwrap_or(0.0))?;
            format!("✅ Updated {}: {}%", updated.name, progress)
        }
        Commands::Lab { module, lab_name, .. } => match store.complete_lab(&module, &lab_name)? {
            LabOutcome::Recorded => format!("✅ Completed lab: {}", lab_name),
            LabOutcome::AlreadyCompleted => format!("ℹ️ Lab {} already completed", lab_name),
        },
        Commands::Note { module, note } => {
            let updated = store.add_note(&module, &note.join(" "))?;
            format!("📝 Added note to {}", updated.name)
        }
        Commands::Cert { name, status, .. } => {
            let bucket = store.add_certification(&name, &status)?;
            format!("🎓 Added certification: {} ({})", name, bucket)
        }
        Commands::Report => WeeklyReport::compute(store.state()).to_string(),
    };
    Ok(output)
}

fn report_error<W: Write>(err: TrackerError, out: &mut W) -> Result<()> {
    if !err.is_recoverable() {
        return Err(err.into());
    }
    writeln!(out, "❌ {}", err)?;
    Ok(())
}

fn print_usage<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "🎯 {}", crate::info())?;
    writeln!(out, "\nUsage:")?;
    writeln!(out, "  {} status          - Show current progress", BIN_NAME)?;
    writeln!(out, "  {} update <module> <progress> [hours] - Update progress", BIN_NAME)?;
    writeln!(out, "  {} lab <module> <lab_name> - Mark lab completed", BIN_NAME)?;
    writeln!(out, "  {} note <module> <note> - Add study note", BIN_NAME)?;
    writeln!(out, "  {} cert <name> [status] - Add certification", BIN_NAME)?;
    writeln!(out, "  {} report          - Generate weekly report", BIN_NAME)?;
    writeln!(out, "\nModules:")?;
    for id in ModuleId::ALL {
        writeln!(out, "  - {}", id)?;
    }
    Ok(())
}
