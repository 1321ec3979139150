//! End-to-end tests for the command dispatcher, run against a temporary
//! progress document.

use study_tracker::cli::dispatch;
use study_tracker::{Config, ModuleId, ModuleStatus, ProgressStore};

struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    fn config(&self) -> Config {
        Config {
            data_file: self.dir.path().join("learning_progress.json"),
            modules_dir: self.dir.path().join("modules"),
        }
    }

    /// Run one invocation and return everything it printed
    fn run(&self, args: &[&str]) -> String {
        let mut argv = vec!["study-tracker"];
        argv.extend_from_slice(args);
        let config = self.config();
        let mut out = Vec::new();
        dispatch(argv, move || Ok(config), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn store(&self) -> ProgressStore {
        ProgressStore::open(self.config().data_file).unwrap()
    }

    fn has_document(&self) -> bool {
        self.config().data_file.exists()
    }
}

#[test]
fn test_no_arguments_prints_usage() {
    let ws = Workspace::new();
    let out = ws.run(&[]);
    assert!(out.contains("Usage:"));
    assert!(out.contains("07-soft-skills"));
    assert!(!ws.has_document());
}

#[test]
fn test_update_derives_in_progress() {
    let ws = Workspace::new();
    let out = ws.run(&["update", "01-operating-systems", "50", "3"]);
    assert_eq!(out.trim(), "✅ Updated Hệ Điều Hành: 50%");

    let module = ws.store().module(ModuleId::OperatingSystems).clone();
    assert_eq!(module.status, ModuleStatus::InProgress);
    assert_eq!(module.progress, 50);
    assert_eq!(module.time_spent, 3.0);
}

#[test]
fn test_update_to_completion_counts_module() {
    let ws = Workspace::new();
    ws.run(&["update", "02-virtualization-cloud", "0"]);
    assert_eq!(ws.store().module(ModuleId::VirtualizationCloud).status, ModuleStatus::NotStarted);

    ws.run(&["update", "02-virtualization-cloud", "100"]);
    assert_eq!(ws.store().module(ModuleId::VirtualizationCloud).status, ModuleStatus::Completed);

    let status = ws.run(&["status"]);
    assert!(status.contains("✅ Completed Modules: 1/7"), "{}", status);
    assert!(status.contains("🟢 Ảo hóa & Cloud: 100%"), "{}", status);
}

#[test]
fn test_lab_twice() {
    let ws = Workspace::new();
    assert_eq!(ws.run(&["lab", "04-database-management", "lab1"]).trim(), "✅ Completed lab: lab1");
    assert_eq!(ws.run(&["lab", "04-database-management", "lab1"]).trim(), "ℹ️ Lab lab1 already completed");
    assert_eq!(ws.store().module(ModuleId::DatabaseManagement).labs_completed, vec!["lab1"]);
}

#[test]
fn test_note_joins_remaining_words() {
    let ws = Workspace::new();
    let out = ws.run(&["note", "05-automation-tools", "ansible", "roles", "are", "neat"]);
    assert_eq!(out.trim(), "📝 Added note to Automation Tools");

    let store = ws.store();
    let notes = &store.module(ModuleId::AutomationTools).notes;
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "ansible roles are neat");
}

#[test]
fn test_cert_buckets() {
    let ws = Workspace::new();
    assert_eq!(
        ws.run(&["cert", "AWS-SAA", "in_progress"]).trim(),
        "🎓 Added certification: AWS-SAA (in_progress)"
    );
    assert_eq!(ws.run(&["cert", "CKA"]).trim(), "🎓 Added certification: CKA (planned)");
    assert_eq!(ws.run(&["cert", "X", "bogus"]).trim(), "❌ Invalid status: bogus");

    let store = ws.store();
    let certs = &store.state().certifications;
    assert_eq!(certs.counts(), (1, 1, 0));
    assert_eq!(certs.in_progress[0].name, "AWS-SAA");
}

#[test]
fn test_unknown_module_is_reported() {
    let ws = Workspace::new();
    assert_eq!(ws.run(&["update", "08-basket-weaving", "10"]).trim(), "❌ Module 08-basket-weaving not found");
    assert_eq!(ws.run(&["lab", "08-basket-weaving", "weave"]).trim(), "❌ Module 08-basket-weaving not found");
    assert_eq!(ws.run(&["note", "08-basket-weaving", "hmm"]).trim(), "❌ Module 08-basket-weaving not found");
    assert!(!ws.has_document());
}

#[test]
fn test_invalid_commands() {
    let ws = Workspace::new();
    for args in [
        vec!["launch"],
        vec!["update", "01-operating-systems"],
        vec!["update", "01-operating-systems", "half"],
        vec!["lab", "01-operating-systems"],
        vec!["note", "01-operating-systems"],
        vec!["cert"],
    ] {
        assert_eq!(ws.run(&args).trim(), "❌ Invalid command or missing arguments", "{:?}", args);
    }
    assert!(!ws.has_document());
}

#[test]
fn test_non_finite_hours_are_invalid() {
    let ws = Workspace::new();
    for hours in ["nan", "inf", "-inf"] {
        let out = ws.run(&["update", "01-operating-systems", "50", hours]);
        assert_eq!(out.trim(), "❌ Invalid command or missing arguments", "{}", hours);
    }
    assert!(!ws.has_document());

    ws.run(&["update", "01-operating-systems", "50", "1.5"]);
    let status = ws.run(&["status"]);
    assert!(status.contains("Hệ Điều Hành: 50% (Labs: 0, Time: 1.5h)"), "{}", status);
}

#[test]
fn test_extra_arguments_are_ignored() {
    let ws = Workspace::new();
    assert_eq!(ws.run(&["lab", "01-operating-systems", "l1", "extra"]).trim(), "✅ Completed lab: l1");
    assert_eq!(ws.store().module(ModuleId::OperatingSystems).labs_completed, vec!["l1".to_string()]);

    ws.run(&["update", "05-automation-tools", "20", "2", "again"]);
    let module = ws.store().module(ModuleId::AutomationTools).clone();
    assert_eq!(module.progress, 20);
    assert_eq!(module.time_spent, 2.0);

    ws.run(&["cert", "CKA", "completed", "2025"]);
    let certs = ws.store().state().certifications.clone();
    assert_eq!(certs.completed.len(), 1);
    assert_eq!(certs.completed[0].name, "CKA");
}

#[test]
fn test_status_on_fresh_state() {
    let ws = Workspace::new();
    let out = ws.run(&["status"]);
    assert!(out.contains("⏱️ Days learning: 0"));
    assert!(out.contains("📊 Overall Progress: 0.0%"));
    assert!(out.contains("📚 Continue with: Hệ Điều Hành"));
    assert!(!out.contains("📖 Start with"));
    // Read-only commands never write the document
    assert!(!ws.has_document());
}

#[test]
fn test_status_surfaces_module_readme() {
    let ws = Workspace::new();
    let module_dir = ws.config().modules_dir.join("03-container-management");
    std::fs::create_dir_all(&module_dir).unwrap();
    std::fs::write(module_dir.join("README.md"), "# Containers\n").unwrap();

    ws.run(&["update", "03-container-management", "20"]);
    let out = ws.run(&["status"]);
    assert!(out.contains("📚 Continue with: Container Management"));
    assert!(out.contains(&format!("📖 Start with: {}", module_dir.join("README.md").display())));
}

#[test]
fn test_report_lists_worked_modules_with_zero_hours() {
    let ws = Workspace::new();
    ws.run(&["update", "06-programming", "30", "4"]);
    ws.run(&["update", "07-soft-skills", "100", "2"]);

    let out = ws.run(&["report"]);
    // Weekly hours are not tracked yet; the figure stays at zero
    assert!(out.contains("⏰ Estimated time this week: 0h"));
    assert!(out.contains("📚 Modules worked on: 2"));
    assert!(out.contains("  - Programming"));
    assert!(out.contains("  - Soft Skills"));
}

#[test]
fn test_malformed_document_is_fatal() {
    let ws = Workspace::new();
    std::fs::write(ws.config().data_file, "not json at all").unwrap();

    let config = ws.config();
    let mut out = Vec::new();
    let result = dispatch(["study-tracker", "status"], move || Ok(config), &mut out);
    assert!(result.is_err());
}
