use std::path::Path;

use super::plan::{plan_renames, RenamePlan};
use crate::error::Result;
use crate::naming::{self, DigitPolicy};
use crate::output::{EntryOutcome, RenameStatus, RenumberResult, RunSummary};
use crate::utils::io;

/// Options for a single renumber run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenumberOptions {
    pub slug_digits: DigitPolicy,
    /// Compute the plan without touching the directory.
    pub dry_run: bool,
}

/// Names of the markdown entries in `dir` (non-recursive, unsorted).
pub fn list_markdown_entries(dir: &Path) -> Result<Vec<String>> {
    let mut names = io::list_file_names(dir)?;
    names.retain(|name| naming::is_markdown(name));
    Ok(names)
}

/// Apply a plan to `dir`, one rename at a time in plan order.
///
/// Stops at the first failure. Renames already performed are kept.
pub fn apply_plan(plan: &RenamePlan, dir: &Path) -> Result<Vec<EntryOutcome>> {
    let mut outcomes = Vec::with_capacity(plan.entries.len());

    for entry in &plan.entries {
        let status = if entry.is_rename() {
            io::rename_in_dir(dir, &entry.from, &entry.to)?;
            log_status!("renumber", "{} -> {}", entry.from, entry.to);
            RenameStatus::Renamed
        } else {
            RenameStatus::Unchanged
        };

        outcomes.push(EntryOutcome {
            sequence: entry.sequence,
            from: entry.from.clone(),
            to: entry.to.clone(),
            status,
        });
    }

    Ok(outcomes)
}

fn preview(plan: &RenamePlan) -> Vec<EntryOutcome> {
    plan.entries
        .iter()
        .map(|entry| EntryOutcome {
            sequence: entry.sequence,
            from: entry.from.clone(),
            to: entry.to.clone(),
            status: if entry.is_rename() {
                RenameStatus::Pending
            } else {
                RenameStatus::Unchanged
            },
        })
        .collect()
}

/// List, plan and (unless `dry_run`) apply renames for `dir`.
pub fn renumber_dir(dir: &Path, options: RenumberOptions) -> Result<RenumberResult> {
    let names = list_markdown_entries(dir)?;
    let plan = plan_renames(&names, options.slug_digits);

    log_status!(
        "renumber",
        "{} markdown file(s), {} to rename in {}",
        plan.entries.len(),
        plan.rename_count(),
        dir.display()
    );
    for warning in &plan.warnings {
        log_status!("renumber", "warning: {}", warning.message);
    }

    let (entries, applied) = if options.dry_run {
        (preview(&plan), false)
    } else {
        (apply_plan(&plan, dir)?, true)
    };

    Ok(RenumberResult {
        dir: dir.display().to_string(),
        slug_digits: options.slug_digits,
        dry_run: options.dry_run,
        summary: RunSummary::from_entries(&entries),
        entries,
        warnings: plan.warnings,
        applied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), name).unwrap();
    }

    #[test]
    fn listing_filters_markdown() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp, "a.md");
        touch(&tmp, "notes.txt");

        assert_eq!(list_markdown_entries(tmp.path()).unwrap(), vec!["a.md"]);
    }

    #[test]
    fn dry_run_leaves_directory_alone() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp, "Hello World.md");

        let result = renumber_dir(
            tmp.path(),
            RenumberOptions {
                dry_run: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert!(!result.applied);
        assert_eq!(result.entries[0].status, RenameStatus::Pending);
        assert_eq!(result.summary.pending, 1);
        assert!(tmp.path().join("Hello World.md").exists());
    }

    #[test]
    fn apply_renames_and_preserves_content() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp, "Hello World.md");
        touch(&tmp, "0001-already.md");

        let result = renumber_dir(tmp.path(), RenumberOptions::default()).unwrap();

        assert!(result.applied);
        assert_eq!(result.summary.renamed, 1);
        assert_eq!(result.summary.unchanged, 1);
        assert_eq!(
            fs::read_to_string(tmp.path().join("0002-hello-world.md")).unwrap(),
            "Hello World.md"
        );
    }

    #[test]
    fn apply_stops_on_occupied_target() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp, "0000-s.md");
        touch(&tmp, "0001-s.md");

        let err = renumber_dir(tmp.path(), RenumberOptions::default()).unwrap_err();

        assert_eq!(err.code.as_str(), "rename.target_exists");
        assert_eq!(
            fs::read_to_string(tmp.path().join("0001-s.md")).unwrap(),
            "0001-s.md"
        );
        assert!(tmp.path().join("0000-s.md").exists());
    }
}
