use clap::Args;
use serde::Serialize;

use renumber::renamer::{self, RenumberOptions};
use renumber::RenumberResult;

use super::{CmdResult, TargetArgs};

#[derive(Args, Default, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Show what would be renamed without touching any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub result: RenumberResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

pub fn run(args: RunArgs, _global: &super::GlobalArgs) -> CmdResult<RunOutput> {
    let settings = args.target.settings()?;

    let result = renamer::renumber_dir(
        &settings.dir,
        RenumberOptions {
            slug_digits: settings.slug_digits,
            dry_run: args.dry_run,
        },
    )?;

    Ok((
        RunOutput {
            command: if args.dry_run { "run.dry_run" } else { "run" },
            hints: hints_for(&result),
            result,
        },
        0,
    ))
}

pub(crate) fn hints_for(result: &RenumberResult) -> Vec<String> {
    let mut hints = Vec::new();

    if result.entries.is_empty() {
        hints.push(format!("No markdown files found in {}", result.dir));
    } else if result.dry_run && result.summary.pending > 0 {
        hints.push("Run without --dry-run to apply these renames.".to_string());
    }
    if !result.warnings.is_empty() {
        hints.push(format!(
            "{} rename(s) target a name still in use; applying will stop at the first one.",
            result.warnings.len()
        ));
    }

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::GlobalArgs;
    use std::fs;
    use tempfile::TempDir;

    fn args_for(dir: &TempDir, dry_run: bool) -> RunArgs {
        // An explicit empty config keeps the test independent of the working directory.
        let config = dir.path().join("renumber.json");
        fs::write(&config, "{}").unwrap();

        RunArgs {
            target: TargetArgs {
                dir: Some(dir.path().join("proposals")),
                legacy_digits: false,
                config: Some(config),
            },
            dry_run,
        }
    }

    #[test]
    fn run_renames_and_reports() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("proposals")).unwrap();
        fs::write(tmp.path().join("proposals/My Idea.md"), "").unwrap();

        let (output, exit_code) = run(args_for(&tmp, false), &GlobalArgs {}).unwrap();

        assert_eq!(exit_code, 0);
        assert_eq!(output.command, "run");
        assert_eq!(output.result.summary.renamed, 1);
        assert!(tmp.path().join("proposals/0001-my-idea.md").exists());
    }

    #[test]
    fn dry_run_hints_at_apply() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("proposals")).unwrap();
        fs::write(tmp.path().join("proposals/My Idea.md"), "").unwrap();

        let (output, _) = run(args_for(&tmp, true), &GlobalArgs {}).unwrap();

        assert_eq!(output.command, "run.dry_run");
        assert_eq!(output.hints.len(), 1);
        assert!(tmp.path().join("proposals/My Idea.md").exists());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = run(args_for(&tmp, false), &GlobalArgs {}).unwrap_err();
        assert_eq!(err.code.as_str(), "directory.not_found");
    }
}
