use clap::Args;
use std::path::PathBuf;

use renumber::config::{self, Overrides, Settings};

pub type CmdResult<T> = renumber::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

/// Arguments shared by every command that targets a directory.
#[derive(Args, Default, Debug, Clone)]
pub struct TargetArgs {
    /// Directory holding the markdown files (default: ./proposals)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Keep only digits 0 and 1 in slugs, as older tooling did
    #[arg(long)]
    pub legacy_digits: bool,

    /// Config file (default: ./renumber.json when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl TargetArgs {
    /// Load config and apply these flags on top of it.
    pub fn settings(&self) -> renumber::Result<Settings> {
        if let Some(dir) = &self.dir {
            if dir.as_os_str().is_empty() {
                return Err(renumber::Error::validation_invalid_argument(
                    "dir",
                    "Directory cannot be empty",
                ));
            }
        }

        let loaded = config::load(self.config.as_deref())?;
        loaded.resolve(&Overrides {
            dir: self.dir.clone(),
            legacy_digits: self.legacy_digits,
        })
    }
}

pub mod config_cmd;
pub mod plan;
pub mod run;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (renumber::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Run(args) => dispatch!(args, global, run),
        crate::Commands::Plan(args) => dispatch!(args, global, plan),
        crate::Commands::Config(args) => dispatch!(args, global, config_cmd),
    }
}
