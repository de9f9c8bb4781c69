use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use renumber::config::{self, Overrides, RenumberConfig, Settings};

use super::CmdResult;

#[derive(Args, Default, Debug, Clone)]
pub struct ConfigArgs {
    /// Config file (default: ./renumber.json when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub command: &'static str,
    /// "file" or "builtin"
    pub source: &'static str,
    pub file: RenumberConfig,
    pub effective: Settings,
}

pub fn run(args: ConfigArgs, _global: &super::GlobalArgs) -> CmdResult<ConfigOutput> {
    let loaded = config::load(args.config.as_deref())?;
    let effective = loaded.resolve(&Overrides::default())?;

    Ok((
        ConfigOutput {
            command: "config.show",
            source: if loaded.source.is_some() {
                "file"
            } else {
                "builtin"
            },
            file: loaded.config,
            effective,
        },
        0,
    ))
}
