use clap::Args;

use super::run::{self as run_cmd, RunArgs, RunOutput};
use super::{CmdResult, TargetArgs};

#[derive(Args, Default, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Same as `run --dry-run`.
pub fn run(args: PlanArgs, global: &super::GlobalArgs) -> CmdResult<RunOutput> {
    let (mut output, exit_code) = run_cmd::run(
        RunArgs {
            target: args.target,
            dry_run: true,
        },
        global,
    )?;
    output.command = "plan";
    Ok((output, exit_code))
}
