use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;

use commands::{config_cmd, plan, run};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "renumber")]
#[command(version = VERSION)]
#[command(about = "Renumber proposal markdown files as NNNN-slug.md in sorted order")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments for the default `run` command
    #[command(flatten)]
    run: run::RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename markdown files to their canonical numbered names (default)
    Run(run::RunArgs),
    /// Show the renames `run` would perform
    Plan(plan::PlanArgs),
    /// Show the effective configuration
    Config(config_cmd::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let command = cli.command.unwrap_or(Commands::Run(cli.run));
    let (json_result, exit_code) = commands::run_json(command, &global);

    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("renumber: {}", err);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
