use clap::{Parser, Subcommand};

mod commands;

use commands::{package, GlobalArgs};
use extpack::output::{map_cmd_result_to_json, print_json_result};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "extpack")]
#[command(version = VERSION)]
#[command(about = "CLI for packaging multi-task extensions into a deployable archive")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the package root and produce the extension archive
    Package(package::PackageArgs),
}

fn run_json(command: Commands, global: &GlobalArgs) -> (extpack::Result<serde_json::Value>, i32) {
    match command {
        Commands::Package(args) => map_cmd_result_to_json(package::run(args, global)),
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (json_result, exit_code) = run_json(cli.command, &global);
    print_json_result(json_result);

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
