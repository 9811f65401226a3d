use clap::Parser;

mod commands;
mod output;
mod tty;

use commands::{check, create, register, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "gemsmith")]
#[command(version = VERSION)]
#[command(about = "CLI for scaffolding O3DE gem components and wiring them into a project")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Generate a new component and optionally register it in the gem
    Create(create::CreateArgs),
    /// Register already-generated component files in the gem
    Register(register::RegisterArgs),
    /// Validate a component or namespace identifier
    Check(check::CheckArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    if output::print_json_result(json_result).is_err() {
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
