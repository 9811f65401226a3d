use clap::Args;
use serde::Serialize;

use gemsmith::validate::validate_identifier;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct CheckArgs {
    /// Identifier to validate as a component name or namespace
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutput {
    pub command: &'static str,
    pub name: String,
    pub valid: bool,
}

pub fn run(args: CheckArgs, _global: &GlobalArgs) -> CmdResult<CheckOutput> {
    validate_identifier(&args.name, "name")?;

    Ok((
        CheckOutput {
            command: "check",
            name: args.name,
            valid: true,
        },
        0,
    ))
}
