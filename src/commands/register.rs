use clap::Args;
use serde::Serialize;

use gemsmith::engine;
use gemsmith::lockfile::InstanceLock;
use gemsmith::log_status;
use gemsmith::patch::{self, RegisterOutput};
use gemsmith::validate::validate_identifier;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct RegisterArgs {
    /// Path to the gem directory containing the component sources
    #[arg(long)]
    pub project_path: String,

    /// Component name used when the files were generated
    #[arg(long)]
    pub component_name: String,

    /// C++ namespace the component lives in (the gem name)
    #[arg(long)]
    pub namespace: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCmdOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub result: RegisterOutput,
    pub log: Vec<String>,
}

pub fn run(args: RegisterArgs, _global: &GlobalArgs) -> CmdResult<RegisterCmdOutput> {
    validate_identifier(&args.component_name, "component_name")?;
    validate_identifier(&args.namespace, "namespace")?;
    let project_dir = engine::resolve_dir(&args.project_path, "project_path")?;

    let _lock = InstanceLock::acquire_default()?;

    let mut log_lines = Vec::new();
    let mut log = |line: &str| {
        log_status!("register", "{}", line);
        log_lines.push(line.to_string());
    };

    let result = patch::register_component(
        &project_dir,
        &args.component_name,
        &args.namespace,
        &mut log,
    )?;

    Ok((
        RegisterCmdOutput {
            command: "register",
            result,
            log: log_lines,
        },
        0,
    ))
}
