use clap::Args;
use serde::Serialize;

use gemsmith::component::{self, ComponentTarget, ComponentType, CreateOutput};
use gemsmith::engine;
use gemsmith::lockfile::InstanceLock;
use gemsmith::log_status;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct CreateArgs {
    /// Path to the O3DE engine root (must contain engine.json)
    #[arg(long)]
    pub engine_path: String,

    /// Path to the gem directory that will receive the component
    #[arg(long)]
    pub project_path: String,

    /// Component name (becomes <Name>Component.h / <Name>Component.cpp)
    #[arg(long)]
    pub component_name: String,

    /// Component type: Default or Editor
    #[arg(long, default_value = "Default")]
    pub component_type: String,

    /// C++ namespace the component lives in (the gem name)
    #[arg(long)]
    pub namespace: String,

    /// Wire the generated files into the module file and cmake file list
    #[arg(long)]
    pub add_to_project: bool,

    /// Keep the default license header in generated files
    #[arg(long)]
    pub default_license: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCmdOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub result: CreateOutput,
    pub log: Vec<String>,
}

pub fn run(args: CreateArgs, _global: &GlobalArgs) -> CmdResult<CreateCmdOutput> {
    let engine_root = engine::resolve_engine_root(&args.engine_path)?;
    let project_dir = engine::resolve_dir(&args.project_path, "project_path")?;
    let component_type = ComponentType::from_str(&args.component_type)?;

    let target = ComponentTarget {
        name: args.component_name,
        namespace: args.namespace,
        component_type,
        project_dir,
        add_to_project: args.add_to_project,
        default_license: args.default_license,
    };

    let _lock = InstanceLock::acquire_default()?;

    let mut log_lines = Vec::new();
    let mut log = |line: &str| {
        log_status!("create", "{}", line);
        log_lines.push(line.to_string());
    };

    let result = component::create(&engine_root, &target, &mut log)?;

    Ok((
        CreateCmdOutput {
            command: "create",
            result,
            log: log_lines,
        },
        0,
    ))
}
