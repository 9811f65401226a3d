pub type CmdResult<T> = gemsmith::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod check;
pub mod create;
pub mod register;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (gemsmith::Result<serde_json::Value>, i32) {
    crate::tty::status("gemsmith is working...");

    match command {
        crate::Commands::Create(args) => dispatch!(args, global, create),
        crate::Commands::Register(args) => dispatch!(args, global, register),
        crate::Commands::Check(args) => dispatch!(args, global, check),
    }
}
