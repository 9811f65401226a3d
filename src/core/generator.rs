//! Invocation of the engine's `o3de` script to materialize a component from
//! the `DefaultComponent` template.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, GeneratorFailedDetails, Result};

#[cfg(windows)]
const O3DE_SCRIPT: &str = "o3de.bat";
#[cfg(not(windows))]
const O3DE_SCRIPT: &str = "o3de.sh";

/// Run `o3de create-from-template` to produce `<name>Component.h` and
/// `<name>Component.cpp` under `project_dir`.
///
/// A non-zero exit status is a hard failure carrying the tool's captured
/// output verbatim. On success the tool's chatter is relayed through `log`
/// with `[INFO]`/`[WARNING]` lines and bare progress counters filtered out.
pub fn create_from_template(
    engine_path: &Path,
    project_dir: &Path,
    component_name: &str,
    namespace: &str,
    keep_license_text: bool,
    log: &mut dyn FnMut(&str),
) -> Result<()> {
    let script = engine_path.join("scripts").join(O3DE_SCRIPT);

    let mut cmd = Command::new(&script);
    cmd.current_dir(engine_path)
        .arg("create-from-template")
        .arg("-dp")
        .arg(project_dir)
        .arg("-dn")
        .arg(component_name)
        .arg("-tn")
        .arg("DefaultComponent")
        .arg("-r")
        .arg("${GemName}")
        .arg(namespace);
    if keep_license_text {
        cmd.arg("--keep-license-text");
    }
    cmd.arg("--force");

    log(&format!("Creating component: {}...", component_name));

    let output = cmd.output().map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("launch {}", script.display())),
        )
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if !output.status.success() {
        return Err(Error::generator_failed(GeneratorFailedDetails {
            command: format!("{} create-from-template", script.display()),
            exit_code: output.status.code().unwrap_or(-1),
            stdout,
            stderr,
        }));
    }

    for line in stdout.lines().filter(|line| is_relevant(line)) {
        log(line);
    }
    for line in stderr.lines().filter(|line| is_relevant(line)) {
        log(line);
    }

    log(&format!("Successfully created component: {}", component_name));
    Ok(())
}

/// Drop empty lines, bare progress counters (digits and dots), and the
/// tool's own `[INFO]`/`[WARNING]` noise.
fn is_relevant(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }
    if line.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return false;
    }
    !line.contains("[INFO]") && !line.contains("[WARNING]")
}
