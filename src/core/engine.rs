//! Validation of user-supplied engine and gem directory paths.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Marker file that identifies the root of an O3DE engine checkout.
const ENGINE_MARKER: &str = "engine.json";

/// Expand `~` and resolve `value` to an existing directory.
pub fn resolve_dir(value: &str, field: &str) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(value);
    let path = PathBuf::from(expanded.as_ref());

    let path = path.canonicalize().map_err(|_| {
        Error::validation_invalid_argument(
            field,
            format!("Path does not exist: {}", path.display()),
            Some(value.to_string()),
        )
    })?;

    if !path.is_dir() {
        return Err(Error::validation_invalid_argument(
            field,
            format!("Not a directory: {}", path.display()),
            Some(value.to_string()),
        ));
    }

    Ok(path)
}

/// Resolve `value` to an O3DE engine root, checking for the marker file.
pub fn resolve_engine_root(value: &str) -> Result<PathBuf> {
    let path = resolve_dir(value, "engine_path")?;

    if !path.join(ENGINE_MARKER).is_file() {
        return Err(Error::engine_invalid_root(
            path.display().to_string(),
            format!("Not a valid O3DE engine directory: {}", path.display()),
        )
        .with_hint("engine.json file not found")
        .with_hint(
            "Make sure you're pointing to the root of an O3DE engine directory, \
             e.g. --engine-path ~/o3de",
        ));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_dir_rejects_missing_path() {
        let err = resolve_dir("/nonexistent/gemsmith-test", "project_path").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert!(err.message.contains("Path does not exist"));
    }

    #[test]
    fn resolve_dir_rejects_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("engine.json");
        fs::write(&file, "{}").unwrap();

        // Canonicalization succeeds for a plain file; the directory check rejects it
        let err = resolve_dir(&file.display().to_string(), "engine_path").unwrap_err();
        assert!(err.message.contains("Not a directory"));
    }

    #[test]
    fn engine_root_requires_marker_file() {
        let dir = TempDir::new().unwrap();
        let err = resolve_engine_root(&dir.path().display().to_string()).unwrap_err();
        assert_eq!(err.code.as_str(), "engine.invalid_root");
        assert!(err.hints.iter().any(|h| h.message.contains("engine.json")));
    }

    #[test]
    fn engine_root_accepts_marked_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("engine.json"), "{}").unwrap();

        let root = resolve_engine_root(&dir.path().display().to_string()).unwrap();
        assert!(root.join("engine.json").is_file());
    }
}
