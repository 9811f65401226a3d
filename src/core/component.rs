//! Component creation orchestration: validate, generate, register.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::{generator, patch, validate};

/// Which template flavor to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Default,
    Editor,
}

impl ComponentType {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "Default" => Ok(ComponentType::Default),
            "Editor" => Ok(ComponentType::Editor),
            _ => Err(Error::validation_invalid_argument(
                "component_type",
                format!("Unknown component type '{}'. Use: Default, Editor", s),
                Some(s.to_string()),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Default => "Default",
            ComponentType::Editor => "Editor",
        }
    }
}

/// Everything one creation run needs: fully determines a single
/// generation-plus-registration operation.
#[derive(Debug, Clone)]
pub struct ComponentTarget {
    pub name: String,
    pub namespace: String,
    pub component_type: ComponentType,
    pub project_dir: PathBuf,
    pub add_to_project: bool,
    pub default_license: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOutput {
    pub component: String,
    pub namespace: String,
    pub component_type: &'static str,
    pub project_dir: String,
    pub registered: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Create a component under `target.project_dir` and, when requested, wire
/// it into the gem's module file and cmake file list.
///
/// Validation and generator failures abort before any artifact is touched.
/// A registration failure after successful generation degrades to a warning,
/// matching the generated-but-unregistered state the user can fix by hand
/// (or by re-running `register`).
pub fn create(
    engine_path: &Path,
    target: &ComponentTarget,
    log: &mut dyn FnMut(&str),
) -> Result<CreateOutput> {
    validate::validate_identifier(&target.name, "component_name")?;
    validate::validate_identifier(&target.namespace, "namespace")?;

    if target.component_type == ComponentType::Editor {
        return Err(Error::validation_invalid_argument(
            "component_type",
            "Editor components are not implemented yet. Please use the 'Default' component type",
            Some("Editor".to_string()),
        ));
    }

    generator::create_from_template(
        engine_path,
        &target.project_dir,
        &target.name,
        &target.namespace,
        target.default_license,
        log,
    )?;

    let mut registered = false;
    let mut warnings = Vec::new();

    if target.add_to_project {
        log("Adding component to the project...");
        match patch::register_component(&target.project_dir, &target.name, &target.namespace, log) {
            Ok(outcome) => {
                registered = true;
                warnings = outcome.warnings;
                log("Successfully added component. The project may need to be rebuilt.");
            }
            Err(e) => {
                let warning = format!(
                    "Warning: failed to automatically add the component to the project: {}",
                    e
                );
                log(&warning);
                warnings.push(warning);
            }
        }
    }

    Ok(CreateOutput {
        component: target.name.clone(),
        namespace: target.namespace.clone(),
        component_type: target.component_type.as_str(),
        project_dir: target.project_dir.display().to_string(),
        registered,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn target(name: &str, component_type: ComponentType) -> ComponentTarget {
        ComponentTarget {
            name: name.to_string(),
            namespace: "MyGem".to_string(),
            component_type,
            project_dir: PathBuf::from("/tmp/gem"),
            add_to_project: false,
            default_license: false,
        }
    }

    #[test]
    fn component_type_round_trips() {
        assert_eq!(
            ComponentType::from_str("Default").unwrap(),
            ComponentType::Default
        );
        assert_eq!(
            ComponentType::from_str("Editor").unwrap(),
            ComponentType::Editor
        );
        assert!(ComponentType::from_str("default").is_err());
    }

    #[test]
    fn create_rejects_invalid_name_before_generation() {
        let dir = TempDir::new().unwrap();
        let err = create(dir.path(), &target("class", ComponentType::Default), &mut |_| {})
            .unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert!(err.message.contains("C++ keyword"));
    }

    #[test]
    fn create_rejects_editor_components() {
        let dir = TempDir::new().unwrap();
        let err = create(dir.path(), &target("Image", ComponentType::Editor), &mut |_| {})
            .unwrap_err();
        assert!(err.message.contains("not implemented"));
    }
}
