use std::fs;
use std::path::Path;

use gemsmith::patch::register_component;
use gemsmith::validate::validate_identifier;
use tempfile::TempDir;

const MODULE_CPP: &str = "\
#include <AzCore/Memory/SystemAllocator.h>
#include \"ExistingComponent.h\"

namespace Shapes
{
    class ShapesModule
        : public AZ::Module
    {
    public:
        ShapesModule()
        {
            m_descriptors.insert(m_descriptors.end(), {
                ExistingComponent::CreateDescriptor(),
            });
        }
    };
}
";

const FILES_CMAKE: &str = "\
set(FILES
    Source/ExistingComponent.cpp
    Source/ExistingComponent.h
    Source/ShapesModule.cpp
)
";

fn shapes_gem() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("Source")).unwrap();
    fs::write(dir.path().join("Source/ShapesModule.cpp"), MODULE_CPP).unwrap();
    fs::write(dir.path().join("shapes_files.cmake"), FILES_CMAKE).unwrap();
    dir
}

fn read(dir: &Path, rel: &str) -> String {
    fs::read_to_string(dir.join(rel)).unwrap()
}

#[test]
fn full_registration_wires_both_artifacts() {
    let gem = shapes_gem();
    let mut log = Vec::new();
    let out = register_component(gem.path(), "Sphere", "Shapes", &mut |line| {
        log.push(line.to_string())
    })
    .unwrap();

    assert!(out.include_inserted);
    assert!(out.descriptor_inserted);
    assert_eq!(
        out.file_list_entries_inserted,
        vec![
            "Source/SphereComponent.cpp".to_string(),
            "Source/SphereComponent.h".to_string(),
        ]
    );
    assert!(out.warnings.is_empty());
    assert!(log.iter().any(|l| l.contains("SphereComponent.cpp")));

    let module = read(gem.path(), "Source/ShapesModule.cpp");
    assert!(module.contains("#include \"ExistingComponent.h\"\n#include \"SphereComponent.h\"\n"));
    assert!(module.contains(
        "                ExistingComponent::CreateDescriptor(),\n                SphereComponent::CreateDescriptor(),\n            });"
    ));
    assert!(module.ends_with("}\n"));

    let cmake = read(gem.path(), "shapes_files.cmake");
    assert!(cmake.contains("    Source/SphereComponent.cpp\n    Source/SphereComponent.h\n)\n"));
    assert!(cmake.contains("Source/ExistingComponent.cpp"));
}

#[test]
fn reregistration_changes_nothing() {
    let gem = shapes_gem();
    register_component(gem.path(), "Sphere", "Shapes", &mut |_| {}).unwrap();
    let module_once = read(gem.path(), "Source/ShapesModule.cpp");
    let cmake_once = read(gem.path(), "shapes_files.cmake");

    register_component(gem.path(), "Sphere", "Shapes", &mut |_| {}).unwrap();
    assert_eq!(module_once, read(gem.path(), "Source/ShapesModule.cpp"));
    assert_eq!(cmake_once, read(gem.path(), "shapes_files.cmake"));
}

#[test]
fn registering_two_components_stacks_entries() {
    let gem = shapes_gem();
    register_component(gem.path(), "Sphere", "Shapes", &mut |_| {}).unwrap();
    register_component(gem.path(), "Cube", "Shapes", &mut |_| {}).unwrap();

    let module = read(gem.path(), "Source/ShapesModule.cpp");
    assert!(module.contains(
        "                SphereComponent::CreateDescriptor(),\n                CubeComponent::CreateDescriptor(),\n            });"
    ));

    let cmake = read(gem.path(), "shapes_files.cmake");
    assert!(cmake.contains("Source/SphereComponent.cpp"));
    assert!(cmake.contains("Source/CubeComponent.h"));
}

#[test]
fn wrong_directory_reports_distinguishing_errors() {
    let empty = TempDir::new().unwrap();
    let err = register_component(empty.path(), "Sphere", "Shapes", &mut |_| {}).unwrap_err();
    assert_eq!(err.code.as_str(), "artifact.module_file_missing");
    assert!(err
        .hints
        .iter()
        .any(|h| h.message.contains("*_files.cmake")));

    let gem = shapes_gem();
    fs::remove_file(gem.path().join("shapes_files.cmake")).unwrap();
    let err = register_component(gem.path(), "Sphere", "Shapes", &mut |_| {}).unwrap_err();
    assert_eq!(err.code.as_str(), "artifact.file_list_missing");
}

#[test]
fn validator_gates_what_registration_interpolates() {
    assert!(validate_identifier("Sphere", "component_name").is_ok());
    assert!(validate_identifier("_foo", "component_name").is_ok());
    assert!(validate_identifier("_Foo", "component_name").is_err());
    assert!(validate_identifier("__foo", "component_name").is_err());
    assert!(validate_identifier("class", "component_name").is_err());
    assert!(validate_identifier("Sp here", "component_name").is_err());
    assert!(validate_identifier("", "component_name").is_err());
}
