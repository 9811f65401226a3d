//! Idempotent registration of a generated component into a gem's module
//! registration file and cmake file list.
//!
//! Both artifacts are hand-authored with loose conventions, so edits are
//! anchor-token surgery over flat text rather than anything parsed: the
//! module file is treated as an ordered line sequence, the file list as a
//! single blob. Presence checks before every insertion make the whole
//! operation safe to re-run.

use serde::Serialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::io;

const DESCRIPTOR_BLOCK_OPEN: &str = "m_descriptors.insert";
const DESCRIPTOR_BLOCK_CLOSE: &str = "});";
const FILES_SECTION_OPEN: &str = "set(FILES";
const DEFAULT_DESCRIPTOR_INDENT: &str = "                ";

/// Outcome of one registration pass. Structural problems inside an existing
/// artifact land in `warnings`; only a missing artifact is a hard error.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterOutput {
    pub module_file: String,
    pub file_list: String,
    pub include_inserted: bool,
    pub descriptor_inserted: bool,
    pub file_list_entries_inserted: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Ordered sequence of lines for anchor-token surgery on a source file.
///
/// Parsing strips line terminators (CRLF tolerated); rendering rejoins with
/// `\n` and a single trailing newline, so any rewrite normalizes endings.
#[derive(Debug)]
pub(crate) struct LineBuffer {
    lines: Vec<String>,
    modified: bool,
}

impl LineBuffer {
    pub(crate) fn parse(content: &str) -> Self {
        Self {
            lines: content.lines().map(String::from).collect(),
            modified: false,
        }
    }

    pub(crate) fn modified(&self) -> bool {
        self.modified
    }

    /// True if any line contains `needle` as a substring.
    pub(crate) fn any_contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Highest index among lines that begin (ignoring leading whitespace)
    /// with `prefix`.
    pub(crate) fn last_starting_with(&self, prefix: &str) -> Option<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.trim_start().starts_with(prefix))
            .map(|(i, _)| i)
            .last()
    }

    /// First index at or after `start` whose line contains `needle`.
    pub(crate) fn first_containing(&self, start: usize, needle: &str) -> Option<usize> {
        self.lines
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, line)| line.contains(needle))
            .map(|(i, _)| i)
    }

    /// Leading whitespace of the first line in `range` containing `needle`.
    pub(crate) fn indent_of_match(
        &self,
        range: std::ops::Range<usize>,
        needle: &str,
    ) -> Option<String> {
        self.lines[range]
            .iter()
            .find(|line| line.contains(needle))
            .map(|line| {
                line.chars()
                    .take_while(|c| c.is_whitespace())
                    .collect::<String>()
            })
    }

    pub(crate) fn insert(&mut self, index: usize, line: String) {
        self.lines.insert(index, line);
        self.modified = true;
    }

    /// Append a trailing comma to the line at `index` unless it already ends
    /// with one after trimming trailing whitespace.
    pub(crate) fn ensure_trailing_comma(&mut self, index: usize) {
        let line = &self.lines[index];
        if !line.trim_end().ends_with(',') {
            self.lines[index] = format!("{},", line.trim_end());
            self.modified = true;
        }
    }

    pub(crate) fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Wire a generated component into the gem at `project_dir`.
///
/// Patches `Source/<namespace>Module.cpp` (include directive + descriptor
/// registration) and `<namespace lowercased>_files.cmake` (source/header
/// entries). Re-running with the same arguments is a no-op. Fails only when
/// one of the two artifacts is absent entirely; a present-but-unexpected
/// artifact degrades to skipped sub-edits reported through `log` and
/// `RegisterOutput::warnings`.
pub fn register_component(
    project_dir: &Path,
    component_name: &str,
    namespace: &str,
    log: &mut dyn FnMut(&str),
) -> Result<RegisterOutput> {
    let module_path = project_dir
        .join("Source")
        .join(format!("{}Module.cpp", namespace));
    let file_list_path = project_dir.join(format!("{}_files.cmake", namespace.to_lowercase()));

    // Both artifacts must exist before anything is written, so a wrong
    // directory never leaves a half-registered component behind.
    if !module_path.is_file() {
        return Err(Error::module_file_missing(module_path.display().to_string()));
    }
    if !file_list_path.is_file() {
        return Err(Error::file_list_missing(
            file_list_path.display().to_string(),
        ));
    }

    let mut warnings = Vec::new();

    let module_content = io::read_file(&module_path, "read module file")?;
    let mut module = LineBuffer::parse(&module_content);
    let include_inserted = insert_include(&mut module, component_name, &mut warnings, log);
    let descriptor_inserted = insert_descriptor(&mut module, component_name, &mut warnings, log);
    if module.modified() {
        io::write_file(&module_path, &module.render(), "write module file")?;
        log(&format!("Updated {}", module_path.display()));
    }

    let file_list_content = io::read_file(&file_list_path, "read file list")?;
    let mut file_list = file_list_content.clone();
    let entries_inserted = insert_file_list_entries(&mut file_list, component_name, log);
    if file_list != file_list_content {
        io::write_file(&file_list_path, &file_list, "write file list")?;
        log(&format!("Updated {}", file_list_path.display()));
    }

    for warning in &warnings {
        log(warning);
    }

    Ok(RegisterOutput {
        module_file: module_path.display().to_string(),
        file_list: file_list_path.display().to_string(),
        include_inserted,
        descriptor_inserted,
        file_list_entries_inserted: entries_inserted,
        warnings,
    })
}

/// Insert `#include "<Name>Component.h"` after the last existing include.
fn insert_include(
    module: &mut LineBuffer,
    component_name: &str,
    warnings: &mut Vec<String>,
    log: &mut dyn FnMut(&str),
) -> bool {
    let include_line = format!("#include \"{}Component.h\"", component_name);

    if module.any_contains(&include_line) {
        log(&format!("Include already present: {}", include_line));
        return false;
    }

    match module.last_starting_with("#include") {
        Some(last) => {
            module.insert(last + 1, include_line);
            true
        }
        None => {
            warnings.push(
                "Warning: module file has no #include lines; skipped include insertion".to_string(),
            );
            false
        }
    }
}

/// Insert `<Name>Component::CreateDescriptor(),` before the `});` closing
/// the `m_descriptors.insert` block, copying sibling indentation.
fn insert_descriptor(
    module: &mut LineBuffer,
    component_name: &str,
    warnings: &mut Vec<String>,
    log: &mut dyn FnMut(&str),
) -> bool {
    let descriptor_expr = format!("{}Component::CreateDescriptor()", component_name);

    if module.any_contains(&descriptor_expr) {
        log(&format!("Descriptor already registered: {}", descriptor_expr));
        return false;
    }

    let Some(open) = module.first_containing(0, DESCRIPTOR_BLOCK_OPEN) else {
        warnings.push(format!(
            "Warning: module file has no '{}' block; skipped descriptor insertion",
            DESCRIPTOR_BLOCK_OPEN
        ));
        return false;
    };
    let Some(close) = module.first_containing(open, DESCRIPTOR_BLOCK_CLOSE) else {
        warnings.push(format!(
            "Warning: descriptor block is never closed with '{}'; skipped descriptor insertion",
            DESCRIPTOR_BLOCK_CLOSE
        ));
        return false;
    };

    let indent = module
        .indent_of_match(open..close, "CreateDescriptor()")
        .unwrap_or_else(|| DEFAULT_DESCRIPTOR_INDENT.to_string());

    // The line before the closer needs a trailing comma before another entry
    // can follow it. An empty block (opener immediately followed by the
    // closer) has no such line.
    if close > open + 1 {
        module.ensure_trailing_comma(close - 1);
    }
    module.insert(close, format!("{}{},", indent, descriptor_expr));
    true
}

/// Insert `Source/<Name>Component.{cpp,h}` entries before the `)` closing
/// the `set(FILES` section. Operates on the raw blob; the duplicate check
/// matches the literal inserted line including its 4-space indent, so a file
/// list indented differently will pick up a duplicate entry.
fn insert_file_list_entries(
    content: &mut String,
    component_name: &str,
    log: &mut dyn FnMut(&str),
) -> Vec<String> {
    let entries = [
        format!("Source/{}Component.cpp", component_name),
        format!("Source/{}Component.h", component_name),
    ];

    let mut inserted = Vec::new();
    for entry in entries {
        let line = format!("    {}\n", entry);
        if content.contains(&line) {
            log(&format!("File list already contains {}", entry));
            continue;
        }

        let close = content
            .find(FILES_SECTION_OPEN)
            .and_then(|start| content[start..].find(')').map(|offset| start + offset));
        match close {
            Some(close) => {
                content.insert_str(close, &line);
                log(&format!("Added {} to file list", entry));
                inserted.push(entry);
            }
            None => {
                log(&format!(
                    "File list has no '{}' section with a closing ')'; {} not added",
                    FILES_SECTION_OPEN, entry
                ));
            }
        }
    }
    inserted
}
