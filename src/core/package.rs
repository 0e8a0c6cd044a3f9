//! Packaging pipeline.
//!
//! Strict linear sequence: stage assets, stamp the commit, package each
//! task, archive the package root. Each stage returns `Result`; the first
//! error aborts the remainder. Only the commit stamp is allowed to fail.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::archive::{self, ArchiveOutput};
use crate::bundle;
use crate::commit;
use crate::descriptor::TaskDescriptor;
use crate::error::Result;
use crate::layout::Layout;
use crate::log_status;
use crate::stage;
use crate::toolchain::Toolchain;
use crate::utils::io;

/// Directory names excluded from task processing: shared code consumed at
/// build time and OS metadata droppings.
const IGNORED_NAMES: &[&str] = &["Common", ".DS_Store"];

/// Metadata files always copied for script tasks. `Strings` is a directory
/// of localized resources; the copy handles both shapes.
const TASK_RESOURCE_FILES: &[&str] =
    &["task.json", "task.loc.json", "package.json", "icon.png", "Strings"];

#[derive(Debug, Clone)]
pub struct PackageConfig {
    pub repo_root: PathBuf,
    pub package_root: Option<PathBuf>,
    pub publisher: Option<String>,
    pub toolchain: Toolchain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Copied verbatim from the build output.
    Opaque,
    /// Bundled entry script plus production runtime dependency.
    Script,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOutcome {
    pub name: String,
    pub kind: TaskKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageOutput {
    pub command: String,
    pub package_root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    pub tasks: Vec<TaskOutcome>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    pub archive: ArchiveOutput,
    pub duration_ms: u64,
}

/// Run the full packaging pipeline.
pub fn run(config: &PackageConfig) -> Result<PackageOutput> {
    let started = Instant::now();
    let layout = Layout::new(&config.repo_root, config.package_root.as_deref());

    stage::stage_assets(&layout)?;
    let commit = commit::stamp_commit(&layout, &config.toolchain)?;

    let mut tasks = Vec::new();
    let mut skipped = Vec::new();

    // Task names come from the source tree; build outputs are read per name.
    // Sorted so packaging order does not depend on directory enumeration.
    let names = io::sorted_dir_names(&layout.source_tasks, "list source tasks")?;
    for name in names {
        log_status!("task", "Processing task {}", name);

        if IGNORED_NAMES.contains(&name.as_str()) {
            log_status!("task", "Skipping {}", name);
            skipped.push(name);
            continue;
        }

        tasks.push(package_task(&layout, &config.toolchain, &name)?);
    }

    let archive = archive::create_archive(&layout, &config.toolchain, config.publisher.as_deref())?;

    Ok(PackageOutput {
        command: "package".to_string(),
        package_root: layout.package_root.to_string_lossy().to_string(),
        commit,
        tasks,
        skipped,
        archive,
        duration_ms: started.elapsed().as_millis() as u64,
    })
}

/// Package a single task from its build output.
fn package_task(layout: &Layout, toolchain: &Toolchain, name: &str) -> Result<TaskOutcome> {
    let build_dir = layout.task_build_dir(name);
    let package_dir = layout.task_package_dir(name);
    io::ensure_dir(&package_dir, "create task package dir")?;

    let descriptor = TaskDescriptor::load(name, &build_dir)?;

    if !descriptor.has_script_runtime() {
        log_status!("task", "Copying opaque task {}", name);
        io::copy_recursive(&build_dir, &package_dir, "copy opaque task")?;
        return Ok(TaskOutcome {
            name: name.to_string(),
            kind: TaskKind::Opaque,
            entry: None,
        });
    }

    for resource in TASK_RESOURCE_FILES {
        io::copy_recursive(
            &build_dir.join(resource),
            &package_dir.join(resource),
            "copy task resource",
        )?;
    }

    let entry = bundle::resolve_entry_script(&build_dir, name);
    bundle::bundle_task(layout, toolchain, name, &entry)?;
    bundle::install_runtime_dependency(layout, toolchain, name)?;

    Ok(TaskOutcome {
        name: name.to_string(),
        kind: TaskKind::Script,
        entry: Some(entry),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_names_cover_shared_code_and_os_metadata() {
        assert!(IGNORED_NAMES.contains(&"Common"));
        assert!(IGNORED_NAMES.contains(&".DS_Store"));
    }

    #[test]
    fn resource_list_matches_platform_contract() {
        assert_eq!(
            TASK_RESOURCE_FILES,
            &["task.json", "task.loc.json", "package.json", "icon.png", "Strings"]
        );
    }
}
