//! Extension archiving.
//!
//! One invocation of the external packaging CLI against the assembled
//! package root. The publisher flag is appended only when an override was
//! supplied on the command line.

use serde::Serialize;

use crate::error::{CommandFailedDetails, Error, Result};
use crate::layout::Layout;
use crate::log_status;
use crate::toolchain::Toolchain;
use crate::utils::command;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveOutput {
    pub command: String,
}

/// Packaging CLI argument list.
///
/// Pure construction so the publisher-flag behavior is unit-testable.
pub fn archive_args(layout: &Layout, publisher: Option<&str>) -> Vec<String> {
    let mut args = vec![
        "extension".to_string(),
        "create".to_string(),
        "--root".to_string(),
        layout.package_root.to_string_lossy().to_string(),
        "--output-path".to_string(),
        layout.package_root.to_string_lossy().to_string(),
        "--manifests".to_string(),
        layout.staged_manifest().to_string_lossy().to_string(),
    ];

    if let Some(publisher) = publisher {
        args.push("--publisher".to_string());
        args.push(publisher.to_string());
    }

    args
}

/// Produce the deployable archive from the package root.
pub fn create_archive(
    layout: &Layout,
    toolchain: &Toolchain,
    publisher: Option<&str>,
) -> Result<ArchiveOutput> {
    let args = archive_args(layout, publisher);
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let display = command::display_command(&toolchain.packaging_cli, &arg_refs);
    log_status!("archive", "Packaging with: {}", display);

    let capture = command::capture_in(
        &layout.package_root,
        &toolchain.packaging_cli,
        &arg_refs,
        "run packaging CLI",
    )?;

    if !capture.success {
        return Err(Error::archive_failed(CommandFailedDetails {
            command: display,
            exit_code: capture.exit_code,
            stdout: capture.stdout,
            stderr: capture.stderr,
            task: None,
        }));
    }

    log_status!("archive", "Packaging successful");
    Ok(ArchiveOutput { command: display })
}
