//! Commit stamping.
//!
//! Best-effort capture of the current revision hash into a marker file in
//! the package root. This is the only non-fatal step in the pipeline: a
//! missing or failing version-control command logs a warning and packaging
//! continues without the marker.

use crate::error::Result;
use crate::layout::Layout;
use crate::log_status;
use crate::toolchain::Toolchain;
use crate::utils::{command, io};

/// Capture the current commit hash and write it to the marker file.
///
/// Returns the hash when captured, `None` when the version-control command
/// failed or is unavailable. Only the marker write itself can fail hard.
pub fn stamp_commit(layout: &Layout, toolchain: &Toolchain) -> Result<Option<String>> {
    let hash = command::run_in_optional(
        &layout.repo_root,
        &toolchain.git,
        &["rev-parse", "HEAD"],
    );

    match hash {
        Some(hash) => {
            io::write_file(&layout.commit_marker(), &hash, "write commit marker")?;
            log_status!("commit", "Stamped revision {}", hash);
            Ok(Some(hash))
        }
        None => {
            log_status!("commit", "Warning: unable to capture commit hash, skipping marker");
            Ok(None)
        }
    }
}
