//! Directory schema for a packaging run.
//!
//! Pure path computation, no I/O. Every stage receives the same `Layout` so
//! the tree being assembled is described in exactly one place.

use std::path::{Path, PathBuf};

/// Extension manifest filename, staged from the build root into the package root.
pub const MANIFEST_FILE: &str = "vss-extension.json";

/// Bundler configuration at the repository root.
pub const BUNDLER_CONFIG: &str = "webpack.config.js";

/// Marker file holding the commit hash of the packaged revision.
pub const COMMIT_MARKER: &str = ".gitcommit";

#[derive(Debug, Clone)]
pub struct Layout {
    pub repo_root: PathBuf,
    pub build_root: PathBuf,
    pub build_tasks: PathBuf,
    pub source_tasks: PathBuf,
    pub package_root: PathBuf,
    pub package_tasks: PathBuf,
}

impl Layout {
    /// Derive the layout from a repository root.
    ///
    /// `package_root` defaults to `<repo_root>/_package` unless overridden.
    pub fn new(repo_root: &Path, package_root: Option<&Path>) -> Self {
        let repo_root = repo_root.to_path_buf();
        let build_root = repo_root.join("_build");
        let package_root = package_root
            .map(Path::to_path_buf)
            .unwrap_or_else(|| repo_root.join("_package"));

        Self {
            build_tasks: build_root.join("tasks"),
            source_tasks: repo_root.join("Tasks"),
            package_tasks: package_root.join("tasks"),
            repo_root,
            build_root,
            package_root,
        }
    }

    /// Manifest as produced by the build step.
    pub fn built_manifest(&self) -> PathBuf {
        self.build_root.join(MANIFEST_FILE)
    }

    /// Manifest staged into the package root.
    pub fn staged_manifest(&self) -> PathBuf {
        self.package_root.join(MANIFEST_FILE)
    }

    /// Bundler configuration file.
    pub fn bundler_config(&self) -> PathBuf {
        self.repo_root.join(BUNDLER_CONFIG)
    }

    /// Commit hash marker inside the package root.
    pub fn commit_marker(&self) -> PathBuf {
        self.package_root.join(COMMIT_MARKER)
    }

    /// Build output directory for a single task.
    pub fn task_build_dir(&self, task_name: &str) -> PathBuf {
        self.build_tasks.join(task_name)
    }

    /// Package directory for a single task.
    pub fn task_package_dir(&self, task_name: &str) -> PathBuf {
        self.package_tasks.join(task_name)
    }
}
