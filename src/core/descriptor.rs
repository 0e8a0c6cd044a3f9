//! Task descriptor loading.
//!
//! Each built task carries a `task.json` describing it to the hosting
//! platform. The packager only inspects the execution map; everything else
//! is opaque metadata passed through untouched.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::utils::io;

/// Descriptor filename inside a task's build output.
pub const DESCRIPTOR_FILE: &str = "task.json";

/// Execution-map key marking a task as script-runtime.
pub const SCRIPT_RUNTIME_KEY: &str = "Node";

#[derive(Debug, Clone, Deserialize)]
pub struct TaskDescriptor {
    /// Execution map keyed by runtime name.
    #[serde(default)]
    pub execution: Map<String, Value>,

    /// Remaining descriptor metadata, carried but not interpreted.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TaskDescriptor {
    /// Load and parse a task's descriptor from its build output directory.
    pub fn load(task_name: &str, build_dir: &Path) -> Result<Self> {
        let path = build_dir.join(DESCRIPTOR_FILE);
        let content = io::read_file(&path, "read task descriptor").map_err(|e| {
            Error::descriptor_invalid(task_name, path.display().to_string(), e.message)
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::descriptor_invalid(task_name, path.display().to_string(), e.to_string())
        })
    }

    /// Whether the execution map declares the script runtime.
    ///
    /// Tasks without it are opaque: their build output is copied verbatim,
    /// never bundled.
    pub fn has_script_runtime(&self) -> bool {
        self.execution.contains_key(SCRIPT_RUNTIME_KEY)
    }
}
