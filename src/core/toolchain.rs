//! External collaborator commands.
//!
//! The packager never reimplements these tools; it shells out to them. The
//! program names live in one struct so tests can substitute stub commands.

#[derive(Debug, Clone)]
pub struct Toolchain {
    /// Module bundler invoked per script task.
    pub bundler: String,
    /// Dependency installer invoked per script task.
    pub installer: String,
    /// Packaging CLI producing the final archive.
    pub packaging_cli: String,
    /// Version control command used for the commit stamp.
    pub git: String,
    /// Runtime dependency installed into each script task package.
    pub runtime_dependency: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            bundler: "webpack".to_string(),
            installer: "npm".to_string(),
            packaging_cli: "tfx".to_string(),
            git: "git".to_string(),
            runtime_dependency: "vsts-task-lib".to_string(),
        }
    }
}
