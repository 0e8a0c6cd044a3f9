//! Script task bundling and dependency install.
//!
//! Script-runtime tasks ship as a single bundled entry script plus their
//! production runtime dependency. Both steps shell out to external tools
//! with explicit working directories; a non-zero exit is fatal for the
//! whole packaging run and carries the captured output.

use std::path::Path;

use crate::error::{CommandFailedDetails, Error, Result};
use crate::layout::Layout;
use crate::log_status;
use crate::toolchain::Toolchain;
use crate::utils::command;

/// Resolve the entry script filename for a task.
///
/// Prefers `<name>.js`; falls back to `<name>.runner.js`, the filename used
/// by generated runners that have not been converted to plain entry scripts
/// yet. The fallback is returned without an existence check, matching the
/// fixed priority order: if neither file exists the bundler reports it.
pub fn resolve_entry_script(build_dir: &Path, task_name: &str) -> String {
    let plain = format!("{}.js", task_name);
    if build_dir.join(&plain).is_file() {
        plain
    } else {
        format!("{}.runner.js", task_name)
    }
}

/// Bundler argument list for one task.
///
/// Pure construction so the invocation shape is unit-testable.
pub fn bundle_args(layout: &Layout, task_name: &str, entry: &str) -> Vec<String> {
    vec![
        "--config".to_string(),
        layout.bundler_config().to_string_lossy().to_string(),
        entry.to_string(),
        "--output-path".to_string(),
        layout.task_package_dir(task_name).to_string_lossy().to_string(),
        "--output-filename".to_string(),
        format!("{}.js", task_name),
    ]
}

/// Bundle a task's entry script into its package directory.
pub fn bundle_task(
    layout: &Layout,
    toolchain: &Toolchain,
    task_name: &str,
    entry: &str,
) -> Result<()> {
    let args = bundle_args(layout, task_name, entry);
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let display = command::display_command(&toolchain.bundler, &arg_refs);
    log_status!("task", "Bundling {} with: {}", task_name, display);

    let capture = command::capture_in(
        &layout.task_build_dir(task_name),
        &toolchain.bundler,
        &arg_refs,
        "run bundler",
    )?;

    if !capture.success {
        return Err(Error::bundle_failed(CommandFailedDetails {
            command: display,
            exit_code: capture.exit_code,
            stdout: capture.stdout,
            stderr: capture.stderr,
            task: Some(task_name.to_string()),
        }));
    }

    Ok(())
}

/// Install the runtime dependency into a task's package directory,
/// production scope only.
pub fn install_runtime_dependency(
    layout: &Layout,
    toolchain: &Toolchain,
    task_name: &str,
) -> Result<()> {
    let args = [
        "install",
        toolchain.runtime_dependency.as_str(),
        "--only=production",
    ];
    let display = command::display_command(&toolchain.installer, &args);
    log_status!("task", "Installing runtime dependency for {}", task_name);

    let capture = command::capture_in(
        &layout.task_package_dir(task_name),
        &toolchain.installer,
        &args,
        "run installer",
    )?;

    if !capture.success {
        return Err(Error::install_failed(CommandFailedDetails {
            command: display,
            exit_code: capture.exit_code,
            stdout: capture.stdout,
            stderr: capture.stderr,
            task: Some(task_name.to_string()),
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn plain_entry_wins_over_runner() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("MyTask.js"), "").unwrap();
        fs::write(dir.path().join("MyTask.runner.js"), "").unwrap();

        assert_eq!(resolve_entry_script(dir.path(), "MyTask"), "MyTask.js");
    }

    #[test]
    fn runner_entry_used_when_plain_missing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("MyTask.runner.js"), "").unwrap();

        assert_eq!(
            resolve_entry_script(dir.path(), "MyTask"),
            "MyTask.runner.js"
        );
    }

    #[test]
    fn fallback_is_returned_even_when_absent() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            resolve_entry_script(dir.path(), "MyTask"),
            "MyTask.runner.js"
        );
    }

    #[test]
    fn bundle_args_shape() {
        let layout = Layout::new(std::path::Path::new("/repo"), None);
        let args = bundle_args(&layout, "MyTask", "MyTask.js");

        assert_eq!(
            args,
            vec![
                "--config",
                "/repo/webpack.config.js",
                "MyTask.js",
                "--output-path",
                "/repo/_package/tasks/MyTask",
                "--output-filename",
                "MyTask.js",
            ]
        );
    }

    #[test]
    fn bundler_failure_carries_task_and_exit_code() {
        let dir = TempDir::new().unwrap();
        let build_dir = dir.path().join("_build").join("tasks").join("MyTask");
        fs::create_dir_all(&build_dir).unwrap();
        let layout = Layout::new(dir.path(), None);
        let toolchain = Toolchain {
            bundler: "false".to_string(),
            ..Toolchain::default()
        };

        let err = bundle_task(&layout, &toolchain, "MyTask", "MyTask.js").unwrap_err();
        assert_eq!(err.code.as_str(), "bundle.failed");
        assert_eq!(err.details["task"], "MyTask");
    }

    #[test]
    fn install_failure_is_install_error() {
        let dir = TempDir::new().unwrap();
        let package_dir = dir.path().join("_package").join("tasks").join("MyTask");
        fs::create_dir_all(&package_dir).unwrap();
        let layout = Layout::new(dir.path(), None);
        let toolchain = Toolchain {
            installer: "false".to_string(),
            ..Toolchain::default()
        };

        let err = install_runtime_dependency(&layout, &toolchain, "MyTask").unwrap_err();
        assert_eq!(err.code.as_str(), "install.failed");
    }
}
