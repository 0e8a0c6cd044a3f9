//! Asset staging.
//!
//! Recreates the package root and copies the static extension assets into
//! it: license, readme, manifest, and manifest images. Any copy failure is
//! fatal and propagates to the driver.

use crate::error::Result;
use crate::layout::Layout;
use crate::log_status;
use crate::utils::io;

/// Static files copied from the repository root into the package root.
const ROOT_ASSETS: &[&str] = &["LICENSE", "README.md"];

/// Images directory referenced by the manifest.
const IMAGES_DIR: &str = "images";

/// Recreate the package root and stage all static assets into it.
pub fn stage_assets(layout: &Layout) -> Result<()> {
    io::reset_dir(&layout.package_root, "create package root")?;

    for asset in ROOT_ASSETS {
        log_status!("stage", "Staging {}", asset);
        io::copy_file(
            &layout.repo_root.join(asset),
            &layout.package_root.join(asset),
            "stage asset",
        )?;
    }

    log_status!("stage", "Staging extension manifest");
    io::copy_file(
        &layout.built_manifest(),
        &layout.staged_manifest(),
        "stage manifest",
    )?;

    log_status!("stage", "Staging manifest images");
    io::copy_recursive(
        &layout.repo_root.join(IMAGES_DIR),
        &layout.package_root.join(IMAGES_DIR),
        "stage images",
    )?;

    io::ensure_dir(&layout.package_tasks, "create package tasks dir")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn fixture_repo(root: &Path) {
        fs::write(root.join("LICENSE"), "MIT").unwrap();
        fs::write(root.join("README.md"), "# extension").unwrap();
        fs::create_dir_all(root.join("_build")).unwrap();
        fs::write(root.join("_build").join("vss-extension.json"), "{}").unwrap();
        fs::create_dir_all(root.join("images")).unwrap();
        fs::write(root.join("images").join("icon.png"), "png").unwrap();
    }

    #[test]
    fn stages_all_assets_into_package_root() {
        let dir = TempDir::new().unwrap();
        fixture_repo(dir.path());
        let layout = Layout::new(dir.path(), None);

        stage_assets(&layout).unwrap();

        assert!(layout.package_root.join("LICENSE").is_file());
        assert!(layout.package_root.join("README.md").is_file());
        assert!(layout.staged_manifest().is_file());
        assert!(layout.package_root.join("images").join("icon.png").is_file());
        assert!(layout.package_tasks.is_dir());
    }

    #[test]
    fn previous_run_contents_are_removed() {
        let dir = TempDir::new().unwrap();
        fixture_repo(dir.path());
        let layout = Layout::new(dir.path(), None);

        fs::create_dir_all(&layout.package_root).unwrap();
        fs::write(layout.package_root.join("stale.vsix"), "old archive").unwrap();

        stage_assets(&layout).unwrap();
        assert!(!layout.package_root.join("stale.vsix").exists());
    }

    #[test]
    fn missing_license_is_fatal() {
        let dir = TempDir::new().unwrap();
        fixture_repo(dir.path());
        fs::remove_file(dir.path().join("LICENSE")).unwrap();
        let layout = Layout::new(dir.path(), None);

        let err = stage_assets(&layout).unwrap_err();
        assert_eq!(err.code.as_str(), "asset.not_found");
    }

    #[test]
    fn missing_manifest_is_fatal() {
        let dir = TempDir::new().unwrap();
        fixture_repo(dir.path());
        fs::remove_file(dir.path().join("_build").join("vss-extension.json")).unwrap();
        let layout = Layout::new(dir.path(), None);

        assert!(stage_assets(&layout).is_err());
    }
}
