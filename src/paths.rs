use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::config;

pub fn self_path() -> Result<PathBuf> {
    Ok(std::env::current_exe().context("current_exe")?)
}

pub fn root_dir() -> Result<PathBuf> {
    if let Ok(dev_root) = std::env::var("URDF_INSTALLER_ROOT") {
        return Ok(PathBuf::from(dev_root));
    }
    let exe = self_path()?;
    Ok(exe.parent().context("exe has no parent")?.to_path_buf())
}

pub fn default_source_dir() -> Result<PathBuf> {
    if config::NAME.trim().is_empty() {
        bail!("payload name is empty (config.toml name)");
    }
    Ok(root_dir()?.join(config::NAME))
}

pub fn default_target_base() -> Result<PathBuf> {
    Ok(scripts_dir(&platform_data_dir()?))
}

pub fn scripts_dir(data_dir: &Path) -> PathBuf {
    data_dir
        .join("Autodesk")
        .join("Autodesk Fusion 360")
        .join("API")
        .join("Scripts")
}

pub fn target_dir(target_base: &Path) -> PathBuf {
    target_base.join(config::NAME)
}

#[cfg(windows)]
fn platform_data_dir() -> Result<PathBuf> {
    let appdata = std::env::var("APPDATA").context("APPDATA not set")?;
    Ok(PathBuf::from(appdata))
}

#[cfg(target_os = "macos")]
fn platform_data_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME not set")?;
    Ok(PathBuf::from(home)
        .join("Library")
        .join("Application Support"))
}

// Fusion 360 does not officially support Linux; mirror the XDG data dir as a
// fallback so the tool still works against a hand-created Scripts directory.
#[cfg(all(unix, not(target_os = "macos")))]
fn platform_data_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME not set")?;
    Ok(PathBuf::from(home).join(".local").join("share"))
}
