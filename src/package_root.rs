use anyhow::{Context, Result};
use std::{
    env::current_exe,
    fs::canonicalize,
    path::{Path, PathBuf},
};

/// Returns the directory above the one holding the current executable.
pub fn package_root() -> Result<PathBuf> {
    let exe = current_exe().context("failed to get current executable")?;
    package_root_from_exe(&exe)
}

/// Returns the directory above the one holding `exe`, after resolving symlinks.
pub fn package_root_from_exe(exe: &Path) -> Result<PathBuf> {
    let exe = canonicalize(exe).with_context(|| format!("failed to resolve `{}`", exe.display()))?;
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .with_context(|| format!("`{}` has no package root", exe.display()))
}
