//! # File System Operations Module / 文件系统操作模块
//!
//! Path expansion and output-file helpers shared by the sources and reports.
//!
//! 数据源与报告共用的路径展开和输出文件工具。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Expands `~` and environment variables in a user-supplied path.
///
/// # Arguments
/// * `path` - Path as typed by the user or written in the config file
///
/// # Returns
/// The expanded path, or an error if a referenced variable is undefined
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .with_context(|| format!("Failed to expand path: {}", raw))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Writes `contents` to `path`, creating missing parent directories first.
///
/// # Arguments
/// * `path` - Destination file
/// * `contents` - Bytes to write
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = expand_path(path)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
