// src/fsops.rs
//
// Filesystem primitives behind the upload/delete/rename actions.
// All of these are synchronous; callers surface failures to the user.

use std::{
    error::Error,
    fs, io,
    path::{Path, PathBuf},
};

use crate::config::consts::GAME_EXT;

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Copy `src` into `dst_dir` under its own file name, overwriting any
/// existing file. Returns the destination path.
pub fn copy_file_into(src: &Path, dst_dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let name = src
        .file_name()
        .ok_or_else(|| format!("Not a file: {}", src.display()))?;
    ensure_directory(dst_dir)?;
    let dst = dst_dir.join(name);
    fs::copy(src, &dst)?;
    Ok(dst)
}

/// Recursively copy a directory tree (or single file). An existing
/// destination is merged into, file conflicts overwritten.
pub fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<()> {
    if src.is_file() {
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, dst)?;
        return Ok(());
    }
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if file_type.is_dir() {
            copy_dir_all(&from, &to)?;
        } else if file_type.is_file() {
            fs::copy(&from, &to)?;
        } else {
            let _ = fs::copy(&from, &to);
        }
    }
    Ok(())
}

pub fn delete_entry(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

/// Rename rule: bare filename, same directory, must keep the game
/// extension. Returns a user-facing message on violation.
pub fn validate_new_name(new_name: &str) -> Result<(), String> {
    let trimmed = new_name.trim();
    if trimmed.is_empty() {
        return Err(s!("Filename must not be empty"));
    }
    if trimmed.contains(['/', '\\']) {
        return Err(s!("Filename must not contain path separators"));
    }
    let keeps_ext = Path::new(trimmed)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(GAME_EXT))
        .unwrap_or(false);
    if !keeps_ext {
        return Err(join!("Filename must end with .", GAME_EXT));
    }
    Ok(())
}

/// Rename an entry in place (same parent directory).
pub fn rename_entry(path: &Path, new_name: &str) -> Result<PathBuf, Box<dyn Error>> {
    validate_new_name(new_name)?;
    let parent = path
        .parent()
        .ok_or_else(|| format!("No parent directory for {}", path.display()))?;
    let new_path = parent.join(new_name.trim());
    fs::rename(path, &new_path)?;
    Ok(new_path)
}
