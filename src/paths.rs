// src/paths.rs
//
// Resolves the launcher's own directory and the managed games/ folder.
// Everything the app touches on disk hangs off these two paths.

use std::{
    env, io,
    path::{Path, PathBuf},
};

use crate::config::consts::{GAMES_FOLDER_NAME, MODDER_EXE};

#[derive(Clone, Debug)]
pub struct LauncherPaths {
    pub base_dir: PathBuf,
    pub games_dir: PathBuf,
}

impl LauncherPaths {
    /// Base dir = directory of the running executable; falls back to the
    /// current working directory when that can't be resolved.
    pub fn resolve() -> io::Result<Self> {
        let base = env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
            .map_or_else(env::current_dir, Ok)?;
        Self::from_base(base)
    }

    /// Build from an explicit base dir, creating games/ if missing.
    pub fn from_base(base_dir: PathBuf) -> io::Result<Self> {
        let games_dir = base_dir.join(GAMES_FOLDER_NAME);
        std::fs::create_dir_all(&games_dir)?;
        Ok(Self { base_dir, games_dir })
    }

    pub fn modder_path(&self) -> PathBuf {
        self.base_dir.join(MODDER_EXE)
    }

    /// Display form of an entry: path relative to the launcher dir.
    /// Paths outside base_dir (shouldn't happen) fall back to absolute.
    pub fn display_rel(&self, path: &Path) -> String {
        match path.strip_prefix(&self.base_dir) {
            Ok(rel) => rel.to_string_lossy().into_owned(),
            Err(_) => path.to_string_lossy().into_owned(),
        }
    }
}
