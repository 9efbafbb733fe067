// src/library.rs
//
// Game discovery. The list is the whole data model: rebuilt from scratch
// on every scan, never kept in sync with outside filesystem changes.

use std::{error::Error, path::PathBuf};

use walkdir::WalkDir;

use crate::config::consts::GAME_EXT;
use crate::paths::LauncherPaths;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEntry {
    /// Full path to the executable.
    pub path: PathBuf,
    /// File name only ("Game.exe"), for the table's Game column.
    pub name: String,
    /// Path relative to the launcher dir, for display and sorting.
    pub display: String,
    /// File length at scan time.
    pub size: u64,
}

/// Recursively collect all game executables under games/.
/// Sorted by lowercased display path so the list is stable across scans.
/// A missing games/ (deleted after startup) is re-created and scans to
/// an empty list rather than an error.
pub fn scan(paths: &LauncherPaths) -> Result<Vec<GameEntry>, Box<dyn Error>> {
    std::fs::create_dir_all(&paths.games_dir)?;

    let mut games: Vec<GameEntry> = Vec::new();

    for entry in WalkDir::new(&paths.games_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_game = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(GAME_EXT))
            .unwrap_or(false);
        if !is_game {
            continue;
        }

        let path = entry.path().to_path_buf();
        let name = entry.file_name().to_string_lossy().into_owned();
        let display = paths.display_rel(&path);
        let size = entry.metadata()?.len();

        games.push(GameEntry { path, name, display, size });
    }

    games.sort_by_key(|g| g.display.to_lowercase());

    logd!("Scan: {} game(s) under {}", games.len(), paths.games_dir.display());
    Ok(games)
}

/// "12.3 MB" style size for the table. Bytes below 1 KB stay exact.
pub fn fmt_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut v = bytes as f64 / 1024.0;
    let mut unit = 0;
    while v >= 1024.0 && unit < UNITS.len() - 1 {
        v /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", v, UNITS[unit])
}
