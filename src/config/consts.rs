// src/config/consts.rs
use std::time::Duration;

/// Companion modding tool, expected next to the launcher executable.
pub const MODDER_EXE: &str = "FlowlabModdingUtility.exe";

/// Folder inside the launcher dir where games live.
pub const GAMES_FOLDER_NAME: &str = "games";

/// Extension collected by the games/ scan (compared ignoring ASCII case).
pub const GAME_EXT: &str = "exe";

/// How often the modder running-status is re-checked.
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(2);

pub const APP_TITLE: &str = "Mod Launcher";
