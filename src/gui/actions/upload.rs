// src/gui/actions/upload.rs
use std::path::{Path, PathBuf};

use crate::config::consts::GAME_EXT;
use crate::{fsops, gui::app::App};

use super::scan::rescan;

fn picker(app: &App) -> rfd::FileDialog {
    let mut dlg = rfd::FileDialog::new();
    let last = &app.state.gui.last_browse_dir;
    if !last.is_empty() && Path::new(last).is_dir() {
        dlg = dlg.set_directory(last);
    }
    dlg
}

fn remember_browse_dir(app: &mut App, picked: &Path) {
    let dir = if picked.is_dir() {
        Some(picked)
    } else {
        picked.parent()
    };
    if let Some(d) = dir {
        app.state.gui.last_browse_dir = d.to_string_lossy().into_owned();
    }
}

/// Copy user-picked .exe files into the games/ root, overwriting on name
/// collision. Partial failure still uploads the rest; all failures land
/// in one error dialog.
pub fn upload_files(app: &mut App) {
    let Some(files) = picker(app)
        .set_title("Select game .exe files to upload")
        .add_filter("EXE files", &[GAME_EXT])
        .pick_files()
    else {
        logd!("Upload: file picker cancelled");
        return;
    };
    if files.is_empty() {
        return;
    }
    remember_browse_dir(app, &files[0]);

    let mut copied = 0usize;
    let mut failures: Vec<String> = Vec::new();

    for src in &files {
        match fsops::copy_file_into(src, &app.paths.games_dir) {
            Ok(dst) => {
                copied += 1;
                logf!("Upload: {} → {}", src.display(), dst.display());
            }
            Err(e) => {
                loge!("Upload: copy failed {}: {}", src.display(), e);
                failures.push(format!("{}:\n{e}", src.display()));
            }
        }
    }

    if failures.is_empty() {
        app.status(format!("Uploaded {copied} file(s)"));
    } else {
        app.error(
            "Upload error",
            join!("Failed to copy:\n\n", &*failures.join("\n\n")),
        );
    }

    rescan(app);
}

/// Copy a user-picked folder to games/<basename>, merging into an
/// existing folder of the same name.
pub fn upload_folder(app: &mut App) {
    let Some(src) = picker(app)
        .set_title("Select a folder to upload into games/")
        .pick_folder()
    else {
        logd!("Upload: folder picker cancelled");
        return;
    };
    remember_browse_dir(app, &src);

    let Some(name) = src.file_name() else {
        app.error("Upload error", format!("Cannot upload {}", src.display()));
        return;
    };
    let dst: PathBuf = app.paths.games_dir.join(name);

    match fsops::copy_dir_all(&src, &dst) {
        Ok(()) => {
            logf!("Upload: folder {} → {}", src.display(), dst.display());
            app.status(format!("Uploaded folder {}", name.to_string_lossy()));
        }
        Err(e) => {
            app.error("Upload error", format!("Failed to copy folder:\n{e}"));
        }
    }

    rescan(app);
}
