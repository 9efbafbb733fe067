// src/gui/actions/manage.rs
//
// Delete and rename. Both are two-step: request_* opens the modal,
// *_confirmed runs once the user accepts (wired up in gui::dialogs).

use std::path::Path;

use crate::config::state::Modal;
use crate::{fsops, gui::app::App};

use super::scan::rescan;

pub fn request_delete(app: &mut App) {
    let Some(path) = app.selected_game().map(|g| g.path.clone()) else {
        app.error("Delete", "No game selected.");
        return;
    };
    app.state.gui.modal = Some(Modal::ConfirmDelete { path });
}

pub fn delete_confirmed(app: &mut App, path: &Path) {
    match fsops::delete_entry(path) {
        Ok(()) => {
            logf!("Delete: {}", path.display());
            app.status(format!("Deleted {}", path.display()));
            rescan(app);
        }
        Err(e) => {
            app.error("Delete error", format!("Failed to delete:\n{e}"));
        }
    }
}

pub fn request_rename(app: &mut App) {
    let Some((path, input)) = app
        .selected_game()
        .map(|g| (g.path.clone(), g.name.clone()))
    else {
        app.error("Rename", "No game selected.");
        return;
    };
    app.state.gui.modal = Some(Modal::Rename { path, input, error: None });
}

/// Validation failures keep the dialog open with an inline message;
/// only an actual rename attempt closes it.
pub fn rename_confirmed(app: &mut App, path: &Path, new_name: &str) {
    if let Err(msg) = fsops::validate_new_name(new_name) {
        logd!("Rename: rejected {:?}: {}", new_name, msg);
        app.state.gui.modal = Some(Modal::Rename {
            path: path.to_path_buf(),
            input: s!(new_name),
            error: Some(msg),
        });
        return;
    }

    match fsops::rename_entry(path, new_name) {
        Ok(new_path) => {
            logf!("Rename: {} → {}", path.display(), new_path.display());
            app.status(format!("Renamed to {}", new_path.display()));
            rescan(app);
        }
        Err(e) => {
            app.error("Rename error", format!("Failed to rename:\n{e}"));
        }
    }
}
