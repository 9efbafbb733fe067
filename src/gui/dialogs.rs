// src/gui/dialogs.rs
//
// Modal windows: error message, delete confirmation, rename input.
// One modal at a time (config::state::Modal); the update loop calls
// draw() last so these sit above the rest of the UI.

use eframe::egui::{self, Align2, Vec2};

use crate::config::state::Modal;
use crate::gui::{actions, app::App};

fn modal_window(title: &str) -> egui::Window<'static> {
    egui::Window::new(title.to_owned())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
}

pub fn draw(ctx: &egui::Context, app: &mut App) {
    // Take the modal out; each arm either restores it, drops it, or lets
    // an action install a follow-up (e.g. a delete failure dialog).
    let Some(modal) = app.state.gui.modal.take() else {
        return;
    };

    match modal {
        Modal::Error { title, message } => {
            let mut close = false;
            modal_window(&title).show(ctx, |ui| {
                ui.label(&message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
            if !close {
                app.state.gui.modal = Some(Modal::Error { title, message });
            }
        }

        Modal::ConfirmDelete { path } => {
            let mut choice: Option<bool> = None;
            modal_window("Delete").show(ctx, |ui| {
                ui.label(format!(
                    "Delete:\n{}\n\nThis will permanently remove the file.",
                    path.display()
                ));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        choice = Some(true);
                    }
                    if ui.button("No").clicked() {
                        choice = Some(false);
                    }
                });
            });
            match choice {
                Some(true) => actions::delete_confirmed(app, &path),
                Some(false) => logd!("Delete: cancelled for {}", path.display()),
                None => app.state.gui.modal = Some(Modal::ConfirmDelete { path }),
            }
        }

        Modal::Rename { path, mut input, error } => {
            let mut confirm = false;
            let mut cancel = false;
            modal_window("Rename").show(ctx, |ui| {
                ui.label("New filename (must end with .exe):");
                let edit = ui.text_edit_singleline(&mut input);
                if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    confirm = true;
                }
                if let Some(msg) = &error {
                    ui.colored_label(ui.visuals().error_fg_color, msg);
                }
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Rename").clicked() {
                        confirm = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });
            if confirm {
                // May reopen the dialog with an inline validation error.
                actions::rename_confirmed(app, &path, &input);
            } else if cancel {
                logd!("Rename: cancelled for {}", path.display());
            } else {
                app.state.gui.modal = Some(Modal::Rename { path, input, error });
            }
        }
    }
}
