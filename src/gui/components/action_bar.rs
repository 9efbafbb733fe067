// src/gui/components/action_bar.rs
//
// Per-tab action buttons. Games: scan + upload. Launcher: modder status
// and launch, plus the play/delete/rename/refresh row.

use eframe::egui;

use crate::config::consts::MODDER_EXE;
use crate::config::state::Tab;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    match app.state.gui.tab {
        Tab::Games => draw_games(ui, app),
        Tab::Launcher => draw_launcher(ui, app),
    }
}

fn draw_games(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("Scan games/").clicked() {
            actions::scan(app);
        }
        if ui.button("Upload .exe(s) → games/").clicked() {
            actions::upload_files(app);
        }
        if ui.button("Upload Folder → games/").clicked() {
            actions::upload_folder(app);
        }
    });
}

fn draw_launcher(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let status = match app.state.gui.modder_running {
            Some(true) => "running",
            Some(false) => "not running",
            None => "unknown",
        };
        ui.label(format!("Modder status: {status}"));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("Launch {MODDER_EXE}")).clicked() {
                actions::launch_modder(app);
            }
        });
    });

    ui.horizontal(|ui| {
        let has_selection = app.selected_game().is_some();

        if ui
            .add_enabled(has_selection, egui::Button::new("Play Selected"))
            .clicked()
        {
            actions::play_selected(app);
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Delete Selected"))
            .clicked()
        {
            actions::request_delete(app);
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Rename Selected"))
            .clicked()
        {
            actions::request_rename(app);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh Lists").clicked() {
                actions::scan(app);
            }
        });
    });
}
