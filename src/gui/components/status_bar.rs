// src/gui/components/status_bar.rs
//
// Footer: last action outcome on the left, folder locations on the right.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label(&app.status);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("Launcher folder: {}", app.paths.base_dir.display()));
            ui.separator();
            ui.label(format!("Games folder: {}", app.paths.games_dir.display()));
        });
    });
}
