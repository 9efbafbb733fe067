// src/gui/components/game_table.rs
//
// Draws the scanned game list as a table. Purely a view over App.games;
// row click selects, double-click plays.

use eframe::egui::{self, RichText, Sense};
use egui_extras::{Column, TableBuilder};

use crate::gui::{actions, app::App};
use crate::library::fmt_size;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.games.is_empty() {
        ui.add_space(8.0);
        ui.label("(No games found in games/)");
        return;
    }

    let mut clicked: Option<usize> = None;
    let mut play: Option<usize> = None;

    {
        // Selection writes are deferred so the table can borrow app freely.
        let games = &app.games;
        let gui = &app.state.gui;

        TableBuilder::new(ui)
            .striped(true)
            .sense(Sense::click())
            .column(Column::initial(220.0).at_least(80.0).clip(true))
            .column(Column::remainder().clip(true))
            .column(Column::exact(80.0))
            .header(24.0, |mut header| {
                header.col(|ui| {
                    ui.label(RichText::new("Game").strong());
                });
                header.col(|ui| {
                    ui.label(RichText::new("Location").strong());
                });
                header.col(|ui| {
                    ui.label(RichText::new("Size").strong());
                });
            })
            .body(|body| {
                body.rows(20.0, games.len(), |mut row| {
                    let ix = row.index();
                    let game = &games[ix];

                    row.set_selected(gui.selected == Some(ix));

                    row.col(|ui| {
                        ui.label(&game.name);
                    });
                    row.col(|ui| {
                        ui.label(&game.display);
                    });
                    row.col(|ui| {
                        ui.label(fmt_size(game.size));
                    });

                    let resp = row.response();
                    if resp.double_clicked() {
                        play = Some(ix);
                    } else if resp.clicked() {
                        clicked = Some(ix);
                    }
                });
            });
    }

    if let Some(ix) = clicked {
        app.state.gui.selected = Some(ix);
    }
    if let Some(ix) = play {
        app.state.gui.selected = Some(ix);
        actions::play_selected(app);
    }
}
