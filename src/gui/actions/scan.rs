// src/gui/actions/scan.rs
use crate::{gui::app::App, library};

/// Rebuild the game list from disk and claim the footer. This is the
/// explicit Scan/Refresh button action.
pub fn scan(app: &mut App) {
    if rescan(app) {
        let n = app.games.len();
        app.status(format!("Scanned {n} game(s)"));
    }
}

/// Rebuild without touching the footer on success, so actions that
/// rescan afterwards ("Uploaded …", "Deleted …") keep their outcome
/// visible. Selection is kept only if it still points at the same path.
pub(super) fn rescan(app: &mut App) -> bool {
    let keep = app.selected_game().map(|g| g.path.clone());

    match library::scan(&app.paths) {
        Ok(games) => {
            logf!("Scan: OK, {} game(s)", games.len());
            app.games = games;

            app.state.gui.selected = keep
                .and_then(|path| app.games.iter().position(|g| g.path == path));
            true
        }
        Err(e) => {
            app.error("Scan error", format!("Failed to scan games/:\n{e}"));
            false
        }
    }
}
