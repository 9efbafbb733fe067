// src/gui/actions/play.rs
use crate::{gui::app::App, process};

/// Launch the selected game from its own directory.
pub fn play_selected(app: &mut App) {
    let Some((path, display)) = app
        .selected_game()
        .map(|g| (g.path.clone(), g.display.clone()))
    else {
        app.error("Play", "No game selected.");
        return;
    };

    // The list reflects the last scan; the file may be gone by now.
    if !path.is_file() {
        app.error("Play", format!("Selected game not found:\n{display}"));
        return;
    }

    match process::launch(&path) {
        Ok(()) => {
            logf!("Play: {}", display);
            app.status(format!("Playing {display}"));
        }
        Err(e) => {
            app.error("Play error", format!("Failed to launch game:\n{e}"));
        }
    }
}
