// src/gui/actions/modder.rs
use crate::config::consts::MODDER_EXE;
use crate::{gui::app::App, process};

/// Launch the companion modding tool from the launcher directory.
pub fn launch_modder(app: &mut App) {
    let modder = app.paths.modder_path();

    if !modder.is_file() {
        app.error(
            "Launch error",
            format!(
                "{MODDER_EXE} not found in launcher folder:\n{}",
                modder.display()
            ),
        );
        return;
    }

    match process::launch_in(&modder, &app.paths.base_dir) {
        Ok(()) => {
            // Flip the label right away; the next poll confirms.
            app.state.gui.modder_running = Some(true);
            app.status(format!("Launched {MODDER_EXE}"));
        }
        Err(e) => {
            app.error("Launch error", format!("Failed to launch modder:\n{e}"));
        }
    }
}
