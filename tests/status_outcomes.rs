// tests/status_outcomes.rs
//
// Footer outcomes for the actions: a post-action rescan must not
// overwrite the action's own message. Drives App + actions directly;
// no UI needed.
//
use std::fs;

use modlauncher::config::state::{AppState, Modal};
use modlauncher::gui::actions;
use modlauncher::gui::app::App;
use modlauncher::paths::LauncherPaths;

fn app_with_games(names: &[&str]) -> (tempfile::TempDir, App) {
    let tmp = tempfile::tempdir().unwrap();
    let paths = LauncherPaths::from_base(tmp.path().to_path_buf()).unwrap();
    for n in names {
        fs::write(paths.games_dir.join(n), "x").unwrap();
    }
    let app = App::new(paths, AppState::default());
    (tmp, app)
}

#[test]
fn scan_reports_scanned_count() {
    let (_tmp, mut app) = app_with_games(&["one.exe", "two.exe"]);
    actions::scan(&mut app);
    assert_eq!(app.status, "Scanned 2 game(s)");
}

#[test]
fn delete_outcome_survives_the_rescan() {
    let (_tmp, mut app) = app_with_games(&["doomed.exe"]);
    let path = app.games[0].path.clone();

    actions::delete_confirmed(&mut app, &path);

    assert!(app.status.starts_with("Deleted "), "status was {:?}", app.status);
    assert!(app.games.is_empty()); // rescan still happened
}

#[test]
fn rename_outcome_survives_the_rescan() {
    let (_tmp, mut app) = app_with_games(&["old.exe"]);
    let path = app.games[0].path.clone();

    actions::rename_confirmed(&mut app, &path, "new.exe");

    assert!(app.status.starts_with("Renamed to "), "status was {:?}", app.status);
    assert_eq!(app.games.len(), 1); // rescan still happened
    assert_eq!(app.games[0].name, "new.exe");
}

#[test]
fn rename_validation_reopens_dialog_inline() {
    let (_tmp, mut app) = app_with_games(&["old.exe"]);
    let path = app.games[0].path.clone();

    actions::rename_confirmed(&mut app, &path, "old.zip");

    match app.state.gui.modal {
        Some(Modal::Rename { ref input, ref error, .. }) => {
            assert_eq!(input, "old.zip");
            assert!(error.is_some());
        }
        ref other => panic!("expected rename modal, got {other:?}"),
    }
    assert_eq!(app.games[0].name, "old.exe"); // file untouched
}
