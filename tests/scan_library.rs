// tests/scan_library.rs
//
// Scan behavior against a real temp directory tree: extension filter,
// ordering, relative display form.
//
use std::fs;
use std::path::Path;

use modlauncher::library::{fmt_size, scan};
use modlauncher::paths::LauncherPaths;

fn touch(path: &Path, bytes: usize) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, vec![0u8; bytes]).unwrap();
}

#[test]
fn from_base_creates_games_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = LauncherPaths::from_base(tmp.path().to_path_buf()).unwrap();
    assert!(paths.games_dir.is_dir());
    assert_eq!(paths.games_dir, tmp.path().join("games"));
}

#[test]
fn empty_games_dir_scans_to_empty_list() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = LauncherPaths::from_base(tmp.path().to_path_buf()).unwrap();
    let games = scan(&paths).unwrap();
    assert!(games.is_empty());
}

#[test]
fn missing_games_dir_scans_to_empty_list() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = LauncherPaths::from_base(tmp.path().to_path_buf()).unwrap();

    // games/ deleted behind the launcher's back: next scan re-creates
    // it and reports an empty library, not an error.
    fs::remove_dir_all(&paths.games_dir).unwrap();
    let games = scan(&paths).unwrap();
    assert!(games.is_empty());
    assert!(paths.games_dir.is_dir());
}

#[test]
fn scan_filters_and_sorts() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = LauncherPaths::from_base(tmp.path().to_path_buf()).unwrap();
    let g = &paths.games_dir;

    touch(&g.join("Zed.EXE"), 10);          // extension match is case-insensitive
    touch(&g.join("alpha").join("b.exe"), 20);
    touch(&g.join("alpha").join("notes.txt"), 5); // filtered out
    touch(&g.join("sub").join("deep").join("c.exe"), 30);
    touch(&g.join("noext"), 5);             // filtered out

    let games = scan(&paths).unwrap();
    let names: Vec<&str> = games.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["b.exe", "c.exe", "Zed.EXE"]);

    // Display is relative to the base dir, and sort key is its lowercase
    for e in &games {
        assert_eq!(e.display, paths.display_rel(&e.path));
        assert!(e.path.starts_with(&paths.base_dir));
    }
    let mut keys: Vec<String> = games.iter().map(|e| e.display.to_lowercase()).collect();
    let sorted = keys.clone();
    keys.sort();
    assert_eq!(keys, sorted);

    // Size captured at scan time
    assert_eq!(games.iter().find(|e| e.name == "Zed.EXE").unwrap().size, 10);
}

#[test]
fn rescan_rebuilds_from_scratch() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = LauncherPaths::from_base(tmp.path().to_path_buf()).unwrap();

    touch(&paths.games_dir.join("one.exe"), 1);
    assert_eq!(scan(&paths).unwrap().len(), 1);

    fs::remove_file(paths.games_dir.join("one.exe")).unwrap();
    touch(&paths.games_dir.join("two.exe"), 1);

    let games = scan(&paths).unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "two.exe");
}

#[test]
fn display_rel_falls_back_to_absolute_outside_base() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = LauncherPaths::from_base(tmp.path().to_path_buf()).unwrap();
    let outside = Path::new("/somewhere/else/game.exe");
    assert_eq!(paths.display_rel(outside), outside.to_string_lossy());
}

#[test]
fn size_formatting() {
    assert_eq!(fmt_size(0), "0 B");
    assert_eq!(fmt_size(1023), "1023 B");
    assert_eq!(fmt_size(1024), "1.0 KB");
    assert_eq!(fmt_size(1536), "1.5 KB");
    assert_eq!(fmt_size(5 * 1024 * 1024), "5.0 MB");
    assert_eq!(fmt_size(3 * 1024 * 1024 * 1024), "3.0 GB");
}
