// tests/rename_rules.rs
//
// Rename validation matrix plus the actual on-disk rename.
//
use std::fs;

use modlauncher::fsops::{rename_entry, validate_new_name};

#[test]
fn name_must_keep_game_extension() {
    assert!(validate_new_name("game.exe").is_ok());
    assert!(validate_new_name("Game Of The Year.EXE").is_ok()); // case-insensitive
    assert!(validate_new_name("  game.exe  ").is_ok()); // trimmed

    assert!(validate_new_name("").is_err());
    assert!(validate_new_name("   ").is_err());
    assert!(validate_new_name("game").is_err());
    assert!(validate_new_name("game.txt").is_err());
    assert!(validate_new_name("game.exe.bak").is_err());
}

#[test]
fn name_must_stay_in_place() {
    assert!(validate_new_name("sub/game.exe").is_err());
    assert!(validate_new_name("..\\game.exe").is_err());
}

#[test]
fn rename_entry_renames_within_parent() {
    let tmp = tempfile::tempdir().unwrap();
    let old = tmp.path().join("old name.exe");
    fs::write(&old, "x").unwrap();

    let new = rename_entry(&old, "new name.exe").unwrap();
    assert_eq!(new, tmp.path().join("new name.exe"));
    assert!(!old.exists());
    assert!(new.is_file());
}

#[test]
fn rename_entry_rejects_bad_name_and_leaves_file() {
    let tmp = tempfile::tempdir().unwrap();
    let old = tmp.path().join("game.exe");
    fs::write(&old, "x").unwrap();

    assert!(rename_entry(&old, "game.zip").is_err());
    assert!(old.is_file());
}

#[test]
fn rename_entry_fails_on_missing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("ghost.exe");
    assert!(rename_entry(&missing, "still-ghost.exe").is_err());
}
