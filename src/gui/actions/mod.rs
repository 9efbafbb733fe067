// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see the action functions.

mod manage; // src/gui/actions/manage.rs
mod modder; // src/gui/actions/modder.rs
mod play;   // src/gui/actions/play.rs
mod scan;   // src/gui/actions/scan.rs
mod upload; // src/gui/actions/upload.rs

pub use manage::{delete_confirmed, rename_confirmed, request_delete, request_rename};
pub use modder::launch_modder;
pub use play::play_selected;
pub use scan::scan;
pub use upload::{upload_files, upload_folder};
