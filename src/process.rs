// src/process.rs
//
// Process concerns: poll whether the modder is running, and spawn
// executables detached in their own working directory.

use std::{
    io,
    path::{Path, PathBuf},
    process::Command,
};

use sysinfo::{ProcessesToUpdate, System};

/// True if any current process name matches `exe_name` (ASCII
/// case-insensitive). Fresh snapshot on every call; the poll interval
/// keeps this cheap enough.
pub fn is_running(exe_name: &str) -> bool {
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::All, true);
    sys.processes()
        .values()
        .any(|p| p.name().to_string_lossy().eq_ignore_ascii_case(exe_name))
}

/// Spawn `exe` with the given working directory and let it go. The
/// launcher never waits on children.
pub fn launch_in(exe: &Path, cwd: &Path) -> io::Result<()> {
    // Absolute path avoids resolution differences once cwd changes
    let abs: PathBuf = std::fs::canonicalize(exe).unwrap_or_else(|_| exe.to_path_buf());

    let mut cmd = Command::new(&abs);
    cmd.current_dir(cwd);

    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        const DETACHED_PROCESS: u32 = 0x0000_0008;
        cmd.creation_flags(DETACHED_PROCESS);
    }

    cmd.spawn()?;
    logf!("Launch: {} (cwd {})", abs.display(), cwd.display());
    Ok(())
}

/// Spawn a game executable from its own directory.
pub fn launch(exe: &Path) -> io::Result<()> {
    let cwd = exe.parent().unwrap_or_else(|| Path::new("."));
    launch_in(exe, cwd)
}
