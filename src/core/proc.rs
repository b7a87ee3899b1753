//! Process management for the globber.
//!
//! Opens files with the platform's default handler. The helper program is
//! looked up with `which` and spawned detached with null stdio so it cannot
//! draw over the TUI. A helper thread waits on it so it never stays defunct.

use std::io;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};

/// Program and leading arguments that open a path with the default handler.
#[cfg(target_os = "macos")]
pub fn opener_command() -> (&'static str, &'static [&'static str]) {
    ("open", &[])
}

#[cfg(windows)]
pub fn opener_command() -> (&'static str, &'static [&'static str]) {
    ("cmd", &["/C", "start", ""])
}

#[cfg(all(unix, not(target_os = "macos")))]
pub fn opener_command() -> (&'static str, &'static [&'static str]) {
    ("xdg-open", &[])
}

/// Hands `path` to the default handler without waiting for it.
///
/// Fails when no opener program is installed or it cannot be spawned. What
/// the handler does with the file afterwards is not observed.
pub fn open_with_default_handler(path: &Path) -> io::Result<()> {
    let (program, args) = opener_command();
    let program_path = which::which(program).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not available: {}", program, e),
        )
    })?;

    let child = Command::new(program_path)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    tracing::debug!(path = %path.display(), program, "opened with default handler");
    reap_in_background(child);
    Ok(())
}

/// Waits for `child` on a helper thread so it never lingers as a zombie.
fn reap_in_background(mut child: Child) -> JoinHandle<()> {
    thread::spawn(move || match child.wait() {
        Ok(status) => tracing::debug!(%status, "opener exited"),
        Err(e) => tracing::debug!(error = %e, "waiting on opener failed"),
    })
}
