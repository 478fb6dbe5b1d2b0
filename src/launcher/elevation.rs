//! Windows UAC elevation check.

use anyhow::Result;

/// Result of the elevation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationStatus {
    /// Already elevated, or the platform has no elevation step.
    Ready,
    /// An elevated copy was launched; this process must exit.
    Relaunched,
}

/// On Windows, relaunch the current executable through the UAC prompt when
/// the process is not elevated.
#[cfg(windows)]
pub fn ensure_elevated() -> Result<ElevationStatus> {
    use anyhow::Context;
    use tracing::info;

    if privilege::user::privileged() {
        return Ok(ElevationStatus::Ready);
    }

    let exe = std::env::current_exe().context("failed to resolve current executable")?;
    info!(
        target: "devstart::elevation",
        exe = %exe.display(),
        "Requesting UAC elevation"
    );
    let mut command = privilege::runas::Command::new(exe);
    command.force_prompt(true).gui(true);
    command.run().context("UAC relaunch failed")?;
    Ok(ElevationStatus::Relaunched)
}

/// Elevation is a Windows-only concern.
#[cfg(not(windows))]
pub fn ensure_elevated() -> Result<ElevationStatus> {
    Ok(ElevationStatus::Ready)
}
