//! Child process invocation: resource update and the application itself.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitStatus,
};

use tokio::process::Command;
use tracing::{info, warn};

use super::environment::{python_path, PYTHON_PATH_ENV};
use crate::errors::LaunchError;

/// Environment variable overriding the Python interpreter used for children.
pub const PYTHON_ENV: &str = "DEVSTART_PYTHON";
/// Relative path of the resource update script.
pub const UPDATE_RESOURCE_SCRIPT: &str = "update-resource.py";
/// Relative path of the application entry point.
pub const APP_ENTRY_POINT: &str = "src/main.py";

/// Interpreter for child scripts: `DEVSTART_PYTHON` override, else the
/// platform default.
pub fn resolve_python() -> PathBuf {
    if let Some(value) = env::var_os(PYTHON_ENV) {
        if !value.is_empty() {
            return PathBuf::from(value);
        }
    }
    if cfg!(windows) {
        PathBuf::from("python")
    } else {
        PathBuf::from("python3")
    }
}

/// Run the resource update script and wait for it.
///
/// A non-zero exit is logged and otherwise ignored.
pub async fn run_resource_update(root: &Path) -> Result<(), LaunchError> {
    let python = resolve_python();
    let script = root.join(UPDATE_RESOURCE_SCRIPT);
    info!(
        target: "devstart::process",
        script = %script.display(),
        "Updating resources"
    );

    let status = Command::new(&python)
        .arg(&script)
        .current_dir(root)
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|source| LaunchError::Spawn {
            program: python.clone(),
            source,
        })?;

    if !status.success() {
        warn!(
            target: "devstart::process",
            code = status.code(),
            "Resource update exited abnormally"
        );
    }
    Ok(())
}

/// Launch the application entry point and wait for it to exit.
///
/// The child inherits the launcher environment with `PYTHONPATH` adjusted to
/// put the project root first. The exit status is logged and returned but not
/// treated as a launcher failure.
pub async fn spawn_application(root: &Path, args: &[String]) -> Result<ExitStatus, LaunchError> {
    let python = resolve_python();
    let entry = root.join(APP_ENTRY_POINT);
    let inherited = env::var(PYTHON_PATH_ENV).ok();
    let search_path = python_path(root, inherited.as_deref());

    info!(
        target: "devstart::process",
        entry = %entry.display(),
        args = ?args,
        "Starting application"
    );

    let status = Command::new(&python)
        .arg(&entry)
        .args(args)
        .env(PYTHON_PATH_ENV, &search_path)
        .current_dir(root)
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|source| LaunchError::Spawn {
            program: python.clone(),
            source,
        })?;

    info!(
        target: "devstart::process",
        code = status.code(),
        "Application exited"
    );
    Ok(status)
}
