//! Privilege checks, environment construction, and child process handling.

pub mod elevation;
pub mod environment;
pub mod process;

pub use elevation::{ensure_elevated, ElevationStatus};
pub use environment::{path_separator, python_path, PYTHON_PATH_ENV};
pub use process::{
    resolve_python, run_resource_update, spawn_application, APP_ENTRY_POINT, PYTHON_ENV,
    UPDATE_RESOURCE_SCRIPT,
};
