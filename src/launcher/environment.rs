//! Child process environment construction.

use std::path::Path;

/// Module search path variable adjusted for the child process.
pub const PYTHON_PATH_ENV: &str = "PYTHONPATH";

/// Separator used when joining module search path entries.
pub const fn path_separator() -> char {
    if cfg!(windows) {
        ';'
    } else {
        ':'
    }
}

/// `PYTHONPATH` value for the child: project root first, then the inherited
/// value when it is non-empty.
pub fn python_path(root: &Path, inherited: Option<&str>) -> String {
    let mut value = root.display().to_string();
    if let Some(existing) = inherited.filter(|v| !v.is_empty()) {
        value.push(path_separator());
        value.push_str(existing);
    }
    value
}
