use std::fs;

use tempfile::tempdir;

use crate::common::{run_launcher_with_env, stderr_of, write_config_files};

const TRUE_BIN: &str = "/bin/true";
const FALSE_BIN: &str = "/bin/false";

fn seeded_project(extra_properties: &str) -> tempfile::TempDir {
    let temp = tempdir().expect("can create temporary directory");
    write_config_files(temp.path(), extra_properties);
    fs::create_dir(temp.path().join("src")).expect("can create src dir");
    temp
}

#[test]
fn launch_renders_global_config_from_properties() {
    let temp = seeded_project("");

    let output = run_launcher_with_env(
        temp.path(),
        &["-u", "-f", "-d"],
        "",
        &[("DEVSTART_PYTHON", TRUE_BIN)],
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        stderr_of(&output)
    );

    let generated = fs::read_to_string(temp.path().join("src/GlobalConfig.py"))
        .expect("generated config should exist");
    assert!(
        generated.contains("application_name = \"Foo\""),
        "generated: {generated}"
    );
    assert!(generated.contains("build_hotreload = \"OFF\""));
    // application_version intentionally mirrors the domain property.
    assert!(generated.contains("application_version = \"org.example\""));
    assert!(generated.contains("application_domain = \"org.example\""));
}

#[test]
fn reload_flag_forces_hotreload_on() {
    let temp = seeded_project("");

    let output = run_launcher_with_env(
        temp.path(),
        &["-u", "-f", "-d", "--reload"],
        "",
        &[("DEVSTART_PYTHON", TRUE_BIN)],
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        stderr_of(&output)
    );
    let generated = fs::read_to_string(temp.path().join("src/GlobalConfig.py"))
        .expect("generated config should exist");
    assert!(
        generated.contains("build_hotreload = \"ON\""),
        "generated: {generated}"
    );
}

#[test]
fn child_failures_do_not_change_launcher_exit_code() {
    let temp = seeded_project("");

    // Without --fast both the resource update and the app run (and fail here).
    let output = run_launcher_with_env(
        temp.path(),
        &["-u", "-d"],
        "",
        &[("DEVSTART_PYTHON", FALSE_BIN)],
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        stderr_of(&output)
    );
    assert!(temp.path().join("src/GlobalConfig.py").exists());
}

#[test]
fn missing_interpreter_is_reported() {
    let temp = seeded_project("");

    let output = run_launcher_with_env(
        temp.path(),
        &["-u", "-f", "-d"],
        "",
        &[("DEVSTART_PYTHON", "/nonexistent/python")],
    );

    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Failed to spawn"), "stderr: {stderr}");
}
