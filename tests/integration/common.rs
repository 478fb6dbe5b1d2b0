use std::{
    fs,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_devstart");

/// Seed `root` with a minimal `.env` and `config.properties` pair.
pub fn write_config_files(root: &Path, extra_properties: &str) {
    fs::write(root.join(".env"), "DEV_API=\n").expect("can write .env");
    let properties = format!(
        "[application]\n\
         appId=org.example.app\n\
         appName=Foo\n\
         company=Example\n\
         copyright=Copyright (c) 2025\n\
         domain=org.example\n\
         version=1.2.3\n\
         [build]\n\
         projectName=Foo\n\
         hotLoad=OFF\n\
         {extra_properties}"
    );
    fs::write(root.join("config.properties"), properties).expect("can write config.properties");
}

/// Run the launcher in `root`, feeding `stdin_data` and then closing stdin.
pub fn run_launcher(root: &Path, args: &[&str], stdin_data: &str) -> Output {
    run_launcher_with_env(root, args, stdin_data, &[])
}

pub fn run_launcher_with_env(
    root: &Path,
    args: &[&str],
    stdin_data: &str,
    envs: &[(&str, &str)],
) -> Output {
    let mut command = Command::new(BINARY_PATH);
    command
        .args(args)
        .current_dir(root)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        command.env(key, value);
    }

    let mut child = command.spawn().expect("launcher should start");
    child
        .stdin
        .take()
        .expect("child stdin")
        .write_all(stdin_data.as_bytes())
        .expect("can write child stdin");
    child.wait_with_output().expect("launcher should exit")
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
