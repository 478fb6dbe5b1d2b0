//! Entry point for devstart.
use std::{env, io, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use devstart::{
    cli::LaunchArgs,
    config::{self, BootstrapStatus, Properties},
    launcher::{self, ElevationStatus},
    telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn bootstrap() -> Result<ExitCode> {
    telemetry::init_tracing()?;
    let root = env::current_dir().context("failed to obtain current directory")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    config::ensure_env_file(&root, &mut input)?;
    if config::ensure_properties_file(&root, &mut input)? == BootstrapStatus::Created {
        return Ok(ExitCode::from(1));
    }

    let args = LaunchArgs::parse();
    let properties = Properties::load(&root.join(config::PROPERTIES_FILE))?;

    if !args.skip_uac_check {
        info!(target: "devstart", "UAC check");
        if launcher::ensure_elevated()? == ElevationStatus::Relaunched {
            return Ok(ExitCode::SUCCESS);
        }
    }

    let plan = args.build_plan(&mut input)?;

    if !args.fast {
        launcher::run_resource_update(&root).await?;
    }

    let generated = config::write_global_config(&root, &properties, &plan.overrides)?;
    info!(
        target: "devstart",
        path = %generated.display(),
        "Rendered generated config"
    );

    launcher::spawn_application(&root, &plan.child_args).await?;
    Ok(ExitCode::SUCCESS)
}
