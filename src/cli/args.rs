//! CLI flag definitions and launch plan construction.
use std::{collections::HashMap, io::BufRead};

use anyhow::Result;
use clap::Parser;

use super::prompt_line;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Starts the application with the specified arguments for debug.",
    long_about = None
)]
pub struct LaunchArgs {
    /// Run fast start application (disable update resources).
    #[arg(short, long)]
    pub fast: bool,
    /// Enable hot reload for qml files.
    #[arg(short, long)]
    pub reload: bool,
    /// Enable manual input of arguments.
    #[arg(short = 'q', long)]
    pub enable_manual_input: bool,
    /// Skip UAC check (not recommended).
    #[arg(short = 'u', long)]
    pub skip_uac_check: bool,
    /// Disable debug mode for application.
    #[arg(short, long)]
    pub disable_debug: bool,
}

/// Child process arguments plus placeholder overrides resolved from flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub child_args: Vec<String>,
    pub overrides: HashMap<&'static str, String>,
}

impl LaunchArgs {
    /// Build the child argument list and render overrides, prompting for
    /// manual arguments when requested.
    pub fn build_plan(&self, input: &mut impl BufRead) -> Result<LaunchPlan> {
        // The application treats a single blank argument as "no arguments".
        let mut child_args = vec![String::from(" ")];

        if self.enable_manual_input {
            let line = prompt_line("Put here args for check (e.g. --autorun) ->", input)?;
            child_args = line.split(' ').map(str::to_string).collect();
        }

        if !self.disable_debug {
            child_args.push(String::from("--debug"));
        }

        let mut overrides = HashMap::new();
        if self.reload {
            overrides.insert("build_hotreload", String::from("ON"));
        }

        Ok(LaunchPlan {
            child_args,
            overrides,
        })
    }
}
