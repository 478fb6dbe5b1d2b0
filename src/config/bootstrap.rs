//! First-run creation of `.env` and `config.properties`.

use std::{fs, io::BufRead, path::Path};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::prompt_line;

/// Environment file holding the developer API key.
pub const ENV_FILE: &str = ".env";
/// Properties file describing the application and build.
pub const PROPERTIES_FILE: &str = "config.properties";

/// Qt modules excluded from deployment, written into the default properties
/// file for the packaging step.
const EXCLUDE_QT_FILES: &str = r"opengl32sw,qt6location,qt6webchannel,
  qt6webenginequick,qt6webenginequickdelegatesqml,qt6websockets,\
  qt6virtualkeyboard,qt6pdfquick,qt6pdf,qt6quicktimeline,qt6datavisualizationqml,\
  qt6datavisualization,qt6charts,\
  qt6chartsqml,qt6webenginecore,qt6quick3d,qt6quick3dassetimport,qt6quick3d,\
  qt6quick3dassetutils,qt6quick3deffects,\
  qt6quick3dhelpers,qt6quick3dparticleeffects,qt6quick3dparticles,qt6quick3druntimerender,\
  qt6quick3d,qt6quick3dutils,\
  qt6graphs,qt6test,qt6texttospeech,'qt63danimation,qt63dcore,qt63dextras,qt63dinput,\
  qt63dlogic,\
  qt63dquick,qt63dquickanimation,qt63dquickextras,qt63dquickinput,qt63dquickrender,\
  qt63dquickscene2d,qt63drender,\
  qt63dquickrender,qt6quickcontrols2fusion,qt6quickcontrols2fusionstyleimpl,\
  qt6quickcontrols2imagine,\
  qt6quickcontrols2imaginestyleimpl,qt6quickcontrols2universal,\
  qt6quickcontrols2universalstyleimpl,\
  qt6quickcontrols2windowsstyleimpl,qt6quicktest,qt6remoteobjects,qt6remoteobjectsqml,\
  qt6scxml,\
  qt6scxmlqml,qt6sensors,qt6sensorsquick,qt6spatialaudio,qt6sql,\
  qt6statemachine,qt6statemachineqml";

/// Outcome of an `ensure_*` check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStatus {
    Existing,
    Created,
}

/// Create `.env` under `root` when absent, prompting for the API key.
pub fn ensure_env_file(root: &Path, input: &mut impl BufRead) -> Result<BootstrapStatus> {
    let path = root.join(ENV_FILE);
    if path.exists() {
        return Ok(BootstrapStatus::Existing);
    }

    let api = prompt_line(
        "Please enter the GitHub API key (Keep empty if you want to send requests unregistered) -> ",
        input,
    )?;
    fs::write(&path, format!("DEV_API={api}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(target: "devstart::bootstrap", path = %path.display(), "Created .env");
    Ok(BootstrapStatus::Created)
}

/// Create `config.properties` under `root` with defaults when absent.
///
/// When the file is created the user is told to fill it in and the caller
/// must halt with exit code 1.
pub fn ensure_properties_file(root: &Path, input: &mut impl BufRead) -> Result<BootstrapStatus> {
    let path = root.join(PROPERTIES_FILE);
    if path.exists() {
        return Ok(BootstrapStatus::Existing);
    }

    fs::write(&path, default_properties())
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(target: "devstart::bootstrap", path = %path.display(), "Created config.properties");

    println!("Please fill in the config.properties file.");
    prompt_line("Press any key to exit ...", input)?;
    Ok(BootstrapStatus::Created)
}

fn default_properties() -> String {
    format!(
        "[application]\n\
         appId=\n\
         appName=GoodbyeDPI_UI\n\
         company=Company\n\
         copyright=Copyright (c) 2025\n\
         domain=com.example.domain.appname\n\
         version=0.0.0\n\
         [build]\n\
         projectName=GoodbyeDPI_UI\n\
         hotLoad=OFF\n\
         excludeFiles={EXCLUDE_QT_FILES}\n"
    )
}
