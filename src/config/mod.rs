//! Local configuration: first-run bootstrap, properties parsing, and
//! generated-config rendering.

pub mod bootstrap;
pub mod properties;
pub mod render;

pub use bootstrap::{
    ensure_env_file, ensure_properties_file, BootstrapStatus, ENV_FILE, PROPERTIES_FILE,
};
pub use properties::Properties;
pub use render::{write_global_config, GENERATED_CONFIG};
