//! Error types shared across the launcher modules.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while reading `config.properties`.
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// Failed to read the properties file.
    #[error("Failed to read properties file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A key appeared before any `[section]` header.
    #[error("Properties file {path} has a key before any section header (line {line})")]
    MissingSectionHeader { path: PathBuf, line: usize },
    /// An indented continuation line appeared with no key to continue.
    #[error("Properties file {path} has a continuation line with no preceding key (line {line})")]
    StrayContinuation { path: PathBuf, line: usize },
}

/// Errors that can occur while rendering the generated configuration module.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Failed to write the rendered output.
    #[error("Failed to write generated config {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The template references a placeholder with no value.
    #[error("Template references unknown placeholder `{name}`")]
    UnresolvedPlaceholder { name: String },
}

/// Errors that can occur while starting child processes.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to spawn `{program}`: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}
