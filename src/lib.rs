//! Developer launcher for the GoodbyeDPI UI desktop application.
//!
//! Bootstraps `.env` and `config.properties` on first run, renders
//! `src/GlobalConfig.py` from the properties file, and starts the
//! application with an adjusted `PYTHONPATH`.

pub mod cli;
pub mod config;
pub mod errors;
pub mod launcher;
pub mod telemetry;
