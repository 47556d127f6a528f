#![deny(clippy::all)]

/**
 * d2o Compiler CLI
 *
 * File discovery, configuration, linting and batch compilation around the
 * d2o compiler
 */
pub use d2o_compiler as compiler;

pub mod config;
pub mod file_controller;
pub mod linter;
pub mod logging;
pub mod main_entry;
pub mod perform_compile;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
