//! Invocación de comandos nativos.
pub mod runner;

pub use runner::{run_command, CommandOutput};
