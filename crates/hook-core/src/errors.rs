//! Errores del hook.
//!
//! `HookError` cubre los fallos de sistema (configuración, herramienta
//! externa, base de datos, metadata mal formada). Las violaciones de
//! política viven en `model::Violation`; `HookFailure` une ambos para que cada
//! paso del pipeline pueda propagar con `?`.

use thiserror::Error;

use crate::model::Violation;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("bad arguments: {0}")]
    BadArguments(String),
    #[error("failed to run '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{command}' exited with status {exit_code}: {message}")]
    Command { command: String, exit_code: i32, message: String },
    #[error("parse error in {context}: {message}")]
    Parse { context: String, message: String },
    #[error("invalid package description: {0}")]
    InvalidPackageDescription(&'static str),
    #[error("{0}")]
    Config(String),
    #[error("artifact store lookup failed")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Motivo por el que el pipeline se detuvo antes de aceptar la transacción.
#[derive(Debug, Error)]
pub enum HookFailure {
    #[error(transparent)]
    Rejected(#[from] Violation),
    #[error(transparent)]
    System(#[from] HookError),
}
