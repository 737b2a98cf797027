//! Errores de persistencia.
//! Mapea errores de Diesel / conexión a variantes semánticas.

use diesel::result::{ConnectionError, Error as DieselError};
use hook_core::HookError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("unexpected row shape: {0}")]
    Deserialization(String),
    #[error("database error: {0}")]
    Database(String),
    #[error("unknown database error: {0}")]
    Unknown(String),
}

impl From<ConnectionError> for PersistenceError {
    fn from(err: ConnectionError) -> Self {
        Self::Connection(err.to_string())
    }
}

impl From<DieselError> for PersistenceError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(kind, info) => Self::Database(format!("{kind:?}: {}", info.message())),
            DieselError::DeserializationError(e) => Self::Deserialization(e.to_string()),
            DieselError::SerializationError(e) => Self::Unknown(format!("ser: {e}")),
            DieselError::QueryBuilderError(e) => Self::Unknown(format!("query builder: {e}")),
            other => Self::Unknown(format!("unhandled diesel error: {other:?}")),
        }
    }
}

impl From<PersistenceError> for HookError {
    fn from(err: PersistenceError) -> Self {
        HookError::Store(Box::new(err))
    }
}
