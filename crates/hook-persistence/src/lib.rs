//! hook-persistence
//!
//! Acceso al store relacional de artifacts (TeamForge sobre Postgres) y
//! carga de configuración de conexión.
//!
//! Módulos:
//! - `config`: `hook.properties` y armado de la URL de conexión.
//! - `error`: errores de Diesel / conexión mapeados a variantes propias.
//! - `pg`: `PgArtifactStore`, implementación Diesel de `ArtifactStore`.

pub mod config;
pub mod error;
pub mod pg;

pub use config::{locate_properties, DbConfig, Properties};
pub use error::PersistenceError;
pub use pg::{query_artifact, PgArtifactStore};
