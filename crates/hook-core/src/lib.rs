//! hook-core: tipos y adaptadores compartidos del hook pre-commit.
//!
//! Módulos:
//! - `command`: invocación de procesos externos con drenado concurrente.
//! - `errors`: errores de sistema (`HookError`) y fallos del pipeline.
//! - `model`: transacción, artifact, configuración de políticas, violaciones
//!   y veredicto.
//! - `txn`: contrato `TxnInspector` y su implementación sobre `svnlook`.
//! - `store`: contrato de lectura de artifacts y backend en memoria.
//! - `report`: banner que se muestra al operador.
//! - `utils`: helpers sueltos (basename, límites de tamaño, listas).
pub mod command;
pub mod errors;
pub mod model;
pub mod report;
pub mod store;
pub mod txn;
pub mod utils;

pub use command::{run_command, CommandOutput};
pub use errors::{HookError, HookFailure};
pub use model::{ArtifactRecord, ChangeKind, ChangedPath, FileSizeLimit, PolicyConfig, TxnContext, Verdict, Violation};
pub use store::{ArtifactStore, InMemoryArtifactStore};
pub use txn::{SvnLook, TxnInspector};
