//! Modelo de datos del hook (una sola pasada de validación).
pub mod artifact;
pub mod policy;
pub mod transaction;
pub mod verdict;
pub mod violation;

pub use artifact::ArtifactRecord;
pub use policy::{FileSizeLimit, PolicyConfig};
pub use transaction::{ChangeKind, ChangedPath, TxnContext};
pub use verdict::Verdict;
pub use violation::Violation;
